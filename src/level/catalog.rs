//! The static level table
//!
//! Levels are immutable data: an initial placement of values, pointers and
//! locks into specific grid indices, plus a win [`Goal`]. The engine never
//! branches on a level id; everything it needs is in the descriptor.

use super::goal::Goal;
use crate::memory::cell::CellKind;

/// One entry of a level's initial layout
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Grid index to place into
    pub index: usize,
    pub kind: CellKind,
    pub value: Option<i32>,
    /// Initial pointer target, as a grid index
    pub points_to: Option<usize>,
    pub locked: bool,
}

impl Placement {
    /// A value cell
    pub const fn value(index: usize, value: i32) -> Self {
        Placement {
            index,
            kind: CellKind::Value,
            value: Some(value),
            points_to: None,
            locked: false,
        }
    }

    /// A locked value cell (unreachable by direct connection)
    pub const fn locked_value(index: usize, value: i32) -> Self {
        Placement {
            index,
            kind: CellKind::Value,
            value: Some(value),
            points_to: None,
            locked: true,
        }
    }

    /// An uninitialized pointer cell
    pub const fn pointer(index: usize) -> Self {
        Placement {
            index,
            kind: CellKind::Pointer,
            value: None,
            points_to: None,
            locked: false,
        }
    }

    /// A pointer cell pre-aimed at another grid index
    pub const fn pointer_at(index: usize, target: usize) -> Self {
        Placement {
            index,
            kind: CellKind::Pointer,
            value: None,
            points_to: Some(target),
            locked: false,
        }
    }
}

/// A puzzle level: presentation strings plus the layout and win condition
#[derive(Debug)]
pub struct Level {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon identifier for the level card
    pub icon: &'static str,
    /// Code-log line shown when the level starts
    pub intro: &'static str,
    pub layout: &'static [Placement],
    /// `None` means free play: nothing to solve
    pub goal: Option<Goal>,
}

/// Every level, in play order
pub static LEVELS: &[Level] = &[
    Level {
        id: 0,
        title: "Sandbox",
        description: "Free play. Drag cells to build pointers, dereference them, and watch the C code that falls out.",
        icon: "square.grid.3x3",
        intro: "// Sandbox mode: no mission, just memory.",
        layout: &[Placement::value(0, 42), Placement::pointer_at(5, 0)],
        goal: None,
    },
    Level {
        id: 1,
        title: "Find the Address",
        description: "Memory is a street of numbered houses. Aim a pointer at the house that already has someone living in it.",
        icon: "map",
        intro: "// Level 1: aim a pointer at address 0x700C.",
        layout: &[Placement::value(3, 100), Placement::pointer(8)],
        goal: Some(Goal::PointerTo(3)),
    },
    Level {
        id: 2,
        title: "Stepping-Stone Pointer",
        description: "The data at 0x701C is locked against direct access. Another pointer already knows the way; point at the pointer.",
        icon: "arrow.triangle.branch",
        intro: "// Level 2: 0x701C is locked. Reach it through another pointer.",
        layout: &[
            Placement::locked_value(7, 777),
            Placement::pointer_at(5, 7),
            Placement::pointer(14),
        ],
        goal: Some(Goal::PointerInto(5)),
    },
    Level {
        id: 3,
        title: "The Chain",
        description: "Pointers live in memory too, so a pointer can point at a pointer. Link Start to the treasure, one hop at a time.",
        icon: "link",
        intro: "// Level 3: link Start (0x7000) all the way to the treasure (0x703C).",
        layout: &[
            Placement::value(15, 999),
            Placement::pointer(11),
            Placement::pointer(5),
            Placement::pointer(0),
        ],
        goal: Some(Goal::Chain(&[0, 5, 11, 15])),
    },
];

/// Look up a level by id
pub fn level(id: u32) -> Option<&'static Level> {
    LEVELS.iter().find(|level| level.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_resolvable() {
        for entry in LEVELS {
            assert!(std::ptr::eq(level(entry.id).unwrap(), entry));
        }
    }

    #[test]
    fn layouts_fit_the_grid() {
        use crate::memory::grid::GRID_CELLS;
        for entry in LEVELS {
            for placement in entry.layout {
                assert!(placement.index < GRID_CELLS, "level {}", entry.id);
                if let Some(target) = placement.points_to {
                    assert!(target < GRID_CELLS, "level {}", entry.id);
                }
            }
        }
    }

    #[test]
    fn unknown_id_misses() {
        assert!(level(99).is_none());
    }
}
