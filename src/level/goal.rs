//! Win predicates
//!
//! A [`Goal`] is a pure structural check of the grid. Goals are evaluated
//! after every successful connect; they never mutate anything and they are
//! safe to re-evaluate on an already-solved grid.

use crate::memory::cell::Address;
use crate::memory::grid::MemoryGrid;

/// The per-level win condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Some pointer cell's target equals the address of the cell at this
    /// grid index (single-hop goal)
    PointerTo(usize),

    /// The cell at this index is a pointer, and some pointer cell aims at
    /// it (double-indirection goal)
    PointerInto(usize),

    /// The cells at these indices form an unbroken points-to chain, in
    /// order (multi-hop goal)
    Chain(&'static [usize]),
}

impl Goal {
    /// Evaluate this goal against the current grid
    pub fn is_met(&self, grid: &MemoryGrid) -> bool {
        match self {
            Goal::PointerTo(i) => {
                let Some(target) = grid.get(*i) else {
                    return false;
                };
                any_pointer_at(grid, &target.address)
            }
            Goal::PointerInto(i) => {
                let Some(relay) = grid.get(*i) else {
                    return false;
                };
                relay.is_pointer() && any_pointer_at(grid, &relay.address)
            }
            Goal::Chain(links) => links.windows(2).all(|pair| {
                let (Some(from), Some(to)) = (grid.get(pair[0]), grid.get(pair[1])) else {
                    return false;
                };
                from.points_to.as_ref() == Some(&to.address)
            }),
        }
    }
}

fn any_pointer_at(grid: &MemoryGrid, target: &Address) -> bool {
    grid.cells()
        .iter()
        .any(|cell| cell.is_pointer() && cell.points_to.as_ref() == Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aim(grid: &mut MemoryGrid, from: usize, to: usize) {
        let target = MemoryGrid::address_at(to);
        if let Some(cell) = grid.get_mut(from) {
            cell.make_pointer(target);
        }
    }

    #[test]
    fn pointer_to_checks_any_pointer() {
        let mut grid = MemoryGrid::new();
        let goal = Goal::PointerTo(3);
        assert!(!goal.is_met(&grid));

        aim(&mut grid, 8, 3);
        assert!(goal.is_met(&grid));
    }

    #[test]
    fn pointer_into_requires_relay_to_be_a_pointer() {
        let mut grid = MemoryGrid::new();
        let goal = Goal::PointerInto(5);

        // Aiming at a non-pointer relay is not double indirection.
        aim(&mut grid, 14, 5);
        assert!(!goal.is_met(&grid));

        aim(&mut grid, 5, 7);
        assert!(goal.is_met(&grid));
    }

    #[test]
    fn chain_requires_every_link() {
        let mut grid = MemoryGrid::new();
        let goal = Goal::Chain(&[0, 5, 11, 15]);

        aim(&mut grid, 0, 5);
        aim(&mut grid, 5, 11);
        assert!(!goal.is_met(&grid));

        aim(&mut grid, 11, 15);
        assert!(goal.is_met(&grid));
    }

    #[test]
    fn chain_rejects_links_out_of_order() {
        let mut grid = MemoryGrid::new();
        let goal = Goal::Chain(&[0, 5, 11, 15]);

        // Right cells, wrong wiring.
        aim(&mut grid, 0, 11);
        aim(&mut grid, 11, 5);
        aim(&mut grid, 5, 15);
        assert!(!goal.is_met(&grid));
    }
}
