//! The quest session: single owner of all mutable puzzle state
//!
//! [`QuestSession`] holds the active grid, the current code-log line, the
//! solved flag, the auto-init RNG, and the flag-clear timer queue. Every
//! user action is a synchronous method on it; there is no other mutable
//! state anywhere in the core.
//!
//! All operations are atomic: precondition checks happen before any
//! mutation, so a rejected action leaves the grid untouched apart from the
//! transient error flag on the offending cell.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use super::codelog::{self, CodeLog};
use super::errors::ActionError;
use super::timers::{Flag, FlagTimers};
use crate::level::catalog::{self, Level};
use crate::memory::cell::{Address, Cell, CellKind};
use crate::memory::grid::MemoryGrid;

/// One play session: a level, its grid, and everything the UI renders
pub struct QuestSession {
    grid: MemoryGrid,
    level: &'static Level,
    log: CodeLog,
    rng: ChaCha8Rng,
    timers: FlagTimers,
    solved: bool,
    just_solved: bool,
}

impl QuestSession {
    /// Start a session on the given level, seeding the RNG from entropy
    pub fn new(level_id: u32) -> Result<Self, ActionError> {
        Self::with_rng(level_id, ChaCha8Rng::from_entropy())
    }

    /// Start a session with a fixed RNG seed (deterministic auto-init)
    pub fn with_seed(level_id: u32, seed: u64) -> Result<Self, ActionError> {
        Self::with_rng(level_id, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(level_id: u32, rng: ChaCha8Rng) -> Result<Self, ActionError> {
        let level =
            catalog::level(level_id).ok_or(ActionError::UnknownLevel { id: level_id })?;
        let mut session = QuestSession {
            grid: MemoryGrid::new(),
            level,
            log: CodeLog::new(),
            rng,
            timers: FlagTimers::new(),
            solved: false,
            just_solved: false,
        };
        session.load(level);
        Ok(session)
    }

    /// Switch to another level, rebuilding the grid from its layout
    pub fn start_level(&mut self, level_id: u32) -> Result<(), ActionError> {
        let level =
            catalog::level(level_id).ok_or(ActionError::UnknownLevel { id: level_id })?;
        self.load(level);
        Ok(())
    }

    /// Rebuild the active level from scratch
    pub fn reset_current_level(&mut self) {
        self.load(self.level);
    }

    fn load(&mut self, level: &'static Level) {
        let mut grid = MemoryGrid::new();
        for placement in level.layout {
            if let Some(cell) = grid.get_mut(placement.index) {
                cell.kind = placement.kind;
                cell.value = placement.value;
                cell.points_to = placement.points_to.map(MemoryGrid::address_at);
                cell.locked = placement.locked;
            }
        }
        self.grid = grid;
        self.level = level;
        self.log = CodeLog::new();
        self.log.set(level.intro);
        self.solved = false;
        self.just_solved = false;
        self.timers.reset();
    }

    /// Drag-connect: turn the source cell into a pointer aimed at the
    /// destination (`source = &destination;`)
    ///
    /// An empty destination is auto-initialized with a random value in
    /// `1..=99`, modeling the compiler giving the referenced variable a
    /// garbage value on first use. A successful connect re-evaluates the
    /// level's win predicate.
    pub fn connect(&mut self, source: &Address, destination: &Address) -> Result<(), ActionError> {
        if source == destination {
            return self.fail(ActionError::SelfReference {
                address: source.clone(),
            });
        }
        if !self.grid.contains(source) {
            return self.fail(ActionError::UnknownAddress {
                address: source.clone(),
            });
        }
        let (dest_locked, dest_empty) = match self.grid.cell(destination) {
            Some(cell) => (cell.locked, cell.is_empty()),
            None => {
                return self.fail(ActionError::UnknownAddress {
                    address: destination.clone(),
                })
            }
        };
        if dest_locked {
            return self.fail(ActionError::AccessDenied {
                address: destination.clone(),
            });
        }

        // Checks done; the mutation below cannot fail part-way.
        if dest_empty {
            let value = self.rng.gen_range(1..=99);
            if let Some(cell) = self.grid.cell_mut(destination) {
                cell.fill_value(value);
            }
            self.log.set(codelog::connect_auto_init(value));
            self.flag(destination, Flag::Highlight);
        } else {
            self.log.set(codelog::connect(destination));
        }
        if let Some(cell) = self.grid.cell_mut(source) {
            cell.make_pointer(destination.clone());
        }
        self.flag(source, Flag::Highlight);

        self.check_goal();
        Ok(())
    }

    /// Follow a pointer exactly one hop and report what is there
    ///
    /// Read-only: no cell's kind, value, or target changes. Chains are not
    /// followed; a pointer-to-pointer target is reported as double
    /// indirection and left unresolved.
    pub fn dereference(&mut self, address: &Address) -> Result<(), ActionError> {
        let Some(cell) = self.grid.cell(address) else {
            return self.fail(ActionError::UnknownAddress {
                address: address.clone(),
            });
        };

        let target = match (&cell.kind, &cell.points_to) {
            (CellKind::Pointer, Some(t)) if self.grid.contains(t) => t.clone(),
            _ => {
                return self.fail(ActionError::InvalidPointer {
                    address: address.clone(),
                })
            }
        };

        let (target_kind, target_value) = match self.grid.cell(&target) {
            Some(c) => (c.kind, c.value),
            None => {
                return self.fail(ActionError::InvalidPointer {
                    address: address.clone(),
                })
            }
        };

        let line = match (target_kind, target_value) {
            (CellKind::Value, Some(v)) => codelog::deref_value(v),
            (CellKind::Pointer, _) => codelog::deref_pointer(),
            _ => codelog::deref_empty(&target),
        };
        self.log.set(line);
        self.flag(&target, Flag::Highlight);
        Ok(())
    }

    /// Tap-inspect: classify the cell for the code log
    ///
    /// Follows at most one hop of a pointer for display, highlighting the
    /// cells involved. Never mutates semantic state.
    pub fn inspect(&mut self, address: &Address) -> Result<(), ActionError> {
        let Some(cell) = self.grid.cell(address) else {
            return self.fail(ActionError::UnknownAddress {
                address: address.clone(),
            });
        };
        if cell.locked {
            return self.fail(ActionError::AccessDenied {
                address: address.clone(),
            });
        }
        let kind = cell.kind;
        let value = cell.value;
        let points_to = cell.points_to.clone();

        match (kind, value) {
            (CellKind::Value, Some(v)) => {
                self.log.set(codelog::inspect_value(v, address));
                self.flag(address, Flag::Highlight);
            }
            (CellKind::Pointer, _) => match points_to {
                Some(target) if self.grid.contains(&target) => {
                    let line = match self.grid.cell(&target) {
                        Some(t) if t.kind == CellKind::Value => codelog::inspect_pointer_to_value(
                            t.value.unwrap_or_default(),
                            &target,
                        ),
                        Some(t) if t.is_pointer() => codelog::inspect_double_pointer(&target),
                        _ => codelog::inspect_pointer_to_empty(&target),
                    };
                    self.log.set(line);
                    self.flag(address, Flag::Highlight);
                    self.flag(&target, Flag::Highlight);
                }
                _ => {
                    self.log.set(codelog::inspect_unset_pointer());
                    self.flag(address, Flag::Highlight);
                }
            },
            _ => {
                self.log.set(codelog::inspect_empty(address));
                self.flag(address, Flag::Highlight);
            }
        }
        Ok(())
    }

    /// Clear transient flags whose timers are due at `now`
    pub fn tick_at(&mut self, now: Instant) {
        for (address, flag) in self.timers.fire_due(now) {
            if let Some(cell) = self.grid.cell_mut(&address) {
                match flag {
                    Flag::Highlight => cell.highlighted = false,
                    Flag::Error => cell.errored = false,
                }
            }
        }
    }

    /// Clear transient flags whose timers are due now
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn grid(&self) -> &MemoryGrid {
        &self.grid
    }

    pub fn code_log(&self) -> &str {
        self.log.line()
    }

    pub fn level(&self) -> &'static Level {
        self.level
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// One-shot success signal: true exactly once, on the action that
    /// solved the level
    pub fn take_just_solved(&mut self) -> bool {
        std::mem::take(&mut self.just_solved)
    }

    fn check_goal(&mut self) {
        if self.solved {
            return;
        }
        let Some(goal) = &self.level.goal else {
            return;
        };
        if goal.is_met(&self.grid) {
            self.solved = true;
            self.just_solved = true;
            self.log.set(codelog::level_clear());
        }
    }

    /// Record a rejected action: replace the log, flag the offender, and
    /// hand the error back to the caller
    fn fail(&mut self, err: ActionError) -> Result<(), ActionError> {
        self.log.set_error(&err);
        if let Some(address) = err.offending_address().cloned() {
            self.flag(&address, Flag::Error);
        }
        Err(err)
    }

    fn flag(&mut self, address: &Address, flag: Flag) {
        let Some(cell) = self.grid.cell_mut(address) else {
            return;
        };
        match flag {
            Flag::Highlight => cell.highlighted = true,
            Flag::Error => cell.errored = true,
        }
        self.timers.schedule(address.clone(), flag, Instant::now());
    }
}
