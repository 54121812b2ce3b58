//! Cell representation for the memory grid
//!
//! This module defines [`Cell`], the addressable unit of the simulated memory,
//! and [`CellKind`], its role. Unlike real memory, cells are tagged: a cell
//! knows whether it currently holds a literal value, a pointer to another
//! cell's address, or nothing at all.
//!
//! # Transient flags
//!
//! `highlighted` and `errored` are visual-feedback flags only. They carry no
//! semantic meaning; the engine sets them as a side-effect signal and clears
//! them on a fixed delay (see [`crate::engine::timers`]).

use std::fmt;

/// A symbolic memory address label (e.g. `0x700C`)
///
/// Addresses are identity keys: unique within a grid and immutable once the
/// grid is built. They are labels for teaching, not machine addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(label: impl Into<String>) -> Self {
        Address(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role of a memory cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Unoccupied memory
    #[default]
    Empty,
    /// An ordinary variable holding an integer
    Value,
    /// A pointer holding (at most) another cell's address
    Pointer,
}

/// One addressable unit of the simulated memory grid
#[derive(Debug, Clone)]
pub struct Cell {
    /// Identity key, fixed at grid creation
    pub address: Address,
    /// Stored integer; meaningful only when `kind == Value`
    pub value: Option<i32>,
    pub kind: CellKind,
    /// Target address; meaningful only when `kind == Pointer`.
    /// `None` on a pointer cell means an uninitialized pointer.
    pub points_to: Option<Address>,
    /// Locked cells reject being the direct target of a new connection
    pub locked: bool,
    /// Transient: cell was just touched by an action
    pub highlighted: bool,
    /// Transient: cell was the offender in a failed action
    pub errored: bool,
}

impl Cell {
    /// A fresh empty cell at the given address
    pub fn empty(address: Address) -> Self {
        Cell {
            address,
            value: None,
            kind: CellKind::Empty,
            points_to: None,
            locked: false,
            highlighted: false,
            errored: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    pub fn is_pointer(&self) -> bool {
        self.kind == CellKind::Pointer
    }

    /// Turn this cell into a pointer aimed at `target`
    ///
    /// Any previously held value is cleared; a cell is never a value and a
    /// pointer at the same time.
    pub fn make_pointer(&mut self, target: Address) {
        self.kind = CellKind::Pointer;
        self.value = None;
        self.points_to = Some(target);
    }

    /// Fill this cell with a literal value
    pub fn fill_value(&mut self, value: i32) {
        self.kind = CellKind::Value;
        self.points_to = None;
        self.value = Some(value);
    }
}
