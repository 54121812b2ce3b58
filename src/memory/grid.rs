//! The fixed-size memory grid
//!
//! A [`MemoryGrid`] is an ordered collection of [`GRID_CELLS`] cells with
//! deterministic addresses: `BASE_ADDRESS + index * ADDRESS_STRIDE`,
//! formatted as four-digit hex labels. The grid is built fresh for every
//! level (re)start and never resized afterwards, so addresses are stable
//! for its whole lifetime.

use rustc_hash::FxHashMap;

use super::cell::{Address, Cell};

/// Number of cells in every grid (rendered as 4 x 4)
pub const GRID_CELLS: usize = 16;

/// First cell's numeric address
pub const BASE_ADDRESS: u32 = 0x7000;

/// Address distance between adjacent cells (one `int` apart)
pub const ADDRESS_STRIDE: u32 = 4;

/// The simulated address space: a fixed, ordered run of cells
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    cells: Vec<Cell>,
    index: FxHashMap<Address, usize>,
}

impl MemoryGrid {
    /// Build a grid of empty cells with deterministic addresses
    pub fn new() -> Self {
        let cells: Vec<Cell> = (0..GRID_CELLS)
            .map(|i| Cell::empty(Self::address_at(i)))
            .collect();

        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.address.clone(), i))
            .collect();

        MemoryGrid { cells, index }
    }

    /// The address label assigned to grid index `i`
    pub fn address_at(i: usize) -> Address {
        Address::new(format!(
            "0x{:04X}",
            BASE_ADDRESS + i as u32 * ADDRESS_STRIDE
        ))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grid index for an address, if it exists in this grid
    pub fn index_of(&self, address: &Address) -> Option<usize> {
        self.index.get(address).copied()
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.index.contains_key(address)
    }

    /// Look up a cell by address
    pub fn cell(&self, address: &Address) -> Option<&Cell> {
        self.index_of(address).map(|i| &self.cells[i])
    }

    /// Look up a cell by address, mutably
    pub fn cell_mut(&mut self, address: &Address) -> Option<&mut Cell> {
        self.index_of(address).map(|i| &mut self.cells[i])
    }

    /// Look up a cell by grid index
    pub fn get(&self, i: usize) -> Option<&Cell> {
        self.cells.get(i)
    }

    /// Look up a cell by grid index, mutably
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Cell> {
        self.cells.get_mut(i)
    }
}

impl Default for MemoryGrid {
    fn default() -> Self {
        Self::new()
    }
}
