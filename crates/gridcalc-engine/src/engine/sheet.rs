//! Address-keyed cell container.

use super::address::Address;
use super::cell::{Cell, Grid};
use super::eval::evaluate;

/// A sheet of cells keyed by address, at most one cell per address.
///
/// Lookups for addresses that were never populated return `None`; that is
/// not an error condition — a formula consuming an absent operand reads it
/// as 0.
///
/// Cells never hold references to each other, only addresses resolved
/// through the sheet at evaluation time, so the dependency graph is implicit
/// and there is no cyclic ownership to manage.
#[derive(Debug, Default)]
pub struct Sheet {
    cells: Grid,
    /// Cells per loaded row, in row order. Preserves the input shape
    /// (including ragged rows) for output.
    row_widths: Vec<usize>,
}

impl Sheet {
    pub fn new() -> Sheet {
        Sheet::default()
    }

    /// Insert a cell at an address. Last write wins on duplicates.
    pub fn add(&self, addr: Address, cell: Cell) {
        self.cells.insert(addr, cell);
    }

    /// Append a row of cells, assigning addresses by position.
    pub fn add_row(&mut self, cells: Vec<Cell>) {
        let row = self.row_widths.len();
        self.row_widths.push(cells.len());
        for (col, cell) in cells.into_iter().enumerate() {
            self.cells.insert(Address::new(row, col), cell);
        }
    }

    /// Look up a cell snapshot by address. `None` means the address was
    /// never populated.
    pub fn get(&self, addr: &Address) -> Option<Cell> {
        self.cells.get(addr).map(|entry| entry.value().clone())
    }

    /// The backing cell storage.
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of loaded rows.
    pub fn row_count(&self) -> usize {
        self.row_widths.len()
    }

    /// Number of cells in a loaded row (0 for rows never loaded).
    pub fn row_width(&self, row: usize) -> usize {
        self.row_widths.get(row).copied().unwrap_or(0)
    }

    /// All populated addresses in row-major order, independent of insertion
    /// order.
    pub fn addresses(&self) -> Vec<Address> {
        let mut addrs: Vec<Address> = self.cells.iter().map(|entry| *entry.key()).collect();
        addrs.sort();
        addrs
    }

    /// Evaluate every cell, in row-major order. A cell already pulled in as
    /// another formula's operand is `Done` by the time the scan reaches it
    /// and is not re-evaluated, so each cell is evaluated exactly once.
    pub fn evaluate_all(&self) {
        for addr in self.addresses() {
            evaluate(self, &addr);
        }
    }
}
