//! Fixed-size character grid
//!
//! The grid shared by layers, composited frames and the writer's snapshot of
//! the hardware. Coordinates here are 0-based; the 1-based public API is
//! translated by [`LayerStore`](crate::LayerStore).

use core::fmt;

use crate::config::{CLEAR_BYTE, COLS, ROWS};

/// A `ROWS` x `COLS` grid of character cells
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    cells: [[u8; COLS]; ROWS],
}

impl CellGrid {
    /// Create a grid with every cell transparent
    pub const fn cleared() -> Self {
        Self {
            cells: [[CLEAR_BYTE; COLS]; ROWS],
        }
    }

    /// Make every cell transparent
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(CLEAR_BYTE);
        }
    }

    /// Make every cell of one row transparent
    ///
    /// Out-of-range rows are ignored.
    pub fn clear_row(&mut self, row: usize) {
        if let Some(cells) = self.cells.get_mut(row) {
            cells.fill(CLEAR_BYTE);
        }
    }

    /// Read a cell
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Write a cell, returning `false` if it lies outside the grid
    pub fn set(&mut self, row: usize, col: usize, byte: u8) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = byte;
                true
            }
            None => false,
        }
    }

    /// Write a run of bytes starting at `(row, col)`
    ///
    /// Bytes that would fall past the last column are dropped; there is no
    /// wraparound. Returns the number of bytes actually stored.
    pub fn put(&mut self, row: usize, col: usize, bytes: &[u8]) -> usize {
        let Some(cells) = self.cells.get_mut(row) else {
            return 0;
        };
        if col >= COLS {
            return 0;
        }
        let n = bytes.len().min(COLS - col);
        cells[col..col + n].copy_from_slice(&bytes[..n]);
        n
    }

    /// Copy every non-transparent cell of `top` over this grid
    pub fn overlay(&mut self, top: &CellGrid) {
        for (dst_row, src_row) in self.cells.iter_mut().zip(top.cells.iter()) {
            for (dst, &src) in dst_row.iter_mut().zip(src_row.iter()) {
                if src != CLEAR_BYTE {
                    *dst = src;
                }
            }
        }
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> Option<&[u8; COLS]> {
        self.cells.get(row)
    }

    /// Iterate over all rows, top first
    pub fn rows(&self) -> impl Iterator<Item = &[u8; COLS]> {
        self.cells.iter()
    }

    /// Check whether every cell is transparent
    pub fn is_clear(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == CLEAR_BYTE)
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::cleared()
    }
}

impl fmt::Debug for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in &self.cells {
            list.entry(&core::str::from_utf8(row).unwrap_or("<non-ascii>"));
        }
        list.finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CellGrid {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CellGrid[");
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=[u8]:a}", row);
        }
        defmt::write!(f, "]");
    }
}
