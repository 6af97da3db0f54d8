//! Layers and cursors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{COLS, ROWS};
use crate::grid::CellGrid;

/// Cursor descriptor
///
/// `row` and `col` are 1-based, as in the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    /// Row, `1..=ROWS`
    pub row: u8,
    /// Column, `1..=COLS`
    pub col: u8,
    /// Cursor underline shown
    pub visible: bool,
    /// Cursor block blinks
    pub blinking: bool,
}

impl Cursor {
    /// Cursor parked at the home position, not shown
    pub const HIDDEN: Self = Self {
        row: 1,
        col: 1,
        visible: false,
        blinking: false,
    };

    /// Check that the position lies on the display
    pub fn in_bounds(&self) -> bool {
        (1..=ROWS as u8).contains(&self.row) && (1..=COLS as u8).contains(&self.col)
    }

    /// 0-based `(row, col)` of the cursor
    pub fn index(&self) -> (usize, usize) {
        (
            usize::from(self.row.saturating_sub(1)),
            usize::from(self.col.saturating_sub(1)),
        )
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// One independently writable display plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layer {
    /// Characters; [`CLEAR_BYTE`](crate::CLEAR_BYTE) cells are transparent
    pub grid: CellGrid,
    /// Cursor requested by this layer
    pub cursor: Cursor,
    /// Hidden layers take no part in compositing
    pub hidden: bool,
}

impl Layer {
    /// A visible, fully transparent layer with the cursor off
    pub const fn new() -> Self {
        Self {
            grid: CellGrid::cleared(),
            cursor: Cursor::HIDDEN,
            hidden: false,
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}
