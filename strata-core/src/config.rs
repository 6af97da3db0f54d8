//! Display geometry and driver configuration
//!
//! Geometry is fixed at compile time. Everything that can differ between
//! boards using the same controller lives in [`LcdConfig`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of character rows
pub const ROWS: usize = 2;

/// Number of character columns
pub const COLS: usize = 16;

/// Transparent cell value
///
/// Equal to the byte a cleared controller holds in every cell.
pub const CLEAR_BYTE: u8 = b' ';

/// DDRAM base address of each row on a 2-line controller
pub const DEFAULT_ROW_ADDRESSES: [u8; ROWS] = [0x00, 0x40];

/// How the compositor picks the cursor of the flattened frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CursorPolicy {
    /// The last visible layer in bottom-to-top order supplies the cursor,
    /// whether or not its own cursor is switched on.
    ///
    /// A layer without a visible cursor therefore hides the cursor of every
    /// layer beneath it.
    #[default]
    LastVisibleLayer,
    /// The topmost visible layer whose cursor is on supplies the cursor.
    /// If no such layer exists the cursor is off.
    TopmostCursorOn,
}

/// Runtime configuration of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// DDRAM base address of each row
    pub row_addresses: [u8; ROWS],
    /// Cursor selection rule used when flattening
    pub cursor_policy: CursorPolicy,
}

impl LcdConfig {
    /// Reference configuration: 2x16 controller, literal cursor rule
    pub const fn new() -> Self {
        Self {
            row_addresses: DEFAULT_ROW_ADDRESSES,
            cursor_policy: CursorPolicy::LastVisibleLayer,
        }
    }

    /// DDRAM address of a 0-based cell
    ///
    /// Rows past the last one map onto the last row.
    pub fn address(&self, row: usize, col: usize) -> u8 {
        self.row_addresses[row.min(ROWS - 1)].wrapping_add(col as u8)
    }
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::new()
    }
}
