//! Layer compositing
//!
//! Flattens the layers bottom (index 0) to top (highest index) into one
//! frame shaped like the physical display.

use crate::config::CursorPolicy;
use crate::grid::CellGrid;
use crate::layer::{Cursor, Layer};

/// Result of one compositing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Flattened characters
    pub grid: CellGrid,
    /// Cursor to show on the display
    pub cursor: Cursor,
}

impl Frame {
    /// All cells transparent, cursor off
    pub const fn blank() -> Self {
        Self {
            grid: CellGrid::cleared(),
            cursor: Cursor::HIDDEN,
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

/// Flatten `layers` into a frame
///
/// Hidden layers are skipped. A transparent cell never overwrites what a
/// lower layer put there. The cursor is chosen according to `policy`; with
/// [`CursorPolicy::LastVisibleLayer`] the last visible layer's cursor wins
/// even if that cursor is switched off.
pub fn flatten(layers: &[Layer], policy: CursorPolicy) -> Frame {
    let mut frame = Frame::blank();

    for layer in layers.iter().filter(|l| !l.hidden) {
        frame.grid.overlay(&layer.grid);

        match policy {
            CursorPolicy::LastVisibleLayer => frame.cursor = layer.cursor,
            CursorPolicy::TopmostCursorOn => {
                if layer.cursor.visible {
                    frame.cursor = layer.cursor;
                }
            }
        }
    }

    frame
}
