//! Board-agnostic core of the layered character LCD driver
//!
//! Several concurrently running tasks share one character display. Each
//! task owns a *layer*; the layers live in a single [`LayerStore`] behind one
//! mutex. A single consumer, the [`CompositorTask`], wakes whenever a layer
//! changes, flattens the visible layers into a [`Frame`] and hands it to the
//! [`DiffWriter`], which sends only the changed characters to the hardware.
//!
//! - Fixed-size character grids and layers
//! - Layer store with coalescing wake signal
//! - Numeric/text formatters (decimal, hex, time)
//! - Compositor (transparency, cursor precedence)
//! - Diffing writer over an abstract transport
//! - HD44780 instruction encodings

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod compositor;
pub mod config;
pub mod diff;
pub mod error;
pub mod format;
pub mod grid;
pub mod layer;
pub mod store;
pub mod task;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use compositor::{flatten, Frame};
pub use config::{CursorPolicy, LcdConfig, CLEAR_BYTE, COLS, ROWS};
pub use diff::{DiffWriter, WriteStats};
pub use error::{Coordinate, LcdError};
pub use format::DecMode;
pub use grid::CellGrid;
pub use layer::{Cursor, Layer};
pub use store::LayerStore;
pub use task::{CompositorTask, TaskState};
pub use transport::DisplayTransport;
