//! Shared layer store
//!
//! All layers sit behind one [`Mutex`]. Every producer call takes the lock
//! for the duration of its own bounded write, releases it and then raises
//! the wake [`Signal`]. The signal holds a single flag: any number of writes
//! before the compositor runs collapse into one compositing pass.
//!
//! Rows and columns are 1-based here. A write whose text runs past the last
//! column is clipped; a zero or too-large row, a zero column or a layer
//! index `>= N` is rejected with [`LcdError::OutOfRange`] before anything is
//! touched.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use crate::compositor::{flatten, Frame};
use crate::config::{CursorPolicy, COLS, ROWS};
use crate::error::{Coordinate, LcdError};
use crate::format::{self, DecMode, TIME_WIDTH};
use crate::layer::{Cursor, Layer};

/// `N` layers shared between producers and the compositor
pub struct LayerStore<M: RawMutex, const N: usize> {
    layers: Mutex<M, [Layer; N]>,
    changed: Signal<M, ()>,
}

impl<M: RawMutex, const N: usize> LayerStore<M, N> {
    /// Create a store with every layer transparent and visible
    pub const fn new() -> Self {
        Self {
            layers: Mutex::new([Layer::new(); N]),
            changed: Signal::new(),
        }
    }

    /// Write one character
    pub async fn write_char(&self, layer: usize, row: u8, col: u8, ch: u8) -> Result<(), LcdError> {
        self.write_bytes(layer, row, col, &[ch]).await
    }

    /// Write a string, clipped at the last column
    pub async fn write_str(&self, layer: usize, row: u8, col: u8, text: &str) -> Result<(), LcdError> {
        self.write_bytes(layer, row, col, text.as_bytes()).await
    }

    /// Write raw character codes, clipped at the last column
    pub async fn write_bytes(
        &self,
        layer: usize,
        row: u8,
        col: u8,
        bytes: &[u8],
    ) -> Result<(), LcdError> {
        let (r, c) = text_origin(row, col)?;
        check_layer::<N>(layer)?;
        if c >= COLS {
            return Ok(());
        }
        self.modify(layer, |l| {
            l.grid.put(r, c, bytes);
        })
        .await
    }

    /// Write a byte as two hex digits at `col` and `col + 1`
    ///
    /// Does nothing if both digits do not fit on the row.
    pub async fn write_byte(&self, layer: usize, row: u8, col: u8, byte: u8) -> Result<(), LcdError> {
        let (r, c) = text_origin(row, col)?;
        check_layer::<N>(layer)?;
        if c + 2 > COLS {
            return Ok(());
        }
        self.modify(layer, |l| {
            l.grid.put(r, c, &format::hex_byte(byte));
        })
        .await
    }

    /// Write the low `nibbles` nibbles of `value` in hex
    ///
    /// An invalid nibble count writes `HexNibError` instead.
    pub async fn write_hex_word(
        &self,
        layer: usize,
        row: u8,
        col: u8,
        value: u32,
        nibbles: u8,
    ) -> Result<(), LcdError> {
        self.write_bytes(layer, row, col, &format::hex_word(value, nibbles))
            .await
    }

    /// Write `value` in decimal into a `field`-wide field
    pub async fn write_dec_word(
        &self,
        layer: usize,
        row: u8,
        col: u8,
        value: u32,
        field: u8,
        mode: DecMode,
    ) -> Result<(), LcdError> {
        self.write_bytes(layer, row, col, &format::dec_word(value, field, mode))
            .await
    }

    /// Write `HH:MM:SS`
    ///
    /// Does nothing unless eight columns are free from `col` on.
    pub async fn write_time(
        &self,
        layer: usize,
        row: u8,
        col: u8,
        hrs: u8,
        mins: u8,
        secs: u8,
    ) -> Result<(), LcdError> {
        let (r, c) = text_origin(row, col)?;
        check_layer::<N>(layer)?;
        if c + TIME_WIDTH > COLS {
            return Ok(());
        }
        self.modify(layer, |l| {
            l.grid.put(r, c, &format::time(hrs, mins, secs));
        })
        .await
    }

    /// Make a whole layer transparent
    pub async fn clear(&self, layer: usize) -> Result<(), LcdError> {
        self.modify(layer, |l| l.grid.clear()).await
    }

    /// Make one row of a layer transparent
    pub async fn clear_line(&self, layer: usize, row: u8) -> Result<(), LcdError> {
        let (r, _) = text_origin(row, 1)?;
        self.modify(layer, |l| l.grid.clear_row(r)).await
    }

    /// Set the cursor this layer asks for
    pub async fn set_cursor(
        &self,
        layer: usize,
        row: u8,
        col: u8,
        on: bool,
        blink: bool,
    ) -> Result<(), LcdError> {
        let cursor = Cursor {
            row,
            col,
            visible: on,
            blinking: blink,
        };
        check_layer::<N>(layer)?;
        if !(1..=ROWS as u8).contains(&row) {
            return Err(LcdError::OutOfRange(Coordinate::Row));
        }
        if !cursor.in_bounds() {
            return Err(LcdError::OutOfRange(Coordinate::Column));
        }
        self.modify(layer, |l| l.cursor = cursor).await
    }

    /// Hide or show a layer
    pub async fn set_hidden(&self, layer: usize, hidden: bool) -> Result<(), LcdError> {
        self.modify(layer, |l| l.hidden = hidden).await
    }

    /// Hide a layer
    pub async fn hide(&self, layer: usize) -> Result<(), LcdError> {
        self.set_hidden(layer, true).await
    }

    /// Show a layer
    pub async fn show(&self, layer: usize) -> Result<(), LcdError> {
        self.set_hidden(layer, false).await
    }

    /// Flip a layer's hidden flag, returning the new value
    pub async fn toggle_hidden(&self, layer: usize) -> Result<bool, LcdError> {
        self.modify(layer, |l| {
            l.hidden = !l.hidden;
            l.hidden
        })
        .await
    }

    /// Copy of one layer
    pub async fn layer(&self, layer: usize) -> Result<Layer, LcdError> {
        check_layer::<N>(layer)?;
        let layers = self.layers.lock().await;
        Ok(layers[layer])
    }

    /// Flatten all layers under the lock
    ///
    /// The frame reflects one consistent instant of every layer.
    pub async fn composite(&self, policy: CursorPolicy) -> Frame {
        let layers = self.layers.lock().await;
        flatten(&layers[..], policy)
    }

    /// Wait until some layer changed since the last wait returned
    pub async fn wait_changed(&self) {
        self.changed.wait().await;
    }

    /// Check whether a change is waiting to be composited
    pub fn has_pending_change(&self) -> bool {
        self.changed.signaled()
    }

    async fn modify<R>(&self, layer: usize, f: impl FnOnce(&mut Layer) -> R) -> Result<R, LcdError> {
        check_layer::<N>(layer)?;
        let result = {
            let mut layers = self.layers.lock().await;
            f(&mut layers[layer])
        };
        self.changed.signal(());
        Ok(result)
    }
}

impl<M: RawMutex, const N: usize> Default for LayerStore<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_layer<const N: usize>(layer: usize) -> Result<(), LcdError> {
    if layer < N {
        Ok(())
    } else {
        Err(LcdError::OutOfRange(Coordinate::Layer))
    }
}

/// 0-based origin of a text write; columns past the end are left for the
/// grid to clip
fn text_origin(row: u8, col: u8) -> Result<(usize, usize), LcdError> {
    if !(1..=ROWS as u8).contains(&row) {
        return Err(LcdError::OutOfRange(Coordinate::Row));
    }
    if col == 0 {
        return Err(LcdError::OutOfRange(Coordinate::Column));
    }
    Ok((usize::from(row - 1), usize::from(col - 1)))
}
