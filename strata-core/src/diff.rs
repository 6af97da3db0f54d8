//! Minimal-diff display writer
//!
//! Keeps a private snapshot of what the controller currently shows and, for
//! each new frame, sends only the cells that changed. Runs of unchanged
//! cells are skipped by re-addressing the controller before the next changed
//! cell instead of rewriting identical bytes.

use crate::command;
use crate::compositor::Frame;
use crate::config::LcdConfig;
use crate::grid::CellGrid;
use crate::transport::DisplayTransport;

/// Hardware traffic caused by one [`DiffWriter::write`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WriteStats {
    /// Characters written
    pub data_writes: u16,
    /// DDRAM address commands issued before changed cells
    pub address_sets: u16,
    /// Cursor position and cursor mode commands
    pub cursor_commands: u8,
}

impl WriteStats {
    /// No hardware access happened
    pub fn is_empty(&self) -> bool {
        self.data_writes == 0 && self.address_sets == 0 && self.cursor_commands == 0
    }
}

/// Writes frames to a transport, emitting only differences
///
/// The snapshot starts out all transparent, which is what the controller
/// holds right after its clear-display instruction.
pub struct DiffWriter<T> {
    transport: T,
    config: LcdConfig,
    previous: CellGrid,
    /// Snapshot matches the hardware
    synced: bool,
    /// Cursor position last sent, `None` once the address counter moved
    cursor_position: Option<(u8, u8)>,
    /// Cursor (visible, blinking) last sent
    cursor_mode: Option<(bool, bool)>,
}

impl<T: DisplayTransport> DiffWriter<T> {
    /// Create a writer for a freshly cleared display
    pub fn new(transport: T, config: LcdConfig) -> Self {
        Self {
            transport,
            config,
            previous: CellGrid::cleared(),
            synced: true,
            cursor_position: None,
            cursor_mode: None,
        }
    }

    /// Send the differences between `frame` and the hardware
    ///
    /// On a transport error the snapshot keeps every cell written so far,
    /// so the next call resumes where this one stopped.
    pub fn write(&mut self, frame: &Frame) -> Result<WriteStats, T::Error> {
        let mut stats = WriteStats::default();

        for (row, cells) in frame.grid.rows().enumerate() {
            // The address counter is wherever the last write left it
            let mut reposition = true;

            for (col, &byte) in cells.iter().enumerate() {
                if self.synced && self.previous.get(row, col) == Some(byte) {
                    reposition = true;
                    continue;
                }

                if reposition {
                    let address = self.config.address(row, col);
                    self.transport
                        .write_command(command::set_ddram_address(address))?;
                    stats.address_sets += 1;
                    reposition = false;
                }

                self.cursor_position = None;
                self.transport.write_data(byte)?;
                self.previous.set(row, col, byte);
                stats.data_writes += 1;
            }
        }
        self.synced = true;

        let cursor = frame.cursor;
        let position = (cursor.row, cursor.col);
        if self.cursor_position != Some(position) {
            let (row, col) = cursor.index();
            let address = self.config.address(row, col);
            self.transport
                .write_command(command::set_ddram_address(address))?;
            self.cursor_position = Some(position);
            stats.cursor_commands += 1;
        }

        let mode = (cursor.visible, cursor.blinking);
        if self.cursor_mode != Some(mode) {
            self.transport
                .write_command(command::display_control(true, mode.0, mode.1))?;
            self.cursor_mode = Some(mode);
            stats.cursor_commands += 1;
        }

        Ok(stats)
    }

    /// Forget the snapshot; the next write re-sends every cell and the cursor
    pub fn invalidate(&mut self) {
        self.synced = false;
        self.cursor_position = None;
        self.cursor_mode = None;
    }

    /// What the writer believes the controller shows
    pub fn previous(&self) -> &CellGrid {
        &self.previous
    }

    /// Access the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport
    pub fn into_transport(self) -> T {
        self.transport
    }
}
