//! The compositor loop
//!
//! One consumer per display: wait for the store's change signal, flatten all
//! layers under the lock, then push the difference to the hardware with the
//! lock released so producers never wait on the bus.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::compositor::Frame;
use crate::config::{CursorPolicy, LcdConfig};
use crate::diff::{DiffWriter, WriteStats};
use crate::store::LayerStore;
use crate::transport::DisplayTransport;

/// Where the compositor is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskState {
    /// Waiting for a layer to change
    Idle,
    /// Holding the store lock, flattening layers
    Compositing,
    /// Sending the diff to the display
    Writing,
}

/// Single consumer that keeps a display in step with a [`LayerStore`]
pub struct CompositorTask<'a, M: RawMutex, T, const N: usize> {
    store: &'a LayerStore<M, N>,
    writer: DiffWriter<T>,
    policy: CursorPolicy,
    state: TaskState,
}

impl<'a, M: RawMutex, T: DisplayTransport, const N: usize> CompositorTask<'a, M, T, N> {
    /// Create a compositor for an initialized, cleared display
    pub fn new(store: &'a LayerStore<M, N>, transport: T, config: LcdConfig) -> Self {
        Self {
            store,
            writer: DiffWriter::new(transport, config),
            policy: config.cursor_policy,
            state: TaskState::Idle,
        }
    }

    /// Current phase
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Diff writer and its transport
    pub fn writer(&self) -> &DiffWriter<T> {
        &self.writer
    }

    /// Mutable access, e.g. to invalidate after re-initialising the display
    pub fn writer_mut(&mut self) -> &mut DiffWriter<T> {
        &mut self.writer
    }

    /// Wait for a change, then composite and write once
    ///
    /// Changes made while the previous cycle was writing are already
    /// pending, so this returns after a single pass covering all of them.
    pub async fn cycle(&mut self) -> Result<WriteStats, T::Error> {
        self.state = TaskState::Idle;
        self.store.wait_changed().await;
        self.refresh().await
    }

    /// Composite and write now, without waiting for a change
    pub async fn refresh(&mut self) -> Result<WriteStats, T::Error> {
        self.state = TaskState::Compositing;
        let frame: Frame = self.store.composite(self.policy).await;

        self.state = TaskState::Writing;
        let result = self.writer.write(&frame);
        self.state = TaskState::Idle;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    use crate::testing::{Op, RecordingTransport};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type Store = LayerStore<NoopRawMutex, 3>;

    /// Transport that makes one producer write from inside the first data
    /// write, i.e. while the compositor is in `Writing`
    struct ProducerDuringWrite<'a> {
        store: &'a Store,
        inner: RecordingTransport,
        done: bool,
    }

    impl DisplayTransport for ProducerDuringWrite<'_> {
        type Error = Infallible;

        fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.inner.write_command(command)
        }

        fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
            if !self.done {
                self.done = true;
                // Never completes if the store lock is still held
                block_on(self.store.write_char(1, 2, 16, b'!')).unwrap();
            }
            self.inner.write_data(byte)
        }
    }

    #[test]
    fn test_cycle_writes_changed_cells() {
        let store = Store::new();
        let mut task = CompositorTask::new(&store, RecordingTransport::new(), LcdConfig::new());

        let stats = block_on(async {
            store.write_str(0, 1, 1, "Hi").await.unwrap();
            task.cycle().await.unwrap()
        });

        assert_eq!(stats.data_writes, 2);
        assert_eq!(stats.address_sets, 1);
        assert_eq!(task.state(), TaskState::Idle);
        let ops = &task.writer().transport().ops;
        assert_eq!(&ops[..3], &[Op::Command(0x80), Op::Data(b'H'), Op::Data(b'i')]);
    }

    #[test]
    fn test_pending_changes_coalesce_into_one_pass() {
        let store = Store::new();
        let mut task = CompositorTask::new(&store, RecordingTransport::new(), LcdConfig::new());

        block_on(async {
            store.write_str(0, 1, 1, "one").await.unwrap();
            store.write_str(1, 2, 1, "two").await.unwrap();
            store.set_cursor(2, 2, 5, true, true).await.unwrap();

            let stats = task.cycle().await.unwrap();
            assert_eq!(stats.data_writes, 6);
            assert!(!store.has_pending_change());
        });

        let frame = block_on(store.composite(CursorPolicy::default()));
        assert_eq!(task.writer().previous(), &frame.grid);
    }

    #[test]
    fn test_rewriting_same_content_sends_nothing() {
        let store = Store::new();
        let mut task = CompositorTask::new(&store, RecordingTransport::new(), LcdConfig::new());

        block_on(async {
            store.write_time(0, 1, 1, 12, 0, 0).await.unwrap();
            task.cycle().await.unwrap();

            store.write_time(0, 1, 1, 12, 0, 0).await.unwrap();
            let stats = task.cycle().await.unwrap();
            assert!(stats.is_empty());
        });
    }

    #[test]
    fn test_one_changed_digit() {
        let store = Store::new();
        let mut task = CompositorTask::new(&store, RecordingTransport::new(), LcdConfig::new());

        block_on(async {
            store.write_time(0, 1, 1, 12, 0, 0).await.unwrap();
            task.cycle().await.unwrap();
            task.writer_mut().transport_mut().take();

            store.write_time(0, 1, 1, 12, 0, 1).await.unwrap();
            let stats = task.cycle().await.unwrap();
            assert_eq!(stats.data_writes, 1);
            assert_eq!(stats.address_sets, 1);
        });

        let ops = &task.writer().transport().ops;
        assert_eq!(&ops[..2], &[Op::Command(0x87), Op::Data(b'1')]);
    }

    #[test]
    fn test_hiding_top_layer_reveals_lower() {
        let store = Store::new();
        let mut task = CompositorTask::new(&store, RecordingTransport::new(), LcdConfig::new());

        block_on(async {
            store.write_str(0, 1, 1, "low").await.unwrap();
            store.write_str(2, 1, 1, "TOP").await.unwrap();
            task.cycle().await.unwrap();
            assert_eq!(&task.writer().previous().row(0).unwrap()[..3], b"TOP");

            store.hide(2).await.unwrap();
            task.cycle().await.unwrap();
            assert_eq!(&task.writer().previous().row(0).unwrap()[..3], b"low");
        });
    }

    #[test]
    fn test_change_during_write_is_not_lost() {
        let store = Store::new();
        let transport = ProducerDuringWrite {
            store: &store,
            inner: RecordingTransport::new(),
            done: false,
        };
        let mut task = CompositorTask::new(&store, transport, LcdConfig::new());

        block_on(async {
            store.write_char(0, 1, 1, b'a').await.unwrap();

            let stats = task.cycle().await.unwrap();
            assert_eq!(stats.data_writes, 1);
            assert!(store.has_pending_change());

            // The latched wake lets the next cycle pick up the new cell
            let stats = task.cycle().await.unwrap();
            assert_eq!(stats.data_writes, 1);
            assert!(!store.has_pending_change());
        });

        assert_eq!(task.writer().previous().get(1, 15), Some(b'!'));
        assert_eq!(task.writer().previous().get(0, 0), Some(b'a'));
    }

    #[test]
    fn test_refresh_does_not_consume_wake() {
        let store = Store::new();
        let mut task = CompositorTask::new(&store, RecordingTransport::new(), LcdConfig::new());

        block_on(async {
            store.write_char(0, 1, 1, b'x').await.unwrap();
            let stats = task.refresh().await.unwrap();
            assert_eq!(stats.data_writes, 1);
            assert!(store.has_pending_change());

            // The pending wake finds nothing new to send
            let stats = task.cycle().await.unwrap();
            assert_eq!(stats.data_writes, 0);
        });
    }
}
