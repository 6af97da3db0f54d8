//! Bus delays backed by the embassy time driver
//!
//! `block_for` spins on the hardware timer, so it is safe to call with the
//! executor running. Delays are rounded up and padded by one tick: the
//! current tick may already be partly over when the wait starts.

use embassy_time::{block_for, Duration};
use strata_hal::delay::BusDelay;

/// Blocking delay on the RP2040 hardware timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl TimerDelay {
    /// Create a delay on the embassy time driver
    pub const fn new() -> Self {
        Self
    }
}

impl BusDelay for TimerDelay {
    fn delay_ns(&mut self, ns: u32) {
        block_for(Duration::from_nanos(u64::from(ns)) + Duration::from_ticks(1));
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)) + Duration::from_ticks(1));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)) + Duration::from_ticks(1));
    }
}
