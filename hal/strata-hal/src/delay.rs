//! Blocking delay abstraction
//!
//! Bus protocols such as the HD44780 parallel interface specify *minimum*
//! hold and settle times. Implementations of [`BusDelay`] must be backed by a
//! hardware timer and must never return before the requested duration has
//! elapsed. Returning later is always allowed.

/// Blocking delay with a minimum-duration contract
pub trait BusDelay {
    /// Block for at least `ns` nanoseconds
    fn delay_ns(&mut self, ns: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32) {
        for _ in 0..us {
            self.delay_ns(1_000);
        }
    }

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<D: BusDelay + ?Sized> BusDelay for &mut D {
    fn delay_ns(&mut self, ns: u32) {
        (**self).delay_ns(ns);
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
