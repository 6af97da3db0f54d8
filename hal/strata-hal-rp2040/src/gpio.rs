//! GPIO outputs for the display bus

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use strata_hal::gpio::OutputPin;

/// Push-pull output driving one bus line
pub struct BusPin<'d> {
    output: Output<'d>,
}

impl<'d> BusPin<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for BusPin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
