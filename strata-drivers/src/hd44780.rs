//! HD44780 character LCD over a 4-bit parallel bus
//!
//! Write-only wiring: RS selects the instruction or data register, E latches
//! each nibble on its falling edge and DB4..DB7 carry the nibble. R/W is tied
//! low, so the busy flag is never read and every transfer is followed by a
//! fixed settle delay instead.

use core::convert::Infallible;

use strata_core::command;
use strata_core::transport::DisplayTransport;
use strata_hal::delay::BusDelay;
use strata_hal::gpio::{write_bits, OutputPin};

/// Bus timing, all values are minimums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hd44780Timing {
    /// Wait after power-up before the first reset nibble
    pub power_on_us: u32,
    /// Waits after each of the three `0x3` reset nibbles
    pub reset_us: [u32; 3],
    /// Wait after switching to 4-bit mode
    pub interface_us: u32,
    /// Enable pulse width
    pub enable_pulse_ns: u32,
    /// Time E stays low after each strobe; with the pulse width this makes
    /// up the enable cycle and covers the data hold time
    pub enable_low_ns: u32,
    /// Settle time after an instruction or data write
    pub settle_us: u32,
    /// Execution time of clear display and return home
    pub clear_us: u32,
}

impl Default for Hd44780Timing {
    fn default() -> Self {
        Self {
            power_on_us: 15_000,
            reset_us: [4_100, 100, 40],
            interface_us: 40,
            enable_pulse_ns: 500,
            enable_low_ns: 500,
            settle_us: 41,
            clear_us: 1_650,
        }
    }
}

/// HD44780 transport
///
/// All six lines use the same pin type; `data[0]` is DB4.
pub struct Hd44780<P, D> {
    rs: P,
    e: P,
    data: [P; 4],
    delay: D,
    timing: Hd44780Timing,
}

impl<P: OutputPin, D: BusDelay> Hd44780<P, D> {
    /// Create a driver with datasheet timing
    pub fn new(rs: P, e: P, data: [P; 4], delay: D) -> Self {
        Self::with_timing(rs, e, data, delay, Hd44780Timing::default())
    }

    /// Create a driver with custom timing
    pub fn with_timing(rs: P, e: P, data: [P; 4], delay: D, timing: Hd44780Timing) -> Self {
        Self {
            rs,
            e,
            data,
            delay,
            timing,
        }
    }

    /// Bus timing in use
    pub fn timing(&self) -> &Hd44780Timing {
        &self.timing
    }

    /// Power-on reset into 4-bit, two-line mode
    ///
    /// Leaves the display on with the cursor hidden, cleared, and the
    /// address counter at 0.
    pub fn init(&mut self) {
        self.rs.set_low();
        self.e.set_low();
        self.delay.delay_us(self.timing.power_on_us);

        // The controller may be in 8-bit mode or halfway through a 4-bit
        // transfer; three 0x3 nibbles put it in a known state
        for wait in self.timing.reset_us {
            self.write_nibble(0x3);
            self.delay.delay_us(wait);
        }
        self.write_nibble(0x2);
        self.delay.delay_us(self.timing.interface_us);

        self.instruction(command::function_set(false, true, false));
        self.instruction(command::entry_mode(true, false));
        self.instruction(command::display_control(true, false, false));
        self.instruction(command::CLEAR_DISPLAY);
        self.instruction(command::set_ddram_address(0));
    }

    fn instruction(&mut self, byte: u8) {
        self.write_byte(false, byte);
        if byte == command::CLEAR_DISPLAY || byte & 0xFE == command::RETURN_HOME {
            self.delay.delay_us(self.timing.clear_us);
        }
    }

    fn write_byte(&mut self, data_register: bool, byte: u8) {
        self.rs.set_state(data_register);
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(self.timing.settle_us);
    }

    fn write_nibble(&mut self, nibble: u8) {
        write_bits(&mut self.data, nibble);
        self.e.set_high();
        self.delay.delay_ns(self.timing.enable_pulse_ns);
        self.e.set_low();
        self.delay.delay_ns(self.timing.enable_low_ns);
    }
}

impl<P: OutputPin, D: BusDelay> DisplayTransport for Hd44780<P, D> {
    type Error = Infallible;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.instruction(command);
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_byte(true, byte);
        Ok(())
    }
}
