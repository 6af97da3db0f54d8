//! GPIO pin abstractions
//!
//! Provides the output pin trait used to drive parallel bus lines
//! (register select, enable strobe, data nibble).

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Write the low `N` bits of `value` onto a group of pins, bit 0 first
pub fn write_bits<P: OutputPin, const N: usize>(pins: &mut [P; N], value: u8) {
    for (bit, pin) in pins.iter_mut().enumerate() {
        pin.set_state(value & (1 << bit) != 0);
    }
}
