//! Display transport boundary
//!
//! The writer only needs two primitives from the bus: send an instruction
//! and store a character at the controller's current address. Timing and
//! signalling are the transport's business.

/// Byte-level access to a character display controller
pub trait DisplayTransport {
    /// Error type for bus operations
    type Error;

    /// Send an instruction byte (see [`command`](crate::command))
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Store a character at the current address; the address advances
    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    type Error = T::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        (**self).write_command(command)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_data(byte)
    }
}
