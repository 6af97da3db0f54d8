//! Test doubles shared by the unit tests

use core::convert::Infallible;

use crate::command;
use crate::transport::DisplayTransport;

/// One transport call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Command(u8),
    Data(u8),
}

/// Transport that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    pub ops: Vec<Op>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_writes(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Data(_))).count()
    }

    /// DDRAM address-set commands
    pub fn address_sets(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Command(c) if c & 0x80 != 0 => Some(c & 0x7F),
                _ => None,
            })
            .collect()
    }

    /// Display-control commands
    pub fn display_controls(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Command(c) if c & 0xF8 == command::display_control(false, false, false) => {
                    Some(c)
                }
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }
}

impl DisplayTransport for RecordingTransport {
    type Error = Infallible;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.ops.push(Op::Data(byte));
        Ok(())
    }
}

/// Transport whose every call fails
pub(crate) struct FailingTransport;

impl DisplayTransport for FailingTransport {
    type Error = ();

    fn write_command(&mut self, _command: u8) -> Result<(), Self::Error> {
        Err(())
    }

    fn write_data(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Err(())
    }
}
