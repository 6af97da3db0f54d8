//! RP2040-specific HAL for the layered LCD firmware
//!
//! Implements the shared `strata-hal` traits on top of embassy-rp:
//! - GPIO outputs for the parallel display bus
//! - Hardware-timer backed bus delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

pub use delay::TimerDelay;
pub use gpio::BusPin;

// Re-export shared traits from strata-hal for convenience
pub use strata_hal::{BusDelay, OutputPin};
