//! Hardware driver implementations
//!
//! Concrete [`DisplayTransport`](strata_core::DisplayTransport)
//! implementations written against the `strata-hal` traits:
//!
//! - HD44780 character LCD, 4-bit parallel bus

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod hd44780;

pub use hd44780::{Hd44780, Hd44780Timing};
