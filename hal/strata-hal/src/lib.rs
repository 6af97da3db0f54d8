//! Strata Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the character LCD
//! transport is written against. Chip-specific HALs implement them so the
//! same driver code runs on any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  strata-drivers (HD44780 transport)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strata-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  strata-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`delay::BusDelay`] - Blocking delays with a minimum-duration guarantee

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::BusDelay;
pub use gpio::OutputPin;
