//! The shared layer store
//!
//! Higher layers draw over lower ones wherever they hold a non-space
//! character.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use strata_core::LayerStore;

/// Clock, bottom layer
pub const CLOCK_LAYER: usize = 0;

/// Counter readout
pub const COUNTER_LAYER: usize = 1;

/// Blinking banner, top layer
pub const BANNER_LAYER: usize = 2;

pub const LAYER_COUNT: usize = 3;

/// Layers shared by every display producer
pub static LCD: LayerStore<CriticalSectionRawMutex, LAYER_COUNT> = LayerStore::new();
