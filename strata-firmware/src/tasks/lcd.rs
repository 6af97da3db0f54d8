//! LCD compositor task
//!
//! Waits for any layer to change, flattens the layers and writes the diff.
//! Bus timing is spent with the store unlocked.

use defmt::*;
use strata_core::{CompositorTask, LcdConfig};
use strata_drivers::Hd44780;
use strata_hal_rp2040::{BusPin, TimerDelay};

use crate::layers::LCD;

/// The board's display transport
pub type Lcd = Hd44780<BusPin<'static>, TimerDelay>;

/// LCD task - keeps the display in step with the layer store
#[embassy_executor::task]
pub async fn lcd_task(lcd: Lcd, config: LcdConfig) {
    info!("LCD task started");

    let mut compositor = CompositorTask::new(&LCD, lcd, config);

    // Push the blank frame and cursor mode once
    if let Ok(stats) = compositor.refresh().await {
        debug!("LCD synced: {:?}", stats);
    }

    loop {
        match compositor.cycle().await {
            Ok(stats) => {
                trace!(
                    "LCD updated: {} chars, {} moves, {} cursor",
                    stats.data_writes,
                    stats.address_sets,
                    stats.cursor_commands
                );
            }
            Err(e) => match e {},
        }
    }
}
