//! Counter task
//!
//! A free-running counter on the second row, in decimal on the left and hex
//! on the right. The layer's cursor blinks between the two; it shows
//! whenever the banner layer above is hidden.

use defmt::*;
use embassy_time::{Duration, Ticker};
use strata_core::DecMode;

use crate::layers::{COUNTER_LAYER, LCD};

/// Update period
const COUNT_INTERVAL_MS: u64 = 250;

#[embassy_executor::task]
pub async fn counter_task() {
    info!("Counter task started");

    if let Err(e) = LCD.set_cursor(COUNTER_LAYER, 2, 8, true, true).await {
        warn!("Counter cursor failed: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(COUNT_INTERVAL_MS));
    let mut count: u32 = 0;

    loop {
        let result = match LCD
            .write_dec_word(COUNTER_LAYER, 2, 1, count, 6, DecMode::AlignRight)
            .await
        {
            Ok(()) => LCD.write_hex_word(COUNTER_LAYER, 2, 13, count, 4).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!("Counter write failed: {:?}", e);
        }

        count = count.wrapping_add(1) % 1_000_000;
        ticker.next().await;
    }
}
