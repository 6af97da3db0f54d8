//! Banner task
//!
//! Blinks a label on the top layer by toggling the layer's visibility; the
//! text itself is written once.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::layers::{BANNER_LAYER, LCD};

/// Time the banner spends in each state
const BLINK_INTERVAL_MS: u64 = 700;

#[embassy_executor::task]
pub async fn banner_task() {
    info!("Banner task started");

    if let Err(e) = LCD.write_str(BANNER_LAYER, 1, 11, "STRATA").await {
        warn!("Banner write failed: {:?}", e);
        return;
    }

    let mut ticker = Ticker::every(Duration::from_millis(BLINK_INTERVAL_MS));
    loop {
        ticker.next().await;
        match LCD.toggle_hidden(BANNER_LAYER).await {
            Ok(hidden) => trace!("Banner hidden: {}", hidden),
            Err(e) => warn!("Banner toggle failed: {:?}", e),
        }
    }
}
