//! Clock task
//!
//! Time since boot as `HH:MM:SS` on the bottom layer, top-left.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::layers::{CLOCK_LAYER, LCD};

#[embassy_executor::task]
pub async fn clock_task() {
    info!("Clock task started");

    let mut ticker = Ticker::every(Duration::from_secs(1));
    let (mut hrs, mut mins, mut secs) = (0u8, 0u8, 0u8);

    loop {
        if let Err(e) = LCD.write_time(CLOCK_LAYER, 1, 1, hrs, mins, secs).await {
            warn!("Clock write failed: {:?}", e);
        }

        ticker.next().await;

        secs += 1;
        if secs == 60 {
            secs = 0;
            mins += 1;
        }
        if mins == 60 {
            mins = 0;
            hrs = (hrs + 1) % 100;
        }
    }
}
