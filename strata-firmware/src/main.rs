//! Strata - Layered Character LCD Firmware
//!
//! Demo firmware for an RP2040 board driving a 16x2 HD44780 display over a
//! 4-bit bus. Three producer tasks each own one layer of the shared
//! [`layers::LCD`] store; the LCD task composites them and writes only the
//! characters that changed.
//!
//! Wiring: RS=GP2, E=GP3, DB4..DB7=GP4..GP7, R/W tied to ground.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use strata_core::LcdConfig;
use strata_drivers::Hd44780;
use strata_hal_rp2040::{BusPin, TimerDelay};

mod layers;
mod tasks;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Strata LCD firmware starting...");

    let p = embassy_rp::init(Default::default());

    let mut lcd = Hd44780::new(
        BusPin::new(p.PIN_2),
        BusPin::new(p.PIN_3),
        [
            BusPin::new(p.PIN_4),
            BusPin::new(p.PIN_5),
            BusPin::new(p.PIN_6),
            BusPin::new(p.PIN_7),
        ],
        TimerDelay::new(),
    );
    lcd.init();
    info!("LCD initialized");

    spawner.spawn(tasks::lcd_task(lcd, LcdConfig::default())).unwrap();
    spawner.spawn(tasks::clock_task()).unwrap();
    spawner.spawn(tasks::counter_task()).unwrap();
    spawner.spawn(tasks::banner_task()).unwrap();

    info!("All tasks spawned");
}
