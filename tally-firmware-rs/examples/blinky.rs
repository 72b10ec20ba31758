//! One-second blink on a single output line (GP16).
//!
//! Pure timing, no logic — the counter lives in `src/main.rs`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("blinky starting");

    let mut pin = Output::new(p.PIN_16, Level::Low);

    loop {
        pin.set_high();
        Timer::after_secs(1).await;
        pin.set_low();
        Timer::after_secs(1).await;
    }
}
