//! tally-firmware
//!
//! Button-driven LED tally counter for the Raspberry Pi Pico 2. Wires
//! the two library crates into the live device:
//!
//! 1. A momentary push button pulls its line low.
//! 2. `CounterBoard` samples the line, and the press machine advances
//!    the 8-bit count on the press edge.
//! 3. The encoded count is driven onto eight LED lines, lower nibble
//!    active-high and upper nibble active-low.
//! 4. After release, a one-second settle delay re-arms the button.
//!
//! # Wiring
//!
//! | Signal   | Pico 2 Pin | Notes                                  |
//! |----------|------------|----------------------------------------|
//! | BTN      | GP3        | Momentary switch to GND, pull-up on    |
//! | LED b0–3 | GP8–GP11   | Active-high (LED + resistor to GND)    |
//! | LED b4–7 | GP12–GP15  | Active-low (LED + resistor to 3V3)     |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use counter_board_driver::{CounterBoard, LoopConfig};
use tally::press_counter::Step;

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("tally-firmware starting");

    // —— Pin assignments ————————————————————————————————————————————————
    // BTN     → GP3          active-low, pull-up enabled
    // LED bus → GP8..GP15    LSB first (GP8 carries bit 0)
    // ———————————————————————————————————————————————————————————————————

    let button = Input::new(p.PIN_3, Pull::Up);

    // Initial levels match the startup pattern 0xF0 (upper nibble high),
    // so the bus never shows a stray pattern between init and preset().
    let leds = [
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_13, Level::High),
        Output::new(p.PIN_14, Level::High),
        Output::new(p.PIN_15, Level::High),
    ];

    let mut board = CounterBoard::new(button, leds);
    let config = LoopConfig::default();
    let mut delay = Delay;

    // GPIO on this target is infallible; unwrap cannot fire.
    board.preset().unwrap();
    info!("board ready — press to count");

    // Single sequential control loop: sample, act, pause. The settle
    // delay after each release runs to completion inside poll_once().
    loop {
        match board.poll_once(&mut delay, &config) {
            Ok(Step::Display(pattern)) => {
                info!("press #{}: pattern {:08b}", board.count(), pattern);
            }
            Ok(Step::Settle) => debug!("release settled, re-armed"),
            Ok(Step::Quiet) => {}
            Err(e) => error!("GPIO fault: {}", e),
        }
    }
}
