//! GPIO driver and blocking poll loop for the button-driven LED tally
//! board: one active-low push button, eight LED lines with a mixed
//! active-high/active-low nibble split.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//!
//! - **[`PushButton`] / [`LedBus`]** — Thin drivers over
//!   `embedded-hal` 1.0 digital pins: sample the input line, drive the
//!   eight output lines to a byte pattern.
//! - **[`CounterBoard`]** — Owns the pins and the pure
//!   [`PressMachine`](tally::press_counter::PressMachine), and runs the
//!   blocking poll/act loop with an injected
//!   [`DelayNs`](embedded_hal::delay::DelayNs) timing service.
//! - **[`LoopConfig`]** — Poll cadence and post-release settle duration.
//!
//! All counting and encoding logic lives in the `tally` crate; this crate
//! only performs the side effects the state machine asks for.
//!
//! # Quick start
//!
//! ```ignore
//! use counter_board_driver::{CounterBoard, LoopConfig};
//!
//! // `button` is any `InputPin`, `leds` an array of eight `OutputPin`s,
//! // `delay` any `DelayNs` implementation (e.g. `embassy_time::Delay`).
//! let board = CounterBoard::new(button, leds);
//! board.run(delay, LoopConfig::default())?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   state types for embedded logging.

#![no_std]

pub use board::{CounterBoard, LoopConfig};
pub use button::PushButton;
pub use error::BoardError;
pub use led_bus::LedBus;

mod board;
mod button;
mod error;
mod led_bus;
