//! The tally board: pins plus the blocking poll/act loop.
//!
//! [`CounterBoard`] owns the button and LED drivers and drives the pure
//! [`PressMachine`] with live samples. Timing is injected as an
//! [`DelayNs`] implementation so the loop runs unchanged on any target
//! (and against a recording delay in the tests below).

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use tally::press_counter::{Phase, PressMachine, Step, INITIAL_PATTERN, LED_COUNT};

use crate::button::PushButton;
use crate::error::BoardError;
use crate::led_bus::LedBus;

// ── Configuration ────────────────────────────────────────────────────

/// Timing of the poll loop.
///
/// Defaults: a one-second post-release settle wait and a 1 ms poll
/// cadence, far below human press speed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopConfig {
    /// Pause between button samples, in milliseconds.
    pub poll_interval_ms: u32,

    /// Wait after each release before re-arming, in milliseconds. Must
    /// elapse fully — there is no early exit.
    pub settle_delay_ms: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1,
            settle_delay_ms: 1000,
        }
    }
}

// ── Board ────────────────────────────────────────────────────────────

/// One push button, eight LED lines, and the press-counter loop.
///
/// # Example
///
/// ```ignore
/// use counter_board_driver::{CounterBoard, LoopConfig};
///
/// let board = CounterBoard::new(button_pin, led_pins);
/// // Runs forever unless a pin fault surfaces.
/// board.run(delay, LoopConfig::default())?;
/// ```
pub struct CounterBoard<B, L> {
    button: PushButton<B>,
    leds: LedBus<L>,
    machine: PressMachine,
}

impl<B, L> CounterBoard<B, L>
where
    B: InputPin,
    L: OutputPin,
{
    /// Assemble the board from raw pins.
    ///
    /// # Arguments
    /// * `button` — Input line of the push button (active-low, pulled up).
    /// * `leds` — The eight output lines, LSB-first.
    pub fn new(button: B, leds: [L; LED_COUNT]) -> Self {
        Self {
            button: PushButton::new(button),
            leds: LedBus::new(leds),
            machine: PressMachine::new(),
        }
    }

    /// Current count value.
    pub fn count(&self) -> u8 {
        self.machine.count()
    }

    /// Current machine phase.
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Drive the fixed startup pattern onto the bus.
    ///
    /// Call once before polling. The pattern equals `encode(0)`, so the
    /// display agrees with the count from the start.
    pub fn preset(&mut self) -> Result<(), BoardError<B::Error, L::Error>> {
        self.leds.write(INITIAL_PATTERN).map_err(BoardError::Output)
    }

    /// One loop iteration: sample, step the machine, perform its side
    /// effect, then pause for the poll interval.
    ///
    /// On [`Step::Settle`] the full settle delay runs *inside* this call,
    /// so the next sample cannot happen before it has elapsed.
    pub fn poll_once<D>(
        &mut self,
        delay: &mut D,
        config: &LoopConfig,
    ) -> Result<Step, BoardError<B::Error, L::Error>>
    where
        D: DelayNs,
    {
        let pressed = self.button.is_pressed().map_err(BoardError::Input)?;

        let step = self.machine.poll(pressed);
        match step {
            Step::Display(pattern) => {
                self.leds.write(pattern).map_err(BoardError::Output)?;
            }
            Step::Settle => delay.delay_ms(config.settle_delay_ms),
            Step::Quiet => {}
        }

        delay.delay_ms(config.poll_interval_ms);
        Ok(step)
    }

    /// Run the counter loop forever.
    ///
    /// Presets the display, then polls until a pin fault surfaces. There
    /// is no terminal state — the `Ok` arm is uninhabited.
    pub fn run<D>(
        mut self,
        mut delay: D,
        config: LoopConfig,
    ) -> Result<Infallible, BoardError<B::Error, L::Error>>
    where
        D: DelayNs,
    {
        self.preset()?;
        loop {
            self.poll_once(&mut delay, &config)?;
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
