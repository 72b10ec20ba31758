//! Active-low push button sampling.

use embedded_hal::digital::InputPin;

/// Momentary push button on a single digital input line.
///
/// Assumes active-low wiring: the line is pulled high at rest and the
/// switch shorts it to ground when pressed. There is no press-side
/// debounce filtering — a single low sample registers a press; the board
/// loop's hold-until-release gate and post-release settle delay handle
/// contact bounce.
pub struct PushButton<P> {
    pin: P,
}

impl<P> PushButton<P>
where
    P: InputPin,
{
    /// Wrap an input line.
    ///
    /// # Arguments
    /// * `pin` — Input line, already configured with a pull-up (internal
    ///   or external).
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Sample the line once. `Ok(true)` when it reads electrically low.
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }
}
