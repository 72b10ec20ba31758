//! Byte-wide LED output bus.

use embedded_hal::digital::{OutputPin, PinState};

use tally::press_counter::LED_COUNT;

/// Eight digital output lines driven as one byte-wide bus.
///
/// The bus drives raw electrical levels: bit N of the pattern sets line N
/// high or low, nothing more. The mixed active-high/active-low polarity
/// of the wiring is handled upstream by
/// [`encode`](tally::press_counter::encode), so callers always pass the
/// already-encoded pattern.
///
/// Every line is an *owned* pin, so writes cannot disturb anything else
/// on the same port.
pub struct LedBus<P> {
    pins: [P; LED_COUNT],
}

impl<P> LedBus<P>
where
    P: OutputPin,
{
    /// Take ownership of the eight output lines.
    ///
    /// # Arguments
    /// * `pins` — Output lines ordered LSB-first: `pins[0]` carries bit 0
    ///   of the pattern, `pins[7]` bit 7.
    pub fn new(pins: [P; LED_COUNT]) -> Self {
        Self { pins }
    }

    /// Drive the eight lines to the bits of `pattern`.
    ///
    /// Lines are updated in a single pass, one write per line, so no
    /// intermediate pattern is held longer than one write cycle.
    ///
    /// # Errors
    /// Returns the first pin error encountered; lines already written in
    /// this pass keep their new level.
    pub fn write(&mut self, pattern: u8) -> Result<(), P::Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(PinState::from(pattern & (1 << bit) != 0))?;
        }
        Ok(())
    }
}
