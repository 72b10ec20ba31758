//! Error types for the board driver.

use core::fmt;

/// Errors surfaced by the board poll loop.
///
/// Generic over the input-pin and output-pin error types, since
/// `embedded-hal` lets every pin implementation pick its own. On targets
/// where GPIO access is infallible both parameters are
/// `core::convert::Infallible` and the error path is dead by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError<I, O> {
    /// Reading the button line failed.
    Input(I),

    /// Driving an LED line failed.
    Output(O),
}

impl<I: fmt::Debug, O: fmt::Debug> fmt::Display for BoardError<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::Input(e) => write!(f, "button read error: {:?}", e),
            BoardError::Output(e) => write!(f, "LED write error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<I, O> defmt::Format for BoardError<I, O> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            BoardError::Input(_) => defmt::write!(f, "button read error"),
            BoardError::Output(_) => defmt::write!(f, "LED write error"),
        }
    }
}
