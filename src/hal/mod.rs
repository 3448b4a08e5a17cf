//! Hardware collaborators of the controller.
//!
//! The controller only talks to the motor through [`CoilOutput`] and to the
//! direction switches through [`DirectionInput`]. Timing goes through
//! `embedded_hal::delay::DelayNs`.

mod coils;
mod switches;

pub use coils::CoilPins;
pub use switches::SwitchPair;

use crate::config::units::CoilPattern;
use crate::error::Result;
use crate::fsm::Input;

/// Sink for the per-phase coil pattern.
pub trait CoilOutput {
    /// Drive all coil lines to `pattern`.
    fn write_output(&mut self, pattern: CoilPattern) -> Result<()>;
}

/// Source of the 2-bit direction command.
pub trait DirectionInput {
    /// Sample the switches once.
    fn read_input(&mut self) -> Result<Input>;
}

impl<F> CoilOutput for F
where
    F: FnMut(CoilPattern),
{
    fn write_output(&mut self, pattern: CoilPattern) -> Result<()> {
        self(pattern);
        Ok(())
    }
}

impl<F> DirectionInput for F
where
    F: FnMut() -> Input,
{
    fn read_input(&mut self) -> Result<Input> {
        Ok(self())
    }
}
