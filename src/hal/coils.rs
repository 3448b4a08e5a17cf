//! Coil driver built from four GPIO outputs.

use embedded_hal::digital::OutputPin;

use crate::config::units::CoilPattern;
use crate::error::{IoError, Result};

use super::CoilOutput;

/// Four output pins driving the coil driver inputs.
///
/// Reference wiring: PD3 = A, PD2 = A', PD1 = B, PD0 = B'.
pub struct CoilPins<A, AN, B, BN>
where
    A: OutputPin,
    AN: OutputPin,
    B: OutputPin,
    BN: OutputPin,
{
    a: A,
    a_not: AN,
    b: B,
    b_not: BN,
}

impl<A, AN, B, BN> CoilPins<A, AN, B, BN>
where
    A: OutputPin,
    AN: OutputPin,
    B: OutputPin,
    BN: OutputPin,
{
    /// Wrap the four coil pins.
    pub fn new(a: A, a_not: AN, b: B, b_not: BN) -> Self {
        Self { a, a_not, b, b_not }
    }

    /// Give the pins back.
    pub fn release(self) -> (A, AN, B, BN) {
        (self.a, self.a_not, self.b, self.b_not)
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    if high {
        pin.set_high().map_err(|_| IoError::OutputPin)?;
    } else {
        pin.set_low().map_err(|_| IoError::OutputPin)?;
    }
    Ok(())
}

impl<A, AN, B, BN> CoilOutput for CoilPins<A, AN, B, BN>
where
    A: OutputPin,
    AN: OutputPin,
    B: OutputPin,
    BN: OutputPin,
{
    fn write_output(&mut self, pattern: CoilPattern) -> Result<()> {
        drive(&mut self.a, pattern.line(3))?;
        drive(&mut self.a_not, pattern.line(2))?;
        drive(&mut self.b, pattern.line(1))?;
        drive(&mut self.b_not, pattern.line(0))
    }
}
