//! Direction command read from two GPIO inputs.

use embedded_hal::digital::InputPin;

use crate::error::{IoError, Result};
use crate::fsm::Input;

use super::DirectionInput;

/// Two input switches forming the 2-bit direction command.
///
/// `high` supplies bit 1 and `low` bit 0 (reference wiring: PC7, PC6).
pub struct SwitchPair<HI, LO>
where
    HI: InputPin,
    LO: InputPin,
{
    high: HI,
    low: LO,
}

impl<HI, LO> SwitchPair<HI, LO>
where
    HI: InputPin,
    LO: InputPin,
{
    /// Wrap the two switch pins.
    pub fn new(high: HI, low: LO) -> Self {
        Self { high, low }
    }

    /// Give the pins back.
    pub fn release(self) -> (HI, LO) {
        (self.high, self.low)
    }
}

impl<HI, LO> DirectionInput for SwitchPair<HI, LO>
where
    HI: InputPin,
    LO: InputPin,
{
    fn read_input(&mut self) -> Result<Input> {
        let high = self.high.is_high().map_err(|_| IoError::InputPin)?;
        let low = self.low.is_high().map_err(|_| IoError::InputPin)?;
        Ok(Input::from_levels(high, low))
    }
}
