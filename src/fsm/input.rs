//! The 2-bit direction command sampled every control cycle.

/// Direction command read from the two input switches.
///
/// Only the four 2-bit codes exist, so a transition lookup can never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Input {
    /// `00`
    Stop = 0b00,
    /// `01`
    Clockwise = 0b01,
    /// `10`
    CounterClockwise = 0b10,
    /// `11`, decoded the same as [`Input::Stop`] by the reference table.
    StopAlt = 0b11,
}

impl Input {
    /// All inputs in index order.
    pub const ALL: [Input; 4] = [
        Input::Stop,
        Input::Clockwise,
        Input::CounterClockwise,
        Input::StopAlt,
    ];

    /// Decode the two low bits of `raw`, ignoring the rest.
    #[inline]
    pub const fn from_bits(raw: u32) -> Self {
        match raw & 0b11 {
            0b00 => Input::Stop,
            0b01 => Input::Clockwise,
            0b10 => Input::CounterClockwise,
            _ => Input::StopAlt,
        }
    }

    /// Decode two adjacent bits of a port register starting at `shift`.
    ///
    /// The reference board wires the switches to PC7:PC6, i.e. `shift = 6`.
    /// A `shift` of 32 or more reads as `00`.
    #[inline]
    pub const fn from_register(raw: u32, shift: u32) -> Self {
        match raw.checked_shr(shift) {
            Some(bits) => Self::from_bits(bits),
            None => Input::Stop,
        }
    }

    /// Build from the two switch levels (`high` is bit 1, `low` is bit 0).
    #[inline]
    pub const fn from_levels(high: bool, low: bool) -> Self {
        Self::from_bits(((high as u32) << 1) | low as u32)
    }

    /// The 2-bit code.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Column of the transition table selected by this input.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
