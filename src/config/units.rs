//! Unit types for coil patterns and phase timing.
//!
//! Keeps the raw integers of the state table apart so a delay can never be
//! written to the coil lines and vice versa.

use core::ops::Mul;

use serde::Deserialize;

use crate::error::ConfigError;

/// Bit pattern driven onto the four coil lines.
///
/// Bit 3 drives coil A, bit 2 coil A', bit 1 coil B and bit 0 coil B'.
/// Validated at construction to fit in 4 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(u8);

impl CoilPattern {
    /// Mask of the coil lines.
    pub const MASK: u8 = 0x0F;

    /// All coils de-energized.
    pub const OFF: Self = Self(0);

    /// Create a new pattern with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOutputPattern` if bits above bit 3 are set.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value & !Self::MASK == 0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidOutputPattern(value))
        }
    }

    /// Create a pattern from a value already known to fit in 4 bits.
    ///
    /// Extra bits are masked off.
    #[inline]
    pub const fn from_bits_truncate(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Level of a single coil line (0 = B', 3 = A).
    #[inline]
    pub const fn line(self, bit: u8) -> bool {
        self.0 & (1 << bit) != 0
    }
}

impl TryFrom<u8> for CoilPattern {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for CoilPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        CoilPattern::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Phase hold time in table ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to milliseconds for the given tick period, saturating.
    #[inline]
    pub const fn to_ms(self, period: TickPeriod) -> u32 {
        self.0.saturating_mul(period.0)
    }
}

/// Length of one tick in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct TickPeriod(pub u32);

impl TickPeriod {
    /// 10 ms, the SysTick wait unit of the reference board.
    pub const REFERENCE: Self = Self(10);

    /// Create a new period in milliseconds.
    #[inline]
    pub const fn from_ms(ms: u32) -> Self {
        Self(ms)
    }

    /// Get the period in milliseconds.
    #[inline]
    pub const fn as_ms(self) -> u32 {
        self.0
    }
}

impl Default for TickPeriod {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl Mul<TickPeriod> for Ticks {
    type Output = u32;

    fn mul(self, rhs: TickPeriod) -> Self::Output {
        self.to_ms(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coil_pattern_valid_values() {
        for v in 0..=0x0F {
            assert!(CoilPattern::new(v).is_ok());
        }
    }

    #[test]
    fn test_coil_pattern_invalid_values() {
        assert_eq!(
            CoilPattern::new(0x10),
            Err(ConfigError::InvalidOutputPattern(0x10))
        );
        assert!(CoilPattern::new(0xFF).is_err());
    }

    #[test]
    fn test_coil_lines() {
        // 0b1010: A and B energized
        let p = CoilPattern::from_bits_truncate(10);
        assert!(p.line(3));
        assert!(!p.line(2));
        assert!(p.line(1));
        assert!(!p.line(0));
    }

    #[test]
    fn test_reference_phase_is_100ms() {
        assert_eq!(Ticks::new(10).to_ms(TickPeriod::REFERENCE), 100);
        assert_eq!(Ticks::new(u32::MAX) * TickPeriod::from_ms(2), u32::MAX);
    }
}
