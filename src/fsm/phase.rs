//! Phase tags of the stepper state machine.

use core::fmt;

/// One coil-energizing phase of the motor.
///
/// The four phases form one full clockwise cycle `S_CW1 -> S_CW2 -> S_CW3 -> S_CW4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// First phase, the initial state of the reference table.
    Cw1,
    /// Second phase.
    Cw2,
    /// Third phase.
    Cw3,
    /// Fourth phase.
    Cw4,
}

impl Phase {
    /// Number of phases in the table.
    pub const COUNT: usize = 4;

    /// All phases in clockwise order.
    pub const ALL: [Phase; Self::COUNT] = [Phase::Cw1, Phase::Cw2, Phase::Cw3, Phase::Cw4];

    /// Position of this phase in the table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Phase at a table position, if it exists.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Adjacent phase in the clockwise direction.
    #[inline]
    pub const fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Adjacent phase in the counterclockwise direction.
    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Name used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Cw1 => "S_CW1",
            Phase::Cw2 => "S_CW2",
            Phase::Cw3 => "S_CW3",
            Phase::Cw4 => "S_CW4",
        }
    }

    /// Look up a phase by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_wrap() {
        assert_eq!(Phase::Cw4.clockwise(), Phase::Cw1);
        assert_eq!(Phase::Cw1.counter_clockwise(), Phase::Cw4);
        for p in Phase::ALL {
            assert_eq!(p.clockwise().counter_clockwise(), p);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for p in Phase::ALL {
            assert_eq!(Phase::from_name(p.name()), Some(p));
        }
        assert_eq!(Phase::from_name("S5"), None);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Phase::from_index(2), Some(Phase::Cw3));
        assert_eq!(Phase::from_index(4), None);
    }
}
