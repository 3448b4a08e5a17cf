//! Immutable state table of the stepper controller.

use crate::config::units::{CoilPattern, Ticks};

use super::input::Input;
use super::phase::Phase;

/// One row of the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateDef {
    /// Pattern written to the coils while in this phase.
    pub output: CoilPattern,
    /// How long the phase is held before the input is sampled.
    pub delay: Ticks,
    /// Successor for each 2-bit input, indexed by [`Input::index`].
    pub next: [Phase; 4],
}

impl StateDef {
    /// Create a new state definition.
    pub const fn new(output: CoilPattern, delay: Ticks, next: [Phase; 4]) -> Self {
        Self { output, delay, next }
    }

    /// Successor for an input.
    #[inline]
    pub const fn next(&self, input: Input) -> Phase {
        self.next[input.index()]
    }
}

/// Complete transition graph: one [`StateDef`] per [`Phase`] plus the initial phase.
///
/// Rows are addressed by phase tag, so every transition stays inside the table.
/// There is no way to mutate a table once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateTable {
    states: [StateDef; Phase::COUNT],
    initial: Phase,
}

/// Hold time of every reference phase (10 ticks of 10 ms).
pub const REFERENCE_DELAY: Ticks = Ticks(10);

impl StateTable {
    /// Build a table from rows in [`Phase::ALL`] order.
    pub const fn new(states: [StateDef; Phase::COUNT], initial: Phase) -> Self {
        Self { states, initial }
    }

    /// The reference wiring: outputs 5, 6, 10, 9 stepping clockwise on `01`
    /// and counterclockwise on `10`.
    ///
    /// Inputs `00` and `11` advance to the clockwise neighbour exactly like
    /// `01`. They do not hold the current phase.
    pub const fn reference() -> Self {
        use Phase::*;
        const fn row(output: u8, cw: Phase, ccw: Phase) -> StateDef {
            StateDef::new(
                CoilPattern::from_bits_truncate(output),
                REFERENCE_DELAY,
                [cw, cw, ccw, cw],
            )
        }
        Self::new(
            [
                row(5, Cw2, Cw4),
                row(6, Cw3, Cw1),
                row(10, Cw4, Cw2),
                row(9, Cw1, Cw3),
            ],
            Cw1,
        )
    }

    /// Phase the controller starts in.
    #[inline]
    pub const fn initial(&self) -> Phase {
        self.initial
    }

    /// Row of a phase.
    #[inline]
    pub const fn state(&self, phase: Phase) -> &StateDef {
        &self.states[phase.index()]
    }

    /// Transition function.
    #[inline]
    pub const fn next(&self, phase: Phase, input: Input) -> Phase {
        self.state(phase).next(input)
    }

    /// Coil pattern of a phase.
    #[inline]
    pub const fn output(&self, phase: Phase) -> CoilPattern {
        self.state(phase).output
    }

    /// Hold time of a phase.
    #[inline]
    pub const fn delay(&self, phase: Phase) -> Ticks {
        self.state(phase).delay
    }

    /// Iterate over `(phase, row)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &StateDef)> {
        Phase::ALL.into_iter().zip(self.states.iter())
    }

    /// Follow a sequence of inputs from `start`, returning the phase reached.
    pub fn walk<I>(&self, start: Phase, inputs: I) -> Phase
    where
        I: IntoIterator<Item = Input>,
    {
        inputs
            .into_iter()
            .fold(start, |phase, input| self.next(phase, input))
    }
}

impl Default for StateTable {
    fn default() -> Self {
        Self::reference()
    }
}
