//! Stepper controller loop.
//!
//! Generic over the coil sink, the direction source and an embedded-hal 1.0 delay.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::config::units::{CoilPattern, TickPeriod};
use crate::error::Result;
use crate::hal::{CoilOutput, DirectionInput};

use super::builder::ControllerBuilder;
use super::cancel::CancelToken;
use super::phase::Phase;
use super::table::StateTable;

/// Table-driven stepper controller.
///
/// Each iteration writes the current phase's pattern, holds it for the
/// phase's delay, samples the input and moves to `next[input]`.
///
/// Generic over:
/// - `OUT`: coil sink (must implement [`CoilOutput`])
/// - `IN`: direction source (must implement [`DirectionInput`])
/// - `DELAY`: delay provider (must implement `DelayNs`)
pub struct Controller<OUT, IN, DELAY>
where
    OUT: CoilOutput,
    IN: DirectionInput,
    DELAY: DelayNs,
{
    /// Transition graph, fixed for the controller's lifetime.
    table: StateTable,

    /// Phase whose pattern is written on the next iteration.
    current: Phase,

    coils: OUT,
    input: IN,
    delay: DELAY,

    /// Length of one table tick.
    tick: TickPeriod,

    /// Completed iterations since the last reset (wrapping).
    steps: u32,
}

impl<OUT, IN, DELAY> Controller<OUT, IN, DELAY>
where
    OUT: CoilOutput,
    IN: DirectionInput,
    DELAY: DelayNs,
{
    /// Create a controller positioned at the table's initial phase.
    pub fn new(table: StateTable, coils: OUT, input: IN, delay: DELAY, tick: TickPeriod) -> Self {
        let current = table.initial();
        #[cfg(feature = "defmt")]
        defmt::debug!("stepper fsm start in {}, tick {} ms", current, tick.as_ms());
        Self {
            table,
            current,
            coils,
            input,
            delay,
            tick,
            steps: 0,
        }
    }

    /// Start building a controller.
    pub fn builder() -> ControllerBuilder<OUT, IN, DELAY> {
        ControllerBuilder::new()
    }

    /// Current phase.
    #[inline]
    pub fn current(&self) -> Phase {
        self.current
    }

    /// Pattern the next iteration will write.
    #[inline]
    pub fn current_output(&self) -> CoilPattern {
        self.table.output(self.current)
    }

    /// The state table.
    #[inline]
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Length of one tick.
    #[inline]
    pub fn tick(&self) -> TickPeriod {
        self.tick
    }

    /// Iterations completed since creation or the last reset.
    #[inline]
    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// Return to the initial phase.
    pub fn reset(&mut self) {
        self.current = self.table.initial();
        self.steps = 0;
        #[cfg(feature = "defmt")]
        defmt::debug!("stepper fsm reset to {}", self.current);
    }

    /// Run one control cycle: output, wait, read input, transition.
    ///
    /// Returns the phase entered.
    ///
    /// # Errors
    ///
    /// Returns an error if the coil sink or the direction source fails. The
    /// current phase is left unchanged in that case.
    pub fn step(&mut self) -> Result<Phase> {
        let state = *self.table.state(self.current);

        self.coils.write_output(state.output)?;
        self.delay.delay_ms(state.delay.to_ms(self.tick));
        let input = self.input.read_input()?;

        let next = state.next(input);
        #[cfg(feature = "defmt")]
        defmt::trace!("{} --{}--> {}", self.current, input, next);

        self.current = next;
        self.steps = self.steps.wrapping_add(1);
        Ok(next)
    }

    /// Run a fixed number of cycles and return the phase reached.
    pub fn run_steps(&mut self, count: u32) -> Result<Phase> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(self.current)
    }

    /// Run until `token` is cancelled.
    ///
    /// The token is checked before each cycle, so a cycle in progress always
    /// completes. Returns the number of cycles run by this call.
    pub fn run_until(&mut self, token: &CancelToken) -> Result<u32> {
        let mut count = 0u32;
        while !token.is_cancelled() {
            self.step()?;
            count = count.wrapping_add(1);
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("stepper fsm cancelled in {} after {} cycles", self.current, count);
        Ok(count)
    }

    /// Run forever.
    ///
    /// Only returns if a collaborator fails.
    pub fn run_forever(&mut self) -> Result<Infallible> {
        loop {
            self.step()?;
        }
    }

    /// Tear down the controller and give back its collaborators.
    pub fn release(self) -> (OUT, IN, DELAY) {
        (self.coils, self.input, self.delay)
    }
}
