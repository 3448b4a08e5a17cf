//! Builder pattern for Controller.

use embedded_hal::delay::DelayNs;

use crate::config::units::TickPeriod;
use crate::config::FsmConfig;
use crate::error::{ConfigError, Error, Result};
use crate::hal::{CoilOutput, DirectionInput};

use super::controller::Controller;
use super::table::StateTable;

/// Builder for creating Controller instances.
///
/// Without a table or configuration the reference table and a 10 ms tick are used.
pub struct ControllerBuilder<OUT, IN, DELAY>
where
    OUT: CoilOutput,
    IN: DirectionInput,
    DELAY: DelayNs,
{
    coils: Option<OUT>,
    input: Option<IN>,
    delay: Option<DELAY>,
    table: Option<StateTable>,
    tick: TickPeriod,
}

impl<OUT, IN, DELAY> Default for ControllerBuilder<OUT, IN, DELAY>
where
    OUT: CoilOutput,
    IN: DirectionInput,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<OUT, IN, DELAY> ControllerBuilder<OUT, IN, DELAY>
where
    OUT: CoilOutput,
    IN: DirectionInput,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            coils: None,
            input: None,
            delay: None,
            table: None,
            tick: TickPeriod::REFERENCE,
        }
    }

    /// Set the coil sink.
    pub fn coils(mut self, coils: OUT) -> Self {
        self.coils = Some(coils);
        self
    }

    /// Set the direction source.
    pub fn input(mut self, input: IN) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Use a specific state table.
    pub fn table(mut self, table: StateTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the tick period in milliseconds.
    pub fn tick_ms(mut self, ms: u32) -> Self {
        self.tick = TickPeriod::from_ms(ms);
        self
    }

    /// Configure table and tick from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(mut self, config: &FsmConfig) -> Result<Self> {
        self.table = Some(config.to_table()?);
        self.tick = config.tick;
        Ok(self)
    }

    /// Build the Controller.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator is missing or the tick period is zero.
    pub fn build(self) -> Result<Controller<OUT, IN, DELAY>> {
        let coils = self
            .coils
            .ok_or(Error::Config(ConfigError::MissingPart("coils")))?;
        let input = self
            .input
            .ok_or(Error::Config(ConfigError::MissingPart("input")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingPart("delay")))?;

        if self.tick.as_ms() == 0 {
            return Err(Error::Config(ConfigError::InvalidTickPeriod(0)));
        }

        let table = self.table.unwrap_or_else(StateTable::reference);

        Ok(Controller::new(table, coils, input, delay, self.tick))
    }
}
