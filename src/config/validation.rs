//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::fsm::{Input, Phase};

use super::table::{resolve, StateConfig};
use super::FsmConfig;

/// Validate a state table configuration.
///
/// Checks:
/// - Tick period is non-zero
/// - Initial state and every state key name a known phase
/// - Every phase is defined
/// - Each state has exactly one successor per 2-bit input, all known
/// - Each state holds for at least one tick
pub fn validate_config(config: &FsmConfig) -> Result<()> {
    if config.tick.as_ms() == 0 {
        return Err(Error::Config(ConfigError::InvalidTickPeriod(0)));
    }

    resolve(config.initial.as_str())?;

    for name in config.state_names() {
        resolve(name)?;
    }

    for phase in Phase::ALL {
        let state = config
            .state(phase)
            .ok_or(Error::Config(ConfigError::MissingState(phase.name())))?;
        validate_state(phase, state)?;
    }

    Ok(())
}

fn validate_state(phase: Phase, state: &StateConfig) -> Result<()> {
    if state.next.len() != Input::ALL.len() {
        return Err(Error::Config(ConfigError::InvalidTransitionCount {
            state: phase.name(),
            count: state.next.len(),
        }));
    }

    for target in state.next.iter() {
        resolve(target.as_str())?;
    }

    if state.delay.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidDelay(phase.name())));
    }

    Ok(())
}
