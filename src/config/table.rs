//! State table configuration from TOML.

use heapless::{FnvIndexMap, String, Vec};
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::fsm::{Phase, StateDef, StateTable};

use super::units::{CoilPattern, TickPeriod, Ticks};

/// One `[states.<name>]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateConfig {
    /// Coil pattern for this phase (4 bits).
    pub output: CoilPattern,

    /// Hold time in ticks.
    #[serde(rename = "delay_ticks")]
    pub delay: Ticks,

    /// Successor names for inputs `00`, `01`, `10`, `11`.
    pub next: Vec<String<16>, 8>,
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FsmConfig {
    /// Name of the starting phase.
    #[serde(default = "default_initial")]
    pub initial: String<16>,

    /// Tick length in milliseconds.
    #[serde(default, rename = "tick_ms")]
    pub tick: TickPeriod,

    /// Phase definitions keyed by name (`S_CW1`..`S_CW4`).
    pub states: FnvIndexMap<String<16>, StateConfig, 8>,
}

fn default_initial() -> String<16> {
    name(Phase::Cw1)
}

fn name(phase: Phase) -> String<16> {
    String::try_from(phase.name()).unwrap_or_default()
}

/// Resolve a configured phase name.
pub(crate) fn resolve(name: &str) -> Result<Phase> {
    Phase::from_name(name).ok_or_else(|| {
        Error::Config(ConfigError::UnknownState(
            String::try_from(name).unwrap_or_default(),
        ))
    })
}

impl FsmConfig {
    /// Configuration equivalent to [`StateTable::reference`].
    pub fn reference() -> Self {
        Self::from_table(&StateTable::reference(), TickPeriod::REFERENCE)
    }

    /// Describe an existing table as configuration.
    pub fn from_table(table: &StateTable, tick: TickPeriod) -> Self {
        let mut states = FnvIndexMap::new();
        for (phase, def) in table.iter() {
            let mut next = Vec::new();
            for target in def.next {
                let _ = next.push(name(target));
            }
            let _ = states.insert(
                name(phase),
                StateConfig {
                    output: def.output,
                    delay: def.delay,
                    next,
                },
            );
        }
        Self {
            initial: name(table.initial()),
            tick,
            states,
        }
    }

    /// Get a state entry by phase.
    pub fn state(&self, phase: Phase) -> Option<&StateConfig> {
        self.states
            .iter()
            .find(|(k, _)| k.as_str() == phase.name())
            .map(|(_, v)| v)
    }

    /// List the configured state names.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(|s| s.as_str())
    }

    /// Validate and convert into an immutable [`StateTable`].
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn to_table(&self) -> Result<StateTable> {
        super::validation::validate_config(self)?;

        let mut rows = [StateDef::new(CoilPattern::OFF, Ticks(0), [Phase::Cw1; 4]); Phase::COUNT];
        for phase in Phase::ALL {
            let entry = self
                .state(phase)
                .ok_or(Error::Config(ConfigError::MissingState(phase.name())))?;
            let mut next = [Phase::Cw1; 4];
            for (slot, target) in next.iter_mut().zip(entry.next.iter()) {
                *slot = resolve(target.as_str())?;
            }
            rows[phase.index()] = StateDef::new(entry.output, entry.delay, next);
        }

        Ok(StateTable::new(rows, resolve(self.initial.as_str())?))
    }
}
