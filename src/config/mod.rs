//! Configuration module for stepper-fsm.
//!
//! Describes a state table in TOML (with `std` feature) or as pre-parsed data,
//! validates it and turns it into an immutable [`StateTable`](crate::fsm::StateTable).

mod table;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use table::{FsmConfig, StateConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{CoilPattern, TickPeriod, Ticks};
