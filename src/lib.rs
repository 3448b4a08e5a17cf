//! # stepper-fsm
//!
//! Table-driven finite-state-machine controller for 4-phase stepper motors
//! with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Table as data**: four phases, each with a coil pattern, a hold time and
//!   one successor per 2-bit input
//! - **embedded-hal 1.0**: `OutputPin` for the coils, `InputPin` for the
//!   direction switches, `DelayNs` for phase timing
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Override the table from a TOML file
//! - **Testable loop**: Bounded and cancellable runs next to `run_forever`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_fsm::{CoilPins, Controller, StateTable, SwitchPair};
//!
//! let mut controller = Controller::builder()
//!     .table(StateTable::reference())
//!     .coils(CoilPins::new(pd3, pd2, pd1, pd0))
//!     .input(SwitchPair::new(pc7, pc6))
//!     .delay(delay)
//!     .build()?;
//!
//! // 01 steps clockwise, 10 counterclockwise
//! controller.run_forever()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod fsm;
pub mod hal;

// Re-exports for ergonomic API
pub use config::{validate_config, FsmConfig, StateConfig};
pub use error::{Error, Result};
pub use fsm::{CancelToken, Controller, ControllerBuilder, Input, Phase, StateDef, StateTable};
pub use hal::{CoilOutput, CoilPins, DirectionInput, SwitchPair};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{CoilPattern, TickPeriod, Ticks};
