//! Stepper finite-state machine.
//!
//! A Moore machine over four coil phases. The output depends on the phase
//! alone, the transition on `(phase, input)`.

mod builder;
mod cancel;
mod controller;
mod input;
mod phase;
mod table;

pub use builder::ControllerBuilder;
pub use cancel::CancelToken;
pub use controller::Controller;
pub use input::Input;
pub use phase::Phase;
pub use table::{StateDef, StateTable, REFERENCE_DELAY};
