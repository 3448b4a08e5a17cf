//! Unit test harness for stepper-fsm.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod table_properties;
