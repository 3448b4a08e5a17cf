//! Error types for stepper-fsm.
//!
//! The state machine itself has no failure path. Errors come from loading a
//! state table configuration or from the hardware collaborators.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-fsm operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Hardware collaborator error
    Io(IoError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// State name is not one of `S_CW1`..`S_CW4`
    UnknownState(heapless::String<16>),
    /// A phase has no entry in the `[states]` table
    MissingState(&'static str),
    /// Transition list does not have exactly one entry per 2-bit input
    InvalidTransitionCount {
        /// State owning the transition list
        state: &'static str,
        /// Number of entries found
        count: usize,
    },
    /// Output pattern does not fit the four coil lines
    InvalidOutputPattern(u8),
    /// Phase delay must be at least one tick
    InvalidDelay(&'static str),
    /// Tick period must be > 0
    InvalidTickPeriod(u32),
    /// A required builder part was not supplied
    MissingPart(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware collaborator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoError {
    /// Writing a coil line failed
    OutputPin,
    /// Reading a direction switch failed
    InputPin,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::UnknownState(name) => {
                write!(f, "Unknown state '{}'. Valid states: S_CW1, S_CW2, S_CW3, S_CW4", name)
            }
            ConfigError::MissingState(name) => write!(f, "State '{}' is not defined", name),
            ConfigError::InvalidTransitionCount { state, count } => {
                write!(f, "State '{}' has {} transitions, expected 4", state, count)
            }
            ConfigError::InvalidOutputPattern(v) => {
                write!(f, "Invalid output pattern: {:#04x}. Must fit in 4 bits", v)
            }
            ConfigError::InvalidDelay(state) => {
                write!(f, "State '{}' has a zero delay. Must be >= 1 tick", state)
            }
            ConfigError::InvalidTickPeriod(v) => write!(f, "Invalid tick period: {} ms. Must be > 0", v),
            ConfigError::MissingPart(part) => write!(f, "{} is required", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::OutputPin => write!(f, "coil output pin operation failed"),
            IoError::InputPin => write!(f, "direction input pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for IoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_transition_count() {
        use core::fmt::Write;

        let e = Error::from(ConfigError::InvalidTransitionCount {
            state: "S_CW2",
            count: 3,
        });
        let mut msg = heapless::String::<128>::new();
        write!(msg, "{}", e).unwrap();
        assert_eq!(
            msg.as_str(),
            "Configuration error: State 'S_CW2' has 3 transitions, expected 4"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        assert_eq!(Error::from(IoError::InputPin), Error::Io(IoError::InputPin));
    }
}
