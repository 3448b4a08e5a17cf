//! Unit tests for TOML state table configuration.

use stepper_fsm::config::{load_config, parse_config, validate_config, FsmConfig};
use stepper_fsm::error::{ConfigError, Error};
use stepper_fsm::{Input, Phase, StateTable};

const HALF_SPEED: &str = r#"
initial = "S_CW3"
tick_ms = 20

[states.S_CW1]
output = 5
delay_ticks = 10
next = ["S_CW2", "S_CW2", "S_CW4", "S_CW2"]

[states.S_CW2]
output = 6
delay_ticks = 10
next = ["S_CW3", "S_CW3", "S_CW1", "S_CW3"]

[states.S_CW3]
output = 10
delay_ticks = 10
next = ["S_CW4", "S_CW4", "S_CW2", "S_CW4"]

[states.S_CW4]
output = 9
delay_ticks = 10
next = ["S_CW1", "S_CW1", "S_CW3", "S_CW1"]
"#;

/// Test parsing a table with a non-default tick and initial phase.
#[test]
fn test_parse_custom_initial_and_tick() {
    let config = parse_config(HALF_SPEED).expect("Failed to parse TOML");
    assert_eq!(config.tick.as_ms(), 20);

    let table = config.to_table().unwrap();
    assert_eq!(table.initial(), Phase::Cw3);
    assert_eq!(table.output(Phase::Cw3).bits(), 10);
    assert_eq!(table.next(Phase::Cw3, Input::Clockwise), Phase::Cw4);
}

/// Test that the parsed table only differs from the reference in its initial phase.
#[test]
fn test_parsed_rows_match_reference() {
    let table = parse_config(HALF_SPEED).unwrap().to_table().unwrap();
    let reference = StateTable::reference();
    for p in Phase::ALL {
        assert_eq!(table.state(p), reference.state(p));
    }
}

/// Test that an unknown state key is rejected.
#[test]
fn test_unknown_state_key() {
    let toml_str = format!(
        "{}\n[states.S_IDLE]\noutput = 0\ndelay_ticks = 1\nnext = [\"S_CW1\", \"S_CW1\", \"S_CW1\", \"S_CW1\"]\n",
        HALF_SPEED
    );
    let result = parse_config(&toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::UnknownState(ref s))) if s.as_str() == "S_IDLE"
    ));
}

/// Test that an unknown initial phase is rejected.
#[test]
fn test_unknown_initial() {
    let toml_str = HALF_SPEED.replace("initial = \"S_CW3\"", "initial = \"S5\"");
    assert!(matches!(
        parse_config(&toml_str),
        Err(Error::Config(ConfigError::UnknownState(_)))
    ));
}

/// Test that a transition list with five entries is rejected.
#[test]
fn test_too_many_transitions() {
    let toml_str = HALF_SPEED.replace(
        r#"next = ["S_CW4", "S_CW4", "S_CW2", "S_CW4"]"#,
        r#"next = ["S_CW4", "S_CW4", "S_CW2", "S_CW4", "S_CW4"]"#,
    );
    assert_eq!(
        parse_config(&toml_str).unwrap_err(),
        Error::Config(ConfigError::InvalidTransitionCount {
            state: "S_CW3",
            count: 5,
        })
    );
}

/// Test that a missing phase is rejected by validation.
#[test]
fn test_missing_phase_rejected() {
    let cut = HALF_SPEED.find("[states.S_CW4]").unwrap();
    let config: FsmConfig = toml::from_str(&HALF_SPEED[..cut]).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::MissingState("S_CW4")))
    );
}

/// Test that defaults apply when `initial` and `tick_ms` are omitted.
#[test]
fn test_defaults() {
    let body = HALF_SPEED
        .replace("initial = \"S_CW3\"\n", "")
        .replace("tick_ms = 20\n", "");
    let config = parse_config(&body).unwrap();
    assert_eq!(config.initial.as_str(), "S_CW1");
    assert_eq!(config.tick.as_ms(), 10);
    assert_eq!(config.to_table().unwrap(), StateTable::reference());
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("stepper_fsm_load_config.toml");
    std::fs::write(&path, HALF_SPEED).unwrap();
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.state_names().count(), 4);
}
