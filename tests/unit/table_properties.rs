//! Laws of the reference transition table.

use embedded_hal_mock::eh1::delay::NoopDelay;
use proptest::prelude::*;

use stepper_fsm::{CoilPattern, Controller, Input, Phase, StateTable, TickPeriod};

fn phase() -> impl Strategy<Value = Phase> {
    prop::sample::select(Phase::ALL.to_vec())
}

fn input() -> impl Strategy<Value = Input> {
    prop::sample::select(Input::ALL.to_vec())
}

/// Every state has a successor for every input, inside the table.
#[test]
fn test_all_sixteen_edges_defined() {
    let table = StateTable::reference();
    let mut edges = 0;
    for p in Phase::ALL {
        for i in Input::ALL {
            let target = table.next(p, i);
            assert!(Phase::ALL.contains(&target));
            edges += 1;
        }
    }
    assert_eq!(edges, 16);
}

/// Four clockwise steps from S_CW1 return to S_CW1.
#[test]
fn test_clockwise_is_four_cycle() {
    let table = StateTable::reference();
    let mut p = table.initial();
    let mut seen = Vec::new();
    for _ in 0..4 {
        p = table.next(p, Input::Clockwise);
        seen.push(p);
    }
    assert_eq!(p, Phase::Cw1);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

/// Four counterclockwise steps from S_CW1 return to S_CW1.
#[test]
fn test_counter_clockwise_is_four_cycle() {
    let table = StateTable::reference();
    assert_eq!(table.walk(Phase::Cw1, [Input::CounterClockwise; 4]), Phase::Cw1);
    assert_eq!(table.walk(Phase::Cw1, [Input::CounterClockwise; 2]), Phase::Cw3);
}

proptest! {
    #[test]
    fn prop_clockwise_then_counter_clockwise_is_identity(p in phase()) {
        let table = StateTable::reference();
        let there = table.next(p, Input::Clockwise);
        prop_assert_eq!(table.next(there, Input::CounterClockwise), p);
        let back = table.next(p, Input::CounterClockwise);
        prop_assert_eq!(table.next(back, Input::Clockwise), p);
    }

    #[test]
    fn prop_stop_codes_agree(p in phase()) {
        let table = StateTable::reference();
        prop_assert_eq!(table.next(p, Input::Stop), table.next(p, Input::StopAlt));
        prop_assert_eq!(table.next(p, Input::Stop), table.next(p, Input::Clockwise));
    }

    #[test]
    fn prop_output_is_constant(p in phase(), reads in 1usize..16) {
        let table = StateTable::reference();
        let first = table.output(p);
        for _ in 0..reads {
            prop_assert_eq!(table.output(p), first);
        }
    }

    #[test]
    fn prop_raw_input_masked_to_two_bits(raw in any::<u32>()) {
        prop_assert_eq!(Input::from_bits(raw).bits() as u32, raw & 0b11);
    }

    /// The controller follows the table for any input sequence and writes
    /// the pattern of each phase it leaves.
    #[test]
    fn prop_controller_matches_table_walk(script in prop::collection::vec(input(), 0..64)) {
        let table = StateTable::reference();
        let mut written: Vec<CoilPattern> = Vec::new();
        let mut feed = script.clone().into_iter();

        let mut ctl = Controller::new(
            table.clone(),
            |p: CoilPattern| written.push(p),
            || feed.next().unwrap_or(Input::Stop),
            NoopDelay::new(),
            TickPeriod::REFERENCE,
        );
        let end = ctl.run_steps(script.len() as u32).unwrap();
        drop(ctl);

        prop_assert_eq!(end, table.walk(table.initial(), script.iter().copied()));

        let mut expected = Vec::new();
        let mut p = table.initial();
        for i in &script {
            expected.push(table.output(p));
            p = table.next(p, *i);
        }
        prop_assert_eq!(written, expected);
    }
}
