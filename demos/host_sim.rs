//! Host simulation of the stepper controller.
//!
//! Drives the reference table from a scripted switch sequence, printing the
//! coil lines for every phase. Sleeps for real, scaled down by `SPEEDUP`.
//!
//! Optionally pass a TOML table file: `cargo run --example host_sim -- table.toml`

use std::cell::Cell;

use stepper_fsm::{
    load_config, CancelToken, CoilPattern, Controller, FsmConfig, Input,
};

const SPEEDUP: u32 = 10;

/// Delay provider sleeping on the host.
struct HostDelay;

impl embedded_hal::delay::DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos((ns / SPEEDUP) as u64));
    }
}

fn coils(p: CoilPattern) -> String {
    ["A", "A'", "B", "B'"]
        .iter()
        .zip([3u8, 2, 1, 0])
        .map(|(name, bit)| if p.line(bit) { *name } else { "-" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    println!("=== Stepper FSM Host Simulation ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path).expect("Failed to load table"),
        None => FsmConfig::reference(),
    };
    let table = config.to_table().expect("Invalid table");
    let tick = config.tick;

    for (phase, def) in table.iter() {
        println!(
            "{}: output {:2} [{}] hold {} ms",
            phase,
            def.output.bits(),
            coils(def.output),
            def.delay.to_ms(tick)
        );
    }

    // Half a revolution each way, then the "stop" codes
    let script: Vec<Input> = [Input::Clockwise; 4]
        .into_iter()
        .chain([Input::CounterClockwise; 4])
        .chain([Input::Stop, Input::StopAlt])
        .collect();

    let token = CancelToken::new();
    let cursor = Cell::new(0usize);

    let mut controller = Controller::builder()
        .from_config(&config)
        .expect("Invalid table")
        .coils(|p: CoilPattern| println!("  write {:2} [{}]", p.bits(), coils(p)))
        .input(|| {
            let i = cursor.get();
            cursor.set(i + 1);
            if i + 1 >= script.len() {
                token.cancel();
            }
            let input = script[i.min(script.len() - 1)];
            println!("  read  {:02b}", input.bits());
            input
        })
        .delay(HostDelay)
        .build()
        .expect("Failed to build controller");

    println!("\nStart in {}\n", controller.current());
    let cycles = controller.run_until(&token).expect("Collaborator failed");

    println!("\nStopped in {} after {} cycles", controller.current(), cycles);
}
