//! Headless run of the classic ant.
//!
//! Demonstrates: build config → SimulationRunner → advance frames → read
//! metrics → inspect the final grid after the halt.

use turmite_bench::{reference_profile, stress_profile};
use turmite_core::Color;
use turmite_engine::{FrameOutcome, SimulationRunner};

fn main() {
    println!("=== Turmite Headless Example ===\n");

    // --- Run 1: classic ant until it walks off ---
    let config = reference_profile();
    println!(
        "Run 1: rules {} on {}x{}, {} steps per frame",
        config.rules, config.width, config.height, config.steps_per_frame
    );
    let mut runner = SimulationRunner::in_memory(config).unwrap();

    loop {
        let outcome = runner.advance_frame().unwrap();
        let m = runner.last_metrics();
        if m.frame_index % 4 == 0 || outcome.is_halted() {
            println!(
                "  frame {:>3}: {:>5} steps, {:>6} total, {:>5}us, agent at {}",
                m.frame_index,
                m.steps,
                m.total_steps,
                m.total_us,
                runner.agent().position(),
            );
        }
        if let FrameOutcome::Halted { reason, .. } = outcome {
            println!("  halted: {reason}");
            break;
        }
    }

    let black = runner.grid().count(Color::BLACK);
    println!(
        "  {black} of {} cells black after {} steps\n",
        runner.grid().cell_count(),
        runner.total_steps()
    );

    // --- Run 2: four colors, cancelled after a fixed budget ---
    let config = stress_profile().unwrap();
    println!(
        "Run 2: rules {} on {}x{}, cancelled after 5 frames",
        config.rules, config.width, config.height
    );
    let palette = config.palette.clone();
    let mut runner = SimulationRunner::in_memory(config).unwrap();
    runner.run_to_halt(5).unwrap();
    runner.cancel();
    println!("  state: {:?}", runner.state());

    for (i, color) in palette.iter().enumerate() {
        println!("  color {i} {color}: {} cells", runner.grid().count(color));
    }

    println!("\n=== Done ===");
}
