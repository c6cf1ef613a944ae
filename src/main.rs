// src/main.rs

use std::path::PathBuf;

use clap::Parser;
use seedplume::transport::IntervalDetection;
use seedplume::{parse_input_deck, AdvectionResult, InputDeck, Simulation, SimulationResult};

#[derive(Parser)]
#[command(name = "seedplume")]
#[command(about = "1D upwind advection of a cloud-seeding tracer", long_about = None)]
struct Cli {
    /// Path to a YAML input deck (defaults to the built-in reference scenario)
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Detect injection boundaries by counting whole intervals instead of
    /// truncating the clock
    #[arg(long)]
    counted_intervals: bool,

    /// Print the full result (positions, velocity, snapshots) as YAML
    #[arg(long)]
    dump: bool,
}

fn main() -> AdvectionResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut deck = match &cli.deck {
        Some(path) => parse_input_deck(path)?,
        None => InputDeck::default(),
    };
    if cli.counted_intervals {
        deck.simulation.interval_detection = IntervalDetection::Counted;
    }

    let result = Simulation::from_deck(&deck)?.run();

    if cli.dump {
        print!("{}", serde_yaml::to_string(&result)?);
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn print_summary(result: &SimulationResult) {
    println!(
        "dt = {:.4} s, {} steps, {} injections",
        result.dt, result.steps, result.injections
    );
    println!("{:>10} {:>14} {:>12} {:>12}", "minutes", "total", "peak [m]", "peak value");
    for snapshot in &result.snapshots {
        let (peak_node, peak_value) = snapshot
            .concentration
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, c)| {
                if c > best.1 {
                    (i, c)
                } else {
                    best
                }
            });
        println!(
            "{:>10.2} {:>14.6e} {:>12.1} {:>12.4e}",
            snapshot.minutes(),
            snapshot.total(),
            result.positions[peak_node],
            peak_value
        );
    }
}
