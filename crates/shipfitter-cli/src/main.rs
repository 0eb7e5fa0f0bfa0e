use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shipfitter_lib::{load_parts, render_report, Ship};

#[derive(Parser, Debug)]
#[command(version, about = "Assemble a spaceship from a parts list")]
struct Cli {
    /// Path to the parts file, one part name per line.
    #[arg(default_value = "vehicle_parts.txt")]
    parts_file: PathBuf,

    /// Seed the shuffle for reproducible output; omitted means system entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let parts = load_parts(&cli.parts_file)
        .with_context(|| format!("failed to load parts from {}", cli.parts_file.display()))?;
    println!("Parts loaded from: {}", cli.parts_file.display());

    let ship = match cli.seed {
        Some(seed) => Ship::assemble_with(parts, &mut StdRng::seed_from_u64(seed)),
        None => Ship::assemble(parts),
    };

    print_report(&ship);
    Ok(())
}

/// Write the ship report to stdout. Printing is best-effort: a write failure
/// is logged and never escalates past this function.
fn print_report(ship: &Ship) {
    let report = render_report(ship);
    let mut stdout = io::stdout();
    let outcome = writeln!(stdout).and_then(|()| stdout.write_all(report.as_bytes()));
    if let Err(err) = outcome {
        tracing::warn!(error = %err, "failed to write ship report");
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
