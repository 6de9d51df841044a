//! Striking bout console application.
//!
//! Simulates a bout between the player and a CPU opponent, narrating each
//! round and offering a choice between rounds.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripts:
//!
//! ```bash
//! cargo run -p bout -- --headless --seed 7 --strikes jab,cross,uppercut
//! ```

mod config;
mod headless;
mod interactive;
mod render;

use anyhow::Result;
use std::io::{self, stdout};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG)
    dotenvy::dotenv().ok();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = config::parse_config_from_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = stdout().lock();

    let outcome = if config.headless {
        headless::run_headless(&config, &mut input, &mut out)?
    } else {
        interactive::run_interactive(&config, &mut input, &mut out)?
    };

    tracing::debug!(?outcome, "bout finished");
    Ok(())
}

/// Build the log filter from `RUST_LOG` directives, defaulting to `warn`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn print_help() {
    println!("Bout - turn-based striking simulator");
    println!();
    println!("USAGE:");
    println!("  bout [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help                  Show this help message");
    println!("  --headless                  Line-oriented mode (no screen clearing, no pauses)");
    println!("  --json                      With --headless, print each round as JSON");
    println!("  --seed <N>                  Seed the RNG for a reproducible bout");
    println!("  --pace-ms <MS>              Pause after each narration line (default: 1000)");
    println!("  --max-rounds <N>            Stop as a no contest after N rounds");
    println!("  --rest <N>                  Stamina recovered by resting (default: 20)");
    println!();
    println!("FIGHTERS:");
    println!("  --name <NAME>               Player name (default: Player)");
    println!("  --archetype <TYPE>          Player archetype (default: Pressure Brawler)");
    println!("  --strikes <LIST>            Player strikes (default: jab,cross,hook)");
    println!("  --stance <STANCE>           Player stance: orthodox or southpaw");
    println!("  --opponent-name <NAME>      Opponent name (default: CPU)");
    println!("  --opponent-archetype <TYPE> Opponent archetype (default: Counter Sniper)");
    println!("  --opponent-strikes <LIST>   Opponent strikes (default: front_kick,roundhouse)");
    println!("  --opponent-stance <STANCE>  Opponent stance (default: orthodox)");
    println!();
    println!("ARCHETYPES:");
    println!("  boxer, pressure-brawler, counter-sniper (anything else fights as a boxer)");
    println!();
    println!("STRIKES:");
    println!("  jab, cross, hook, uppercut, front_kick, roundhouse");
    println!("  low_kick, elbow, knee (accepted, but cannot be resolved in a round)");
    println!();
    println!("EXAMPLES:");
    println!("  bout                                   # Interactive bout");
    println!("  bout --headless --seed 7               # Scripted, reproducible bout");
    println!("  bout --archetype boxer --strikes jab,uppercut --pace-ms 0");
}
