mod config;
mod engine;
mod frontend;
mod keypad;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// A four-function keypad calculator for the terminal.
#[derive(Debug, Parser)]
#[command(name = "keycalc", version, about)]
struct Args {
    /// Run a key sequence instead of the interactive keypad, e.g. "7 x 8 =".
    #[arg(short, long)]
    keys: Option<String>,

    /// With --keys, print the display after every key instead of only at the
    /// end.
    #[arg(long, requires = "keys")]
    steps: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match args.keys {
        Some(sequence) => run_sequence(&sequence, args.steps),
        None => {
            let config = config::Config::load().unwrap_or_else(|error| {
                tracing::warn!(%error, "falling back to the default config");
                config::Config::default()
            });
            frontend::terminal::run(&config)
        }
    }
}

/// Feed a key sequence to a fresh calculator and print the display.
fn run_sequence(sequence: &str, steps: bool) -> Result<()> {
    let keys = keypad::parse_sequence(sequence)?;

    let mut state = engine::CalculatorState::new();
    for key in keys {
        state = key.apply(&state);
        tracing::debug!(?key, display = state.display(), "applied key");
        if steps {
            println!("{}", state.display());
        }
    }
    if !steps {
        println!("{}", state.display());
    }
    Ok(())
}
