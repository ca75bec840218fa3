//! Lagrand CLI
//!
//! Draws reproducible values from the command line. Every run with the same
//! `--seed` prints the same output.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lagrand_core::{EngineConfig, RandomEngine, WeightedValue};
use std::path::PathBuf;
use tracing::{debug, info};

/// Deterministic random values from a seed
#[derive(Parser)]
#[command(name = "lagrand")]
#[command(about = "Reproducible random numbers, shuffles and weighted picks")]
#[command(version)]
struct Cli {
    /// Seed text (numbers are used as-is, other text is hashed)
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// JSON engine configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integers in [min, max)
    Ints {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i32,
        #[arg(long, default_value_t = i32::MAX, allow_negative_numbers = true)]
        max: i32,
    },
    /// Doubles in [min, max]
    Doubles {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,
    },
    /// Bytes in [0, 255]
    Bytes {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Fair coin flips
    Bools {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Print the items in shuffled order
    Shuffle {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Weighted picks from ITEM[:WEIGHT] arguments (weight defaults to 1)
    Choose {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Print the engine snapshot as JSON
    Snapshot {
        /// Samples to draw before capturing
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let engine = build_engine(&cli)?;
    info!(seed = %engine.seed(), "engine ready");

    match cli.command {
        Commands::Ints { count, min, max } => {
            for value in engine.ints_in(count, min, max)? {
                println!("{}", value);
            }
        }
        Commands::Doubles { count, min, max } => {
            for value in engine.doubles_in(count, min, max)? {
                println!("{}", value);
            }
        }
        Commands::Bytes { count } => {
            for value in engine.bytes(count)? {
                println!("{}", value);
            }
        }
        Commands::Bools { count } => {
            for value in engine.bools(count)? {
                println!("{}", value);
            }
        }
        Commands::Shuffle { items } => {
            for item in engine.shuffled(&items)? {
                println!("{}", item);
            }
        }
        Commands::Choose { count, items } => {
            let weighted = items
                .iter()
                .map(|item| parse_weighted(item))
                .collect::<Result<Vec<_>>>()?;
            for value in engine.value_choices(&weighted, count)? {
                println!("{}", value);
            }
        }
        Commands::Snapshot { skip } => {
            for _ in 0..skip {
                engine.next_sample();
            }
            let json = serde_json::to_string_pretty(&engine.snapshot())
                .context("Failed to serialize snapshot")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// `--seed` wins over the config file; neither means a synthesized seed
fn build_engine(cli: &Cli) -> Result<RandomEngine> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            EngineConfig::from_json(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(seed) = &cli.seed {
        config.seed = Some(seed.clone());
    }

    debug!(?config, "building engine");
    Ok(config.build())
}

/// Parse `ITEM[:WEIGHT]`
fn parse_weighted(arg: &str) -> Result<WeightedValue<String>> {
    match arg.rsplit_once(':') {
        Some((value, weight)) => {
            let weight: i32 = weight
                .parse()
                .with_context(|| format!("Invalid weight in '{}'", arg))?;
            if value.is_empty() {
                bail!("Missing item before weight in '{}'", arg);
            }
            Ok(WeightedValue::new(value.to_string(), weight))
        }
        None => Ok(WeightedValue::new(arg.to_string(), 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weighted_with_and_without_weight() {
        let item = parse_weighted("gold:5").unwrap();
        assert_eq!(item.value, "gold");
        assert_eq!(item.weight, 5);

        let item = parse_weighted("silver").unwrap();
        assert_eq!(item.weight, 1);

        let item = parse_weighted("host:port:0").unwrap();
        assert_eq!(item.value, "host:port");
        assert_eq!(item.weight, 0);
    }

    #[test]
    fn test_parse_weighted_rejects_bad_weight() {
        assert!(parse_weighted("gold:lots").is_err());
        assert!(parse_weighted(":3").is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_flag_overrides_config() {
        let cli = Cli::parse_from(["lagrand", "--seed", "42", "bools"]);
        let engine = build_engine(&cli).unwrap();
        assert_eq!(engine.seed(), "42");
    }
}
