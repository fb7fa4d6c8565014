//! Centum command line.
//!
//! Runs a single money operation and prints the result, one value per line.
//!
//! Usage: centum --currency EUR split 100 3

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use centum_core::{CurrencyRegistry, JsonCodec, Money, MoneyCodec};
use centum_shared::AppConfig;

/// Exact integer money arithmetic.
#[derive(Parser, Debug)]
#[command(name = "centum", version, about = "Split, allocate, round and format money")]
struct Cli {
    /// Currency code. Defaults to the configured default currency.
    #[arg(long, short, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Operations on an amount given in minor units.
#[derive(Debug, Subcommand)]
enum Command {
    /// Split into N near-equal parts.
    Split {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Number of parties.
        #[arg(allow_negative_numbers = true)]
        parties: i64,
    },
    /// Allocate proportionally to integer ratios.
    Allocate {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Ratios, in party order.
        ratios: Vec<u32>,
    },
    /// Round to whole major units.
    Round {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Format for display.
    Format {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Encode with the default JSON codec.
    Encode {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = Arc::new(CurrencyRegistry::from_config(&config));
    info!(currencies = registry.len(), "currency registry loaded");

    for line in run(&cli, &config, &registry)? {
        println!("{line}");
    }
    Ok(())
}

fn run(
    cli: &Cli,
    config: &AppConfig,
    registry: &Arc<CurrencyRegistry>,
) -> anyhow::Result<Vec<String>> {
    let code = cli
        .currency
        .as_deref()
        .unwrap_or(config.default_currency.as_str());
    debug!(code, command = ?cli.command, "running command");

    let lines = match &cli.command {
        Command::Split { amount, parties } => {
            let money = registry.money(*amount, code)?;
            render(&money.split(*parties)?)
        }
        Command::Allocate { amount, ratios } => {
            let money = registry.money(*amount, code)?;
            render(&money.allocate(ratios)?)
        }
        Command::Round { amount } => vec![registry.money(*amount, code)?.round()?.to_string()],
        Command::Format { amount } => vec![registry.money(*amount, code)?.to_string()],
        Command::Encode { amount } => {
            let codec = JsonCodec::new(Arc::clone(registry));
            let bytes = codec.encode(&registry.money(*amount, code)?)?;
            vec![String::from_utf8(bytes).context("encoded money is not UTF-8")?]
        }
    };
    Ok(lines)
}

fn render(parts: &[Money]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}
