//! `rstripe` command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Offline: brand and checksum of a card number
//! rstripe card 4242424242424242
//!
//! # Live calls, key from --api-key, STRIPE_API_KEY or a .env file
//! rstripe account
//! rstripe coupons list --count 5
//! RUST_LOG=debug rstripe --log-traffic plans list
//! ```
//!
//! # Environment Variables
//!
//! - `STRIPE_API_KEY` - secret key for live calls
//! - `STRIPE_API_BASE` - override the API endpoint
//! - `RUST_LOG` - log level filter (default: `info`)

mod args;

use std::time::Duration;

use clap::Parser;
use rstripe::{CardBrand, LuhnError, luhn_valid};
use rstripe_http::{ClientConfig, ClientError, ConfigError, StripeClient};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command, ListAction};

/// Failures surfaced to the user.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid card number: {0}")]
    Card(#[from] LuhnError),
    #[error("no API key: pass --api-key or set STRIPE_API_KEY")]
    MissingApiKey,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("rstripe failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
async fn run(cli: Cli) -> Result<(), CliError> {
    let output = match &cli.command {
        Command::Card { number } => card_report(number)?,
        Command::Account => {
            let client = build_client(&cli)?;
            render(&client.account().retrieve().await?)?
        }
        Command::Coupons {
            action: ListAction::List(page),
        } => {
            let client = build_client(&cli)?;
            let coupons = client.coupons().list((*page).into()).await?;
            tracing::info!(count = coupons.len(), "Listed coupons");
            render(&coupons)?
        }
        Command::Plans {
            action: ListAction::List(page),
        } => {
            let client = build_client(&cli)?;
            let plans = client.plans().list((*page).into()).await?;
            tracing::info!(count = plans.len(), "Listed plans");
            render(&plans)?
        }
    };
    println!("{output}");
    Ok(())
}

fn build_client(cli: &Cli) -> Result<StripeClient, CliError> {
    let key = cli
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or(CliError::MissingApiKey)?;
    let mut config = ClientConfig::new()
        .with_api_key(key)
        .with_log_traffic(cli.log_traffic);
    if let Some(base) = cli.api_base.as_deref().filter(|b| !b.is_empty()) {
        config = config.with_base_url(base)?;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(base_url = %config.base_url(), "Using API endpoint");
    Ok(StripeClient::new(config))
}

/// Brand and checksum summary for a card number.
fn card_report(number: &str) -> Result<String, LuhnError> {
    let valid = luhn_valid(number)?;
    let brand = CardBrand::from_number(number);
    Ok(format!(
        "brand: {brand}\nchecksum: {}",
        if valid { "valid" } else { "invalid" }
    ))
}

fn render<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
