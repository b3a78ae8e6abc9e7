//! Rates CLI
//!
//! Command-line interface for the Currency Rates Gateway API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use rates_client::RatesClient;
use rates_types::CurrencyRateSet;

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "Currency rates gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the rates API
    #[arg(long, env = "RATES_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full rate sheet for a date
    List {
        /// Rate date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// One currency by ISO 4217 numeric code
    ByNumCode {
        /// Numeric code, e.g. 840
        code: u16,
        /// Rate date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// One currency by ISO 4217 alpha code
    ByCharCode {
        /// Alpha code, e.g. USD
        code: String,
        /// Rate date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RatesClient::new(&cli.api_url);

    match cli.command {
        Commands::List { date } => {
            print_rates(client.by_numeric_code(date, None).await?)?;
        }
        Commands::ByNumCode { code, date } => {
            print_rates(client.by_numeric_code(date, Some(code)).await?)?;
        }
        Commands::ByCharCode { code, date } => {
            print_rates(client.by_char_code(date, Some(&code)).await?)?;
        }
        Commands::Health => {
            let healthy = client.health().await?;
            println!("{}", if healthy { "healthy" } else { "unhealthy" });
        }
    }

    Ok(())
}

fn print_rates(rates: Option<CurrencyRateSet>) -> Result<()> {
    match rates {
        Some(rates) => println!("{}", serde_json::to_string_pretty(&rates)?),
        None => println!("no matching currency"),
    }
    Ok(())
}
