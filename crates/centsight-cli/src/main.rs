//! Centsight CLI - Budget analytics from transaction snapshots
//!
//! Usage:
//!   centsight patterns --transactions txs.csv        Spending patterns
//!   centsight allocate --income 5000                 Suggested budget split
//!   centsight report --transactions txs.csv --budgets budgets.json
//!                                                    Full pipeline run

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let engine = commands::load_engine(cli.config.as_deref())?;

    match cli.command {
        Commands::Patterns {
            transactions,
            lookback,
        } => commands::cmd_patterns(&engine, &transactions, lookback),
        Commands::Allocate {
            income,
            transactions,
        } => commands::cmd_allocate(&engine, income, transactions.as_deref()),
        Commands::Forecast {
            transactions,
            budgets,
            day,
        } => commands::cmd_forecast(&engine, &transactions, &budgets, day),
        Commands::Insights {
            transactions,
            budgets,
            day,
        } => commands::cmd_insights(&engine, &transactions, &budgets, day),
        Commands::Recommend {
            transactions,
            budgets,
            day,
            apply,
        } => commands::cmd_recommend(&engine, &transactions, &budgets, day, apply.as_deref()),
        Commands::Report {
            transactions,
            budgets,
            day,
            json,
        } => commands::cmd_report(&engine, &transactions, &budgets, day, json),
    }
}
