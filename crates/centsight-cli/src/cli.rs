//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Centsight - Budget analytics from transaction snapshots
#[derive(Parser)]
#[command(name = "centsight")]
#[command(about = "Personal budget analytics and prediction engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Analytics config TOML file (built-in defaults when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze historical spending patterns per category
    Patterns {
        /// Transactions file (.csv or .json)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Months of history to analyze (config default if omitted)
        #[arg(short, long)]
        lookback: Option<u32>,
    },

    /// Suggest a budget allocation for a monthly income
    Allocate {
        /// Monthly income to split
        #[arg(short, long)]
        income: f64,

        /// Transactions file; drives the split when provided
        #[arg(short, long)]
        transactions: Option<PathBuf>,
    },

    /// Forecast month-end spending per budget
    Forecast {
        /// Transactions file (.csv or .json)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Budgets file (.json)
        #[arg(short, long)]
        budgets: PathBuf,

        /// Day of month to forecast from (today if omitted)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Generate severity-tagged budget insights
    Insights {
        /// Transactions file (.csv or .json)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Budgets file (.json)
        #[arg(short, long)]
        budgets: PathBuf,

        /// Day of month to analyze as of (today if omitted)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Generate ranked recommendations; optionally apply one
    Recommend {
        /// Transactions file (.csv or .json)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Budgets file (.json)
        #[arg(short, long)]
        budgets: PathBuf,

        /// Day of month to analyze as of (today if omitted)
        #[arg(short, long)]
        day: Option<u32>,

        /// Apply the recommendation with this id and write the budgets
        /// file back
        #[arg(long)]
        apply: Option<String>,
    },

    /// Run the full analytics pipeline
    Report {
        /// Transactions file (.csv or .json)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Budgets file (.json)
        #[arg(short, long)]
        budgets: PathBuf,

        /// Day of month to analyze as of (today if omitted)
        #[arg(short, long)]
        day: Option<u32>,

        /// Emit the report as one JSON document
        #[arg(long)]
        json: bool,
    },
}
