//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `allocate` - Budget allocation suggestion command
//! - `forecast` - Month-end spending forecast command
//! - `insights` - Budget insight command
//! - `patterns` - Spending pattern analysis command
//! - `recommend` - Recommendation listing and apply command
//! - `report` - Full pipeline report command

pub mod allocate;
pub mod forecast;
pub mod insights;
pub mod patterns;
pub mod recommend;
pub mod report;

// Re-export command functions for main.rs
pub use allocate::*;
pub use forecast::*;
pub use insights::*;
pub use patterns::*;
pub use recommend::*;
pub use report::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;

use centsight_core::{
    days_in_month,
    import::{load_budgets, load_transactions},
    models::{Budget, Transaction},
    AnalyticsConfig, AnalyticsEngine,
};

/// Build the engine from an optional TOML config override
pub fn load_engine(config: Option<&Path>) -> Result<AnalyticsEngine> {
    let config = match config {
        Some(path) => AnalyticsConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AnalyticsConfig::default(),
    };
    Ok(AnalyticsEngine::with_config(config))
}

/// Resolve the (day_of_month, days_in_month) pair for analysis
///
/// The clock lives here, on the CLI side; the library never reads it.
pub fn resolve_calendar(day: Option<u32>) -> (u32, u32) {
    let today = chrono::Local::now().date_naive();
    let days = days_in_month(today.year(), today.month());
    (day.unwrap_or_else(|| today.day()), days)
}

/// Load a transactions + budgets snapshot
pub fn load_snapshot(
    transactions: &Path,
    budgets: &Path,
) -> Result<(Vec<Transaction>, Vec<Budget>)> {
    let transactions = load_transactions(transactions)
        .with_context(|| format!("Failed to load transactions from {}", transactions.display()))?;
    let budgets = load_budgets(budgets)
        .with_context(|| format!("Failed to load budgets from {}", budgets.display()))?;
    tracing::debug!(
        transactions = transactions.len(),
        budgets = budgets.len(),
        "Snapshot loaded"
    );
    Ok((transactions, budgets))
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
