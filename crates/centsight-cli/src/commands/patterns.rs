//! Spending pattern command implementation

use std::path::Path;

use anyhow::{Context, Result};

use centsight_core::import::load_transactions;
use centsight_core::AnalyticsEngine;

pub fn cmd_patterns(
    engine: &AnalyticsEngine,
    transactions_path: &Path,
    lookback: Option<u32>,
) -> Result<()> {
    let transactions = load_transactions(transactions_path).with_context(|| {
        format!(
            "Failed to load transactions from {}",
            transactions_path.display()
        )
    })?;

    let lookback = lookback.unwrap_or(engine.config().lookback_months);
    let patterns = centsight_core::analyze_spending_patterns(
        &transactions,
        lookback,
        engine.config(),
    )?;

    println!();
    println!("📈 Spending Patterns ({} month lookback)", lookback);
    println!("   ─────────────────────────────────────────────────────────────");

    if patterns.is_empty() {
        println!("   No expense history in the window.");
        println!();
        return Ok(());
    }

    for pattern in &patterns {
        println!(
            "   {:<18} {:>10.2}/mo   {:<10}  volatility {:>8.2}   {} month{}",
            super::truncate(&pattern.category, 18),
            pattern.average_monthly,
            pattern.trend.to_string(),
            pattern.volatility,
            pattern.sample_size,
            if pattern.sample_size == 1 { "" } else { "s" },
        );
    }
    println!();

    Ok(())
}
