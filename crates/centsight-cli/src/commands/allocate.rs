//! Budget allocation command implementation

use std::path::Path;

use anyhow::{Context, Result};

use centsight_core::import::load_transactions;
use centsight_core::AnalyticsEngine;

pub fn cmd_allocate(
    engine: &AnalyticsEngine,
    income: f64,
    transactions_path: Option<&Path>,
) -> Result<()> {
    let transactions = match transactions_path {
        Some(path) => load_transactions(path)
            .with_context(|| format!("Failed to load transactions from {}", path.display()))?,
        None => Vec::new(),
    };

    let allocation = engine.suggest_budget_allocation(&transactions, income)?;

    println!();
    println!("💰 Suggested Allocation (income {:.2})", income);
    if transactions.is_empty() {
        println!("   Based on the default needs/wants/savings split.");
    } else {
        println!("   Based on your historical spending mix.");
    }
    println!("   ─────────────────────────────────────────────────────────────");

    for (category, limit) in &allocation {
        let share = limit / income * 100.0;
        println!(
            "   {:<18} {:>10.2}   ({:>4.1}%)",
            super::truncate(category, 18),
            limit,
            share
        );
    }

    let total: f64 = allocation.values().sum();
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:<18} {:>10.2}", "Total", total);
    println!();

    Ok(())
}
