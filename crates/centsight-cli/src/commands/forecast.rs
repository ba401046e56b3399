//! Forecast command implementation

use std::path::Path;

use anyhow::Result;

use centsight_core::AnalyticsEngine;

use super::{load_snapshot, resolve_calendar, truncate};

pub fn cmd_forecast(
    engine: &AnalyticsEngine,
    transactions_path: &Path,
    budgets_path: &Path,
    day: Option<u32>,
) -> Result<()> {
    let (transactions, budgets) = load_snapshot(transactions_path, budgets_path)?;
    let (day_of_month, days_in_month) = resolve_calendar(day);

    let patterns = engine.analyze_spending_patterns(&transactions)?;
    let predictions =
        engine.predict_monthly_spending(&budgets, &patterns, day_of_month, days_in_month)?;

    println!();
    println!(
        "🔮 Month-End Forecast (day {} of {})",
        day_of_month, days_in_month
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if predictions.is_empty() {
        println!("   No budgets to forecast.");
        println!();
        return Ok(());
    }

    for prediction in &predictions {
        let budget = budgets
            .iter()
            .find(|b| b.category == prediction.category);
        let limit = budget.map(|b| b.limit).unwrap_or(0.0);
        let marker = if prediction.predicted_total > limit {
            "⚠️ "
        } else {
            "   "
        };
        println!(
            "   {}{:<18} predicted {:>10.2}   limit {:>10.2}   confidence {:.2}",
            marker,
            truncate(&prediction.category, 18),
            prediction.predicted_total,
            limit,
            prediction.confidence,
        );
    }
    println!();

    Ok(())
}
