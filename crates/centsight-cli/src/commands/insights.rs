//! Insight command implementation

use std::path::Path;

use anyhow::Result;

use centsight_core::models::InsightKind;
use centsight_core::AnalyticsEngine;

use super::{load_snapshot, resolve_calendar};

fn glyph(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "⚠️ ",
        InsightKind::Success => "✅",
        InsightKind::Neutral => "ℹ️ ",
    }
}

pub fn cmd_insights(
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
    let insights = engine.generate_insights(&budgets, &predictions, &patterns);

    println!();
    println!("💡 Budget Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    for insight in &insights {
        println!("   {} {}", glyph(insight.kind), insight.title);
        println!("      {}", insight.description);
    }
    println!();

    Ok(())
}
