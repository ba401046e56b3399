//! Full pipeline report command implementation

use std::path::Path;

use anyhow::Result;

use centsight_core::models::InsightKind;
use centsight_core::AnalyticsEngine;

use super::{load_snapshot, resolve_calendar, truncate};

pub fn cmd_report(
    engine: &AnalyticsEngine,
    transactions_path: &Path,
    budgets_path: &Path,
    day: Option<u32>,
    json: bool,
) -> Result<()> {
    let (transactions, budgets) = load_snapshot(transactions_path, budgets_path)?;
    let (day_of_month, days_in_month) = resolve_calendar(day);

    let report = engine.run(&transactions, &budgets, day_of_month, days_in_month)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "📊 Budget Report (day {} of {})",
        day_of_month, days_in_month
    );
    println!("   ─────────────────────────────────────────────────────────────");

    println!();
    println!("   Budgets");
    for budget in &budgets {
        println!(
            "   {:<18} spent {:>10.2} of {:>10.2}   ({:>5.1}%)",
            truncate(&budget.category, 18),
            budget.spent,
            budget.limit,
            budget.percentage(),
        );
    }

    if !report.predictions.is_empty() {
        println!();
        println!("   Forecast");
        for prediction in &report.predictions {
            println!(
                "   {:<18} predicted {:>10.2}   confidence {:.2}",
                truncate(&prediction.category, 18),
                prediction.predicted_total,
                prediction.confidence,
            );
        }
    }

    println!();
    println!("   Insights");
    for insight in &report.insights {
        let glyph = match insight.kind {
            InsightKind::Warning => "⚠️ ",
            InsightKind::Success => "✅",
            InsightKind::Neutral => "ℹ️ ",
        };
        println!("   {} {}", glyph, insight.title);
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("   Recommendations");
        for recommendation in &report.recommendations {
            println!(
                "   [{}] {}  (impact {:.2})",
                recommendation.id,
                truncate(&recommendation.title, 40),
                recommendation.impact,
            );
        }
    }

    println!();
    Ok(())
}
