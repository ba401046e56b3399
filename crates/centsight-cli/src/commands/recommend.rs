//! Recommendation command implementation
//!
//! Listing is read-only; `--apply <id>` performs the engine's single
//! mutating effect (a fixed-step limit adjustment) and writes the updated
//! budgets file back.

use std::path::Path;

use anyhow::{Context, Result};

use centsight_core::models::RecommendationKind;
use centsight_core::{AnalyticsEngine, ApplyOutcome};

use super::{load_snapshot, resolve_calendar, truncate};

fn glyph(kind: RecommendationKind) -> &'static str {
    match kind {
        RecommendationKind::Reallocation => "🔁",
        RecommendationKind::Savings => "💡",
        RecommendationKind::Alert => "🚨",
    }
}

pub fn cmd_recommend(
    engine: &AnalyticsEngine,
    transactions_path: &Path,
    budgets_path: &Path,
    day: Option<u32>,
    apply: Option<&str>,
) -> Result<()> {
    let (transactions, mut budgets) = load_snapshot(transactions_path, budgets_path)?;
    let (day_of_month, days_in_month) = resolve_calendar(day);

    let patterns = engine.analyze_spending_patterns(&transactions)?;
    let predictions =
        engine.predict_monthly_spending(&budgets, &patterns, day_of_month, days_in_month)?;
    let mut set = engine.generate_recommendations(&budgets, &predictions, &patterns);

    if let Some(id) = apply {
        let step = engine.config().reallocation_step;
        match set.apply(id, &mut budgets, step) {
            ApplyOutcome::AdjustedLimit {
                category,
                new_limit,
            } => {
                let json = serde_json::to_string_pretty(&budgets)?;
                std::fs::write(budgets_path, json).with_context(|| {
                    format!("Failed to write budgets to {}", budgets_path.display())
                })?;
                println!(
                    "✅ Applied {}: {} limit raised to {:.2} (written to {})",
                    id,
                    category,
                    new_limit,
                    budgets_path.display()
                );
            }
            ApplyOutcome::Acknowledged => {
                println!("✅ Acknowledged {}", id);
            }
            ApplyOutcome::NotActive => {
                println!("Nothing to apply: {} is not in the active set", id);
            }
        }
        return Ok(());
    }

    println!();
    println!("🧭 Recommendations");
    println!("   ─────────────────────────────────────────────────────────────");

    if set.is_empty() {
        println!("   Nothing to recommend right now.");
        println!();
        return Ok(());
    }

    for recommendation in set.active() {
        println!(
            "   {} [{}] {}  (impact {:.2})",
            glyph(recommendation.kind),
            recommendation.id,
            truncate(&recommendation.title, 40),
            recommendation.impact,
        );
        println!("      {}", recommendation.description);
    }
    println!();
    println!("   Apply one with: centsight recommend ... --apply <id>");
    println!();

    Ok(())
}
