//! Narrative budget insights
//!
//! A pure classification pass per budget: no state machine, no retained
//! handles. Predictions and patterns are looked up by category key, so a
//! budget edited or deleted since they were computed simply misses its
//! lookup instead of dangling.

use std::collections::HashMap;

use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::models::{Budget, BudgetInsight, BudgetPrediction, InsightKind, SpendingPattern, Trend};

/// Classify each budget into severity-tagged insights
///
/// Returned sorted by severity (warnings first), ties broken by descending
/// spend percentage. When nothing qualifies, a single neutral "no notable
/// activity" insight is returned instead of an empty list.
pub fn generate_insights(
    budgets: &[Budget],
    predictions: &[BudgetPrediction],
    patterns: &[SpendingPattern],
    config: &AnalyticsConfig,
) -> Vec<BudgetInsight> {
    let prediction_for: HashMap<&str, &BudgetPrediction> = predictions
        .iter()
        .map(|p| (p.category.as_str(), p))
        .collect();
    let pattern_for: HashMap<&str, &SpendingPattern> =
        patterns.iter().map(|p| (p.category.as_str(), p)).collect();

    // Carry the percentage alongside each insight for the severity sort
    let mut ranked: Vec<(BudgetInsight, f64)> = Vec::new();

    for budget in budgets {
        let percentage = budget.percentage();
        let category = budget.category.as_str();
        let predicted_over = prediction_for
            .get(category)
            .map(|p| p.predicted_total > budget.limit)
            .unwrap_or(false);
        let trend = pattern_for.get(category).map(|p| p.trend);

        if percentage >= config.warning_percentage {
            let (title, description) = if percentage >= 100.0 {
                (
                    format!("Over budget: {}", category),
                    format!(
                        "{} has spent {:.2} against a limit of {:.2} ({:.0}%)",
                        category, budget.spent, budget.limit, percentage
                    ),
                )
            } else {
                (
                    format!("Approaching limit: {}", category),
                    format!(
                        "{} is at {:.0}% of its limit with {:.2} remaining",
                        category,
                        percentage,
                        budget.remaining()
                    ),
                )
            };
            ranked.push((
                BudgetInsight {
                    id: format!("warning:limit:{}", category),
                    title,
                    description,
                    kind: InsightKind::Warning,
                    category: Some(category.to_string()),
                },
                percentage,
            ));
        } else if percentage >= config.early_warning_percentage && predicted_over {
            // Softer early warning: not near the limit yet, but the pace says
            // the month will end over it
            ranked.push((
                BudgetInsight {
                    id: format!("warning:pace:{}", category),
                    title: format!("Trending over: {}", category),
                    description: format!(
                        "{} is at {:.0}% of its limit and on pace to finish the month over it",
                        category, percentage
                    ),
                    kind: InsightKind::Warning,
                    category: Some(category.to_string()),
                },
                percentage,
            ));
        }

        if trend == Some(Trend::Decreasing) {
            if percentage < config.early_warning_percentage {
                ranked.push((
                    BudgetInsight {
                        id: format!("success:on-track:{}", category),
                        title: format!("On track: {}", category),
                        description: format!(
                            "{} spending is trending down and sits at {:.0}% of its limit",
                            category, percentage
                        ),
                        kind: InsightKind::Success,
                        category: Some(category.to_string()),
                    },
                    percentage,
                ));
            }
            if budget.spent < budget.limit * config.savings_spend_ratio {
                ranked.push((
                    BudgetInsight {
                        id: format!("success:savings:{}", category),
                        title: format!("Potential savings: {}", category),
                        description: format!(
                            "{} is well under budget with a falling trend; {:.2} of its limit is unspent",
                            category,
                            budget.remaining()
                        ),
                        kind: InsightKind::Success,
                        category: Some(category.to_string()),
                    },
                    percentage,
                ));
            }
        }
    }

    if ranked.is_empty() {
        return vec![BudgetInsight {
            id: "neutral:no-activity".to_string(),
            title: "No notable activity".to_string(),
            description: "All budgets look quiet; nothing needs attention right now".to_string(),
            kind: InsightKind::Neutral,
            category: None,
        }];
    }

    ranked.sort_by(|(a, a_pct), (b, b_pct)| {
        b.kind
            .priority()
            .cmp(&a.kind.priority())
            .then_with(|| b_pct.partial_cmp(a_pct).unwrap_or(std::cmp::Ordering::Equal))
    });

    debug!(insights = ranked.len(), "Insight generation complete");

    ranked.into_iter().map(|(insight, _)| insight).collect()
}
