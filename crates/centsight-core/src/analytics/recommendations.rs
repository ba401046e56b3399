//! Actionable recommendations
//!
//! Generation is pure; the one mutating effect the engine offers is
//! `RecommendationSet::apply`, which adjusts a single budget's limit and
//! retires the recommendation that proposed it.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::AnalyticsConfig;
use crate::models::{
    Budget, BudgetPrediction, Recommendation, RecommendationKind, SpendingPattern, Trend,
};

/// Generate ranked recommendations from the pipeline's derived state
///
/// - `Reallocation`: a budget forecast to overrun its limit, paired with the
///   sibling category furthest under budget; impact is the smaller of the
///   shortfall and the sibling's headroom.
/// - `Savings`: a category with an increasing trend and high volatility.
/// - `Alert`: a budget already over its limit today.
///
/// At most one recommendation per (category, kind); ranked by descending
/// impact.
pub fn generate_recommendations(
    budgets: &[Budget],
    predictions: &[BudgetPrediction],
    patterns: &[SpendingPattern],
    config: &AnalyticsConfig,
) -> Vec<Recommendation> {
    let prediction_for: HashMap<&str, &BudgetPrediction> = predictions
        .iter()
        .map(|p| (p.category.as_str(), p))
        .collect();

    let mut recommendations: Vec<Recommendation> = Vec::new();

    for budget in budgets {
        let predicted = match prediction_for.get(budget.category.as_str()) {
            Some(p) => p.predicted_total,
            None => continue,
        };
        let shortfall = predicted - budget.limit;
        if shortfall <= 0.0 {
            continue;
        }

        // Donor: the sibling with the most headroom that is still well under
        // its own limit
        let donor = budgets
            .iter()
            .filter(|b| b.category != budget.category)
            .filter(|b| b.percentage() < config.surplus_percentage && b.remaining() > 0.0)
            .max_by(|a, b| {
                a.remaining()
                    .partial_cmp(&b.remaining())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(donor) = donor {
            let impact = shortfall.min(donor.remaining());
            recommendations.push(Recommendation {
                id: format!("reallocation:{}", budget.category),
                kind: RecommendationKind::Reallocation,
                category: Some(budget.category.clone()),
                title: format!("Reallocate toward {}", budget.category),
                description: format!(
                    "{} is on pace to finish {:.2} over its limit while {} has {:.2} unspent; \
                     shifting budget would cover the gap",
                    budget.category,
                    shortfall,
                    donor.category,
                    donor.remaining()
                ),
                impact,
            });
        }
    }

    for pattern in patterns {
        if pattern.trend != Trend::Increasing || pattern.average_monthly <= 0.0 {
            continue;
        }
        if pattern.volatility <= pattern.average_monthly * config.high_volatility_ratio {
            continue;
        }
        recommendations.push(Recommendation {
            id: format!("savings:{}", pattern.category),
            kind: RecommendationKind::Savings,
            category: Some(pattern.category.clone()),
            title: format!("Review {} spending", pattern.category),
            description: format!(
                "{} is rising and swings by {:.2} around a {:.2} monthly average; \
                 smoothing the spikes is the likeliest saving",
                pattern.category, pattern.volatility, pattern.average_monthly
            ),
            impact: pattern.volatility,
        });
    }

    for budget in budgets {
        let overage = budget.spent - budget.limit;
        if overage <= 0.0 {
            continue;
        }
        recommendations.push(Recommendation {
            id: format!("alert:{}", budget.category),
            kind: RecommendationKind::Alert,
            category: Some(budget.category.clone()),
            title: format!("{} is over budget", budget.category),
            description: format!(
                "{} has already spent {:.2} against a limit of {:.2}",
                budget.category, budget.spent, budget.limit
            ),
            impact: overage,
        });
    }

    // One active recommendation per (category, kind); ids encode exactly that
    let mut seen = std::collections::HashSet::new();
    recommendations.retain(|r| seen.insert(r.id.clone()));

    recommendations.sort_by(|a, b| {
        b.impact
            .partial_cmp(&a.impact)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    debug!(
        recommendations = recommendations.len(),
        "Recommendation generation complete"
    );

    recommendations
}

/// Outcome of applying a recommendation
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// A reallocation raised the target budget's limit
    AdjustedLimit { category: String, new_limit: f64 },
    /// The recommendation was retired without touching any budget
    Acknowledged,
    /// The id is not in the active set; nothing happened
    NotActive,
}

/// The active set of recommendations, consumed one apply at a time
///
/// Applying retires the recommendation, so a second apply of the same id is
/// a no-op. This is what makes the budget adjustment idempotent at the
/// recommendation level.
#[derive(Debug, Clone)]
pub struct RecommendationSet {
    active: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        Self {
            active: recommendations,
        }
    }

    pub fn active(&self) -> &[Recommendation] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recommendation> {
        self.active.iter().find(|r| r.id == id)
    }

    /// Apply a recommendation by id
    ///
    /// A `Reallocation` raises its target budget's limit by `step` as a
    /// single read-modify-write of exactly one budget; `Savings` and `Alert`
    /// only acknowledge. Either way the recommendation leaves the active set.
    /// The target is resolved by category key at apply time; if the budget
    /// was deleted since generation, the recommendation is retired with no
    /// effect.
    pub fn apply(&mut self, id: &str, budgets: &mut [Budget], step: f64) -> ApplyOutcome {
        let position = match self.active.iter().position(|r| r.id == id) {
            Some(position) => position,
            None => return ApplyOutcome::NotActive,
        };
        let recommendation = self.active.remove(position);

        match recommendation.kind {
            RecommendationKind::Reallocation => {
                let category = match recommendation.category {
                    Some(category) => category,
                    None => return ApplyOutcome::Acknowledged,
                };
                match budgets.iter_mut().find(|b| b.category == category) {
                    Some(budget) => {
                        let new_limit = budget.limit + step;
                        budget.set_limit(new_limit);
                        info!(
                            category = %category,
                            new_limit,
                            step,
                            "Applied reallocation recommendation"
                        );
                        ApplyOutcome::AdjustedLimit {
                            category,
                            new_limit,
                        }
                    }
                    None => ApplyOutcome::Acknowledged,
                }
            }
            RecommendationKind::Savings | RecommendationKind::Alert => ApplyOutcome::Acknowledged,
        }
    }
}
