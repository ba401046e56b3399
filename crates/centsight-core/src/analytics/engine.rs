//! Analytics pipeline orchestration
//!
//! Composes the five components in dependency order: patterns feed
//! predictions, which feed insights and recommendations. The engine holds
//! only configuration; every run takes a fully materialized snapshot and
//! returns a fresh report with no retained handles.

use serde::Serialize;
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::models::{
    Budget, BudgetInsight, BudgetPrediction, Recommendation, SpendingPattern, Transaction,
};

use super::allocation::suggest_budget_allocation;
use super::forecast::predict_monthly_spending;
use super::insights::generate_insights;
use super::patterns::analyze_spending_patterns;
use super::recommendations::{generate_recommendations, RecommendationSet};

/// One full pipeline run over a snapshot
///
/// Plain serializable data, regenerated on every run; safe to render
/// directly or persist for history/audit.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub patterns: Vec<SpendingPattern>,
    pub predictions: Vec<BudgetPrediction>,
    pub insights: Vec<BudgetInsight>,
    pub recommendations: Vec<Recommendation>,
}

/// The budget analytics engine
///
/// Stateless between invocations; the only mutation it ever performs on the
/// caller's budgets goes through [`RecommendationSet::apply`].
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self {
            config: AnalyticsConfig::default(),
        }
    }

    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Per-category historical statistics over the configured lookback
    pub fn analyze_spending_patterns(
        &self,
        transactions: &[Transaction],
    ) -> Result<Vec<SpendingPattern>> {
        analyze_spending_patterns(transactions, self.config.lookback_months, &self.config)
    }

    /// Suggested per-category limits for a monthly income
    pub fn suggest_budget_allocation(
        &self,
        transactions: &[Transaction],
        monthly_income: f64,
    ) -> Result<std::collections::BTreeMap<String, f64>> {
        suggest_budget_allocation(transactions, monthly_income)
    }

    /// Month-end forecasts from precomputed patterns
    pub fn predict_monthly_spending(
        &self,
        budgets: &[Budget],
        patterns: &[SpendingPattern],
        day_of_month: u32,
        days_in_month: u32,
    ) -> Result<Vec<BudgetPrediction>> {
        predict_monthly_spending(budgets, patterns, day_of_month, days_in_month, &self.config)
    }

    /// Severity-tagged insights from budgets, forecasts, and patterns
    pub fn generate_insights(
        &self,
        budgets: &[Budget],
        predictions: &[BudgetPrediction],
        patterns: &[SpendingPattern],
    ) -> Vec<BudgetInsight> {
        generate_insights(budgets, predictions, patterns, &self.config)
    }

    /// Ranked recommendations, wrapped as an applicable active set
    pub fn generate_recommendations(
        &self,
        budgets: &[Budget],
        predictions: &[BudgetPrediction],
        patterns: &[SpendingPattern],
    ) -> RecommendationSet {
        RecommendationSet::new(generate_recommendations(
            budgets,
            predictions,
            patterns,
            &self.config,
        ))
    }

    /// Run the whole pipeline over a snapshot
    pub fn run(
        &self,
        transactions: &[Transaction],
        budgets: &[Budget],
        day_of_month: u32,
        days_in_month: u32,
    ) -> Result<AnalyticsReport> {
        let patterns = self.analyze_spending_patterns(transactions)?;
        let predictions =
            self.predict_monthly_spending(budgets, &patterns, day_of_month, days_in_month)?;
        let insights = self.generate_insights(budgets, &predictions, &patterns);
        let recommendations =
            generate_recommendations(budgets, &predictions, &patterns, &self.config);

        info!(
            patterns = patterns.len(),
            predictions = predictions.len(),
            insights = insights.len(),
            recommendations = recommendations.len(),
            "Analytics pipeline complete"
        );

        Ok(AnalyticsReport {
            patterns,
            predictions,
            insights,
            recommendations,
        })
    }
}
