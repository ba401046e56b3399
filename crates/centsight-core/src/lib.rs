//! Centsight Core Library
//!
//! Shared functionality for the Centsight budgeting tool:
//! - Domain models (transactions, budgets, derived analysis values)
//! - The budget analytics & prediction engine (patterns, forecasts,
//!   insights, recommendations, allocation suggestions)
//! - Analytics configuration with TOML overrides
//! - Snapshot loading (transaction CSV/JSON, budget JSON)

pub mod analytics;
pub mod config;
pub mod error;
pub mod import;
pub mod models;

pub use analytics::{
    analyze_spending_patterns, days_in_month, generate_insights, generate_recommendations,
    predict_monthly_spending, predict_with_history, suggest_budget_allocation, AnalyticsEngine,
    AnalyticsReport, ApplyOutcome, MonthKey, RecommendationSet,
};
pub use config::AnalyticsConfig;
pub use error::{Error, Result};
pub use models::{
    Budget, BudgetInsight, BudgetPrediction, InsightKind, Recommendation, RecommendationKind,
    SpendingPattern, Transaction, TransactionKind, Trend,
};
