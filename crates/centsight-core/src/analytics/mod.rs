//! Budget Analytics & Prediction Engine
//!
//! A pure, synchronous pipeline that turns a history of transactions and a
//! set of category budgets into derived, disposable analysis:
//!
//! - **Pattern analyzer** - per-category historical statistics
//! - **Allocation suggester** - suggested limits for a monthly income
//! - **Spending predictor** - month-end forecasts per budget
//! - **Insight generator** - severity-tagged narrative insights
//! - **Recommendation engine** - ranked, applicable suggestions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use centsight_core::analytics::AnalyticsEngine;
//!
//! let engine = AnalyticsEngine::new();
//! let report = engine.run(&transactions, &budgets, day_of_month, days_in_month)?;
//! ```

pub mod allocation;
pub mod engine;
pub mod forecast;
pub mod insights;
pub mod patterns;
pub mod recommendations;

pub use allocation::suggest_budget_allocation;
pub use engine::{AnalyticsEngine, AnalyticsReport};
pub use forecast::{days_in_month, predict_monthly_spending, predict_with_history};
pub use insights::generate_insights;
pub use patterns::{analyze_spending_patterns, MonthKey};
pub use recommendations::{generate_recommendations, ApplyOutcome, RecommendationSet};
