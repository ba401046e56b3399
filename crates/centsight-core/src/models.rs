//! Domain models for Centsight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or draws from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A categorized financial transaction
///
/// Transactions arrive already categorized (categorization is a collaborator
/// outside this crate) and are never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    /// Magnitude of the transaction; `kind` carries the direction
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
    pub merchant: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// A per-category spending budget
///
/// `remaining` and `percentage` are derived on every read so they can never
/// drift from `limit - spent`. The only mutations are `record_spend` and
/// `set_limit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    /// Unique key per active budget
    pub category: String,
    pub limit: f64,
    pub spent: f64,
}

impl Budget {
    pub fn new(id: impl Into<String>, category: impl Into<String>, limit: f64, spent: f64) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            limit,
            spent,
        }
    }

    /// Amount left under the limit (negative when over budget)
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    /// Spend as a percentage of the limit; exceeds 100 when over budget
    pub fn percentage(&self) -> f64 {
        if self.limit <= 0.0 {
            return 0.0;
        }
        self.spent / self.limit * 100.0
    }

    pub fn record_spend(&mut self, amount: f64) {
        self.spent += amount;
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit;
    }
}

/// Coarse three-way classification of recent spend vs historical average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::str::FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            "stable" => Ok(Self::Stable),
            _ => Err(format!("Unknown trend: {}", s)),
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Historical spending statistics for one category
///
/// Recomputed fresh on every analysis call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingPattern {
    pub category: String,
    /// Mean of per-month expense totals over the observed window
    pub average_monthly: f64,
    pub trend: Trend,
    /// Standard deviation of per-month totals (0 with fewer than 2 months)
    pub volatility: f64,
    /// Months with at least one expense inside the window
    pub sample_size: usize,
}

/// Month-end spending forecast for one budget category
///
/// A derived, disposable value regenerated on each pipeline run. Whether the
/// category is "at risk" (predicted over limit) is re-derived downstream,
/// never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPrediction {
    pub category: String,
    pub predicted_total: f64,
    /// 0–1 score for how much historical data backs the forecast
    pub confidence: f64,
    pub days_elapsed: u32,
    pub days_in_month: u32,
    /// Spend per elapsed day
    pub pace_ratio: f64,
}

/// Severity class of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Neutral,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Neutral => "neutral",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Self::Warning => 3,
            Self::Success => 2,
            Self::Neutral => 1,
        }
    }
}

impl std::str::FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(Self::Warning),
            "success" => Ok(Self::Success),
            "neutral" => Ok(Self::Neutral),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A narrative insight about one budget (or the portfolio as a whole)
///
/// References its budget by category key only; budgets can be edited or
/// deleted between runs, so insights never hold a direct budget reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInsight {
    /// Deterministic `kind:slug:category` key, stable across runs over
    /// identical input so the UI can key/animate entries
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: InsightKind,
    pub category: Option<String>,
}

/// What an actionable recommendation proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Reallocation,
    Savings,
    Alert,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reallocation => "reallocation",
            Self::Savings => "savings",
            Self::Alert => "alert",
        }
    }
}

impl std::str::FromStr for RecommendationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reallocation" => Ok(Self::Reallocation),
            "savings" => Ok(Self::Savings),
            "alert" => Ok(Self::Alert),
            _ => Err(format!("Unknown recommendation kind: {}", s)),
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An actionable suggestion, consumed once via `RecommendationSet::apply`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Deterministic `kind:category` key; at most one active recommendation
    /// exists per (category, kind) pair
    pub id: String,
    pub kind: RecommendationKind,
    pub category: Option<String>,
    pub title: String,
    pub description: String,
    /// Estimated magnitude of the effect, used for ranking
    pub impact: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_budget_derived_fields() {
        let mut budget = Budget::new("b1", "Food", 5500.0, 5000.0);
        assert!((budget.remaining() - 500.0).abs() < f64::EPSILON);
        assert!((budget.percentage() - 90.909).abs() < 0.01);

        budget.record_spend(1000.0);
        assert!((budget.remaining() + 500.0).abs() < f64::EPSILON);
        // Over budget: percentage exceeds 100 and is not clamped
        assert!(budget.percentage() > 100.0);

        budget.set_limit(12000.0);
        assert!((budget.remaining() - 6000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_insight_kind_priority() {
        assert!(InsightKind::Warning.priority() > InsightKind::Success.priority());
        assert!(InsightKind::Success.priority() > InsightKind::Neutral.priority());
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!(
            TransactionKind::from_str("expense").unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(Trend::from_str("increasing").unwrap(), Trend::Increasing);
        assert_eq!(
            RecommendationKind::from_str("reallocation").unwrap(),
            RecommendationKind::Reallocation
        );
        assert!(Trend::from_str("sideways").is_err());
    }

    #[test]
    fn test_transaction_serde() {
        let json = r#"{
            "id": "t1",
            "date": "2026-07-15",
            "amount": 42.5,
            "category": "Food",
            "kind": "expense",
            "merchant": "Corner Deli"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.is_expense());
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.merchant.as_deref(), Some("Corner Deli"));
    }
}
