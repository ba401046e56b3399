//! Month-end spending forecasts
//!
//! Linear pace extrapolation of spend-to-date, blended with the category's
//! historical monthly average when a pattern exists. The blend weight is a
//! confidence score that saturates toward 1.0 as more months of history
//! back the pattern.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::{Error, Result};
use crate::models::{Budget, BudgetPrediction, SpendingPattern, Transaction};

use super::patterns::analyze_spending_patterns;

/// Number of days in the given calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("valid month")
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).expect("valid month")
    };
    (next - first).num_days() as u32
}

/// Confidence that a pattern's monthly average predicts this month
///
/// `n / (n + pivot)`: 0 with no history, saturating toward 1.0 as the
/// sample grows.
fn pattern_confidence(sample_size: usize, config: &AnalyticsConfig) -> f64 {
    let n = sample_size as f64;
    n / (n + config.confidence_pivot_months)
}

/// Forecast month-end totals for each budget
///
/// `pace_ratio` is spent per elapsed day; the pure pace estimate projects it
/// across the month. A matching pattern pulls the estimate toward its
/// monthly average in proportion to confidence. On the last day of the month
/// a pattern-free forecast reduces to the spend itself.
pub fn predict_monthly_spending(
    budgets: &[Budget],
    patterns: &[SpendingPattern],
    day_of_month: u32,
    days_in_month: u32,
    config: &AnalyticsConfig,
) -> Result<Vec<BudgetPrediction>> {
    if !(28..=31).contains(&days_in_month) {
        return Err(Error::InvalidArgument(format!(
            "days_in_month must be 28-31, got {}",
            days_in_month
        )));
    }
    if day_of_month == 0 || day_of_month > days_in_month {
        return Err(Error::InvalidArgument(format!(
            "day_of_month must be 1-{}, got {}",
            days_in_month, day_of_month
        )));
    }

    // Weak lookup by category key; budgets without history simply get a
    // zero-confidence pace projection
    let by_category: HashMap<&str, &SpendingPattern> = patterns
        .iter()
        .map(|p| (p.category.as_str(), p))
        .collect();

    let predictions = budgets
        .iter()
        .map(|budget| {
            let pace_ratio = budget.spent / day_of_month as f64;
            let pace_total = pace_ratio * days_in_month as f64;

            let (predicted_total, confidence) = match by_category.get(budget.category.as_str()) {
                Some(pattern) => {
                    let confidence = pattern_confidence(pattern.sample_size, config);
                    let blended =
                        (1.0 - confidence) * pace_total + confidence * pattern.average_monthly;
                    (blended, confidence)
                }
                None => (pace_total, 0.0),
            };

            BudgetPrediction {
                category: budget.category.clone(),
                predicted_total,
                confidence,
                days_elapsed: day_of_month,
                days_in_month,
                pace_ratio,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        budgets = predictions.len(),
        day = day_of_month,
        "Monthly spending forecast complete"
    );

    Ok(predictions)
}

/// Forecast with patterns computed from transaction history first
///
/// Convenience for callers that have not already run the pattern analyzer.
pub fn predict_with_history(
    transactions: &[Transaction],
    budgets: &[Budget],
    day_of_month: u32,
    days_in_month: u32,
    config: &AnalyticsConfig,
) -> Result<Vec<BudgetPrediction>> {
    let patterns = analyze_spending_patterns(transactions, config.lookback_months, config)?;
    predict_monthly_spending(budgets, &patterns, day_of_month, days_in_month, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trend;

    fn pattern(category: &str, average_monthly: f64, sample_size: usize) -> SpendingPattern {
        SpendingPattern {
            category: category.to_string(),
            average_monthly,
            trend: Trend::Stable,
            volatility: 0.0,
            sample_size,
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29); // leap year
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        let budgets = vec![Budget::new("b1", "Food", 500.0, 100.0)];
        let config = AnalyticsConfig::default();

        assert!(matches!(
            predict_monthly_spending(&budgets, &[], 0, 30, &config),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            predict_monthly_spending(&budgets, &[], 31, 30, &config),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            predict_monthly_spending(&budgets, &[], 1, 45, &config),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pace_projection_without_pattern() {
        // 5000 spent by day 20 of a 30-day month projects to 7500
        let budgets = vec![Budget::new("b1", "Food", 5500.0, 5000.0)];
        let predictions =
            predict_monthly_spending(&budgets, &[], 20, 30, &AnalyticsConfig::default()).unwrap();

        assert_eq!(predictions.len(), 1);
        let food = &predictions[0];
        assert!((food.predicted_total - 7500.0).abs() < 1e-9);
        assert!((food.pace_ratio - 250.0).abs() < 1e-9);
        assert_eq!(food.confidence, 0.0);
        assert_eq!(food.days_elapsed, 20);
        assert_eq!(food.days_in_month, 30);
    }

    #[test]
    fn test_last_day_reduces_to_spent() {
        let budgets = vec![Budget::new("b1", "Gas", 300.0, 240.0)];
        let predictions =
            predict_monthly_spending(&budgets, &[], 30, 30, &AnalyticsConfig::default()).unwrap();
        assert!((predictions[0].predicted_total - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_pattern_blend_pulls_toward_average() {
        let budgets = vec![Budget::new("b1", "Food", 1000.0, 300.0)];
        let patterns = vec![pattern("Food", 600.0, 2)];
        let config = AnalyticsConfig::default();

        let predictions =
            predict_monthly_spending(&budgets, &patterns, 10, 30, &config).unwrap();

        // Pace = 900, average = 600, confidence = 2/(2+2) = 0.5 -> 750
        let food = &predictions[0];
        assert!((food.confidence - 0.5).abs() < 1e-9);
        assert!((food.predicted_total - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_saturates_with_history() {
        let config = AnalyticsConfig::default();
        let low = pattern_confidence(1, &config);
        let mid = pattern_confidence(6, &config);
        let high = pattern_confidence(24, &config);

        assert!(low < mid && mid < high);
        assert!(high < 1.0);
        assert!((pattern_confidence(0, &config)).abs() < 1e-9);
    }

    #[test]
    fn test_predict_with_history_blends() {
        use crate::models::TransactionKind;

        let transactions = vec![
            Transaction {
                id: "t1".to_string(),
                date: "2026-06-10".parse().unwrap(),
                amount: 600.0,
                category: "Food".to_string(),
                kind: TransactionKind::Expense,
                merchant: None,
            },
            Transaction {
                id: "t2".to_string(),
                date: "2026-07-10".parse().unwrap(),
                amount: 600.0,
                category: "Food".to_string(),
                kind: TransactionKind::Expense,
                merchant: None,
            },
        ];
        let budgets = vec![Budget::new("b1", "Food", 1000.0, 300.0)];
        let predictions =
            predict_with_history(&transactions, &budgets, 10, 30, &AnalyticsConfig::default())
                .unwrap();

        // Two observed months give nonzero confidence
        assert!(predictions[0].confidence > 0.0);
    }
}
