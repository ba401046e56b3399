//! Integration tests for centsight-core
//!
//! These tests exercise the full snapshot -> analytics pipeline workflow.

use centsight_core::{
    analytics::AnalyticsEngine,
    config::AnalyticsConfig,
    import::{parse_transactions_csv, read_budgets_json},
    models::{InsightKind, RecommendationKind, Trend},
    ApplyOutcome, RecommendationSet,
};

/// Three months of history with:
/// - Food climbing month over month (increasing trend, volatile)
/// - Transport shrinking month over month (decreasing trend)
/// - Utilities flat (stable trend)
fn snapshot_csv() -> &'static str {
    "\
Date,Category,Amount,Type,Merchant
2026-05-03,Food,320.00,expense,Grocer
2026-05-18,Food,110.00,expense,Corner Deli
2026-06-02,Food,520.00,expense,Grocer
2026-06-21,Food,140.00,expense,Corner Deli
2026-07-04,Food,640.00,expense,Grocer
2026-07-15,Food,260.00,expense,Corner Deli
2026-05-10,Transport,180.00,expense,Metro
2026-06-10,Transport,120.00,expense,Metro
2026-07-10,Transport,60.00,expense,Metro
2026-05-12,Utilities,90.00,expense,Power Co
2026-06-12,Utilities,91.00,expense,Power Co
2026-07-12,Utilities,90.00,expense,Power Co
2026-07-01,Salary,5200.00,income,Acme Corp"
}

fn snapshot_budgets() -> &'static str {
    r#"[
        {"id": "b1", "category": "Food", "limit": 900.0, "spent": 900.0},
        {"id": "b2", "category": "Transport", "limit": 250.0, "spent": 55.0},
        {"id": "b3", "category": "Utilities", "limit": 120.0, "spent": 60.0}
    ]"#
}

#[test]
fn test_full_snapshot_workflow() {
    let transactions = parse_transactions_csv(snapshot_csv().as_bytes()).unwrap();
    assert_eq!(transactions.len(), 13);

    let budgets = read_budgets_json(snapshot_budgets().as_bytes()).unwrap();
    let engine = AnalyticsEngine::new();
    let report = engine.run(&transactions, &budgets, 20, 31).unwrap();

    // Income category never shows up as a spending pattern
    assert_eq!(report.patterns.len(), 3);
    assert!(report.patterns.iter().all(|p| p.category != "Salary"));

    let food = report
        .patterns
        .iter()
        .find(|p| p.category == "Food")
        .unwrap();
    assert_eq!(food.trend, Trend::Increasing);
    assert_eq!(food.sample_size, 3);
    assert!(food.volatility > 0.0);

    let transport = report
        .patterns
        .iter()
        .find(|p| p.category == "Transport")
        .unwrap();
    assert_eq!(transport.trend, Trend::Decreasing);

    let utilities = report
        .patterns
        .iter()
        .find(|p| p.category == "Utilities")
        .unwrap();
    assert_eq!(utilities.trend, Trend::Stable);

    // One prediction per budget, each carrying the calendar it was run with
    assert_eq!(report.predictions.len(), 3);
    assert!(report
        .predictions
        .iter()
        .all(|p| p.days_elapsed == 20 && p.days_in_month == 31));

    // Food is at 100% of its limit: a warning must surface first
    assert_eq!(report.insights[0].kind, InsightKind::Warning);
    assert_eq!(report.insights[0].category.as_deref(), Some("Food"));

    // Transport is decreasing and under half its limit: savings callout
    assert!(report
        .insights
        .iter()
        .any(|i| i.id == "success:savings:Transport"));

    // Food is over pace and rising+volatile; Transport has plenty of headroom
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.kind == RecommendationKind::Reallocation
            && r.category.as_deref() == Some("Food")));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.kind == RecommendationKind::Savings && r.category.as_deref() == Some("Food")));

    // Ranking is by descending impact
    for pair in report.recommendations.windows(2) {
        assert!(pair[0].impact >= pair[1].impact);
    }
}

#[test]
fn test_pipeline_is_order_independent() {
    let mut transactions = parse_transactions_csv(snapshot_csv().as_bytes()).unwrap();
    let budgets = read_budgets_json(snapshot_budgets().as_bytes()).unwrap();
    let engine = AnalyticsEngine::new();

    let forward = engine.run(&transactions, &budgets, 20, 31).unwrap();
    transactions.reverse();
    let reversed = engine.run(&transactions, &budgets, 20, 31).unwrap();

    assert_eq!(
        serde_json::to_string(&forward).unwrap(),
        serde_json::to_string(&reversed).unwrap()
    );
}

#[test]
fn test_apply_reallocation_end_to_end() {
    let transactions = parse_transactions_csv(snapshot_csv().as_bytes()).unwrap();
    let mut budgets = read_budgets_json(snapshot_budgets().as_bytes()).unwrap();

    let config = AnalyticsConfig::default();
    let engine = AnalyticsEngine::with_config(config.clone());
    let report = engine.run(&transactions, &budgets, 20, 31).unwrap();

    let target = report
        .recommendations
        .iter()
        .find(|r| r.kind == RecommendationKind::Reallocation)
        .unwrap()
        .id
        .clone();

    let mut set = RecommendationSet::new(report.recommendations);
    let before = budgets
        .iter()
        .find(|b| b.category == "Food")
        .unwrap()
        .limit;

    let outcome = set.apply(&target, &mut budgets, config.reallocation_step);
    let food = budgets.iter().find(|b| b.category == "Food").unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::AdjustedLimit {
            category: "Food".to_string(),
            new_limit: before + config.reallocation_step,
        }
    );
    // The derived fields track the new limit immediately
    assert!((food.remaining() - (food.limit - food.spent)).abs() < 1e-9);

    // Applying the same id again must not double-adjust
    let outcome = set.apply(&target, &mut budgets, config.reallocation_step);
    assert_eq!(outcome, ApplyOutcome::NotActive);
    let food = budgets.iter().find(|b| b.category == "Food").unwrap();
    assert!((food.limit - (before + config.reallocation_step)).abs() < 1e-9);
}

#[test]
fn test_empty_history_fallback_paths() {
    // The surrounding app frequently runs with no transaction history at
    // all; every fallback path has to hold up on its own.
    let engine = AnalyticsEngine::new();

    let allocation = engine.suggest_budget_allocation(&[], 50_000.0).unwrap();
    assert!(!allocation.is_empty());
    assert!(allocation.values().sum::<f64>() <= 50_000.0 + 1e-6);

    let budgets = read_budgets_json(snapshot_budgets().as_bytes()).unwrap();
    let report = engine.run(&[], &budgets, 31, 31).unwrap();
    assert!(report.patterns.is_empty());

    // Last day, no patterns: each forecast is exactly the spend so far
    for prediction in &report.predictions {
        let budget = budgets
            .iter()
            .find(|b| b.category == prediction.category)
            .unwrap();
        assert!((prediction.predicted_total - budget.spent).abs() < 1e-9);
        assert_eq!(prediction.confidence, 0.0);
    }
}

#[test]
fn test_custom_config_changes_behavior() {
    let transactions = parse_transactions_csv(snapshot_csv().as_bytes()).unwrap();

    // A narrow one-month window has no earlier months to trend against
    let config = AnalyticsConfig {
        lookback_months: 1,
        ..AnalyticsConfig::default()
    };
    let engine = AnalyticsEngine::with_config(config);
    let patterns = engine.analyze_spending_patterns(&transactions).unwrap();

    assert!(patterns.iter().all(|p| p.sample_size == 1));
    assert!(patterns.iter().all(|p| p.trend == Trend::Stable));
    assert!(patterns.iter().all(|p| p.volatility == 0.0));
}
