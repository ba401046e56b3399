//! Budget allocation suggestions
//!
//! Splits a monthly income into suggested per-category limits, either from
//! the caller's historical expense mix or, with no usable history, from a
//! fixed needs/wants/savings-style default split.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Default split used when no categorized expense history exists.
/// Weights sum to 1.0.
const DEFAULT_ALLOCATION: &[(&str, f64)] = &[
    ("Housing", 0.30),
    ("Food", 0.15),
    ("Transport", 0.10),
    ("Utilities", 0.10),
    ("Healthcare", 0.05),
    ("Entertainment", 0.05),
    ("Shopping", 0.05),
    ("Savings", 0.20),
];

/// Suggest per-category budget limits for a monthly income
///
/// With expense history, each category's suggested limit is its share of
/// total historical spend applied to the income. Without history, the fixed
/// default split is returned. Either way the suggestions are non-negative,
/// individually capped at the income, and sum to at most the income.
pub fn suggest_budget_allocation(
    transactions: &[Transaction],
    monthly_income: f64,
) -> Result<BTreeMap<String, f64>> {
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "monthly_income must be positive, got {}",
            monthly_income
        )));
    }

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for tx in transactions {
        if !tx.is_expense() || tx.category.is_empty() {
            continue;
        }
        *totals.entry(tx.category.as_str()).or_insert(0.0) += tx.amount.abs();
    }
    let grand_total: f64 = totals.values().sum();

    if grand_total <= 0.0 {
        debug!(income = monthly_income, "No expense history, using default allocation");
        return Ok(DEFAULT_ALLOCATION
            .iter()
            .map(|(category, weight)| (category.to_string(), monthly_income * weight))
            .collect());
    }

    let allocation = totals
        .iter()
        .map(|(category, total)| {
            let suggested = (monthly_income * total / grand_total)
                .max(0.0)
                .min(monthly_income);
            (category.to_string(), suggested)
        })
        .collect();

    debug!(
        income = monthly_income,
        categories = totals.len(),
        "Allocation derived from expense history"
    );

    Ok(allocation)
}
