//! Spending pattern analysis
//!
//! Derives per-category historical statistics from raw transactions:
//! monthly average, volatility, and a coarse trend classification.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::{Error, Result};
use crate::models::{SpendingPattern, Transaction, Trend};

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Months elapsed since the epoch, for window arithmetic
    fn index(&self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Derive per-category spending patterns over the trailing `lookback_months`
///
/// The window is anchored at the most recent expense month present in the
/// data and clipped to what is available. Categories with no expenses inside
/// the window are omitted entirely; absence, not a zero-valued entry, is the
/// "no data" signal. The result does not depend on transaction order.
pub fn analyze_spending_patterns(
    transactions: &[Transaction],
    lookback_months: u32,
    config: &AnalyticsConfig,
) -> Result<Vec<SpendingPattern>> {
    if lookback_months == 0 {
        return Err(Error::InvalidArgument(
            "lookback_months must be at least 1".into(),
        ));
    }

    // Anchor the trailing window at the latest expense month
    let anchor = match transactions
        .iter()
        .filter(|tx| tx.is_expense())
        .map(|tx| MonthKey::from_date(tx.date))
        .max()
    {
        Some(anchor) => anchor,
        None => return Ok(Vec::new()),
    };

    // category -> month -> total; ordered maps keep the result deterministic
    // regardless of input order
    let mut by_category: BTreeMap<&str, BTreeMap<MonthKey, f64>> = BTreeMap::new();
    for tx in transactions {
        if !tx.is_expense() {
            continue;
        }
        let month = MonthKey::from_date(tx.date);
        let offset = anchor.index() - month.index();
        if offset < 0 || offset >= lookback_months as i32 {
            continue;
        }
        *by_category
            .entry(tx.category.as_str())
            .or_default()
            .entry(month)
            .or_insert(0.0) += tx.amount.abs();
    }

    let mut patterns = Vec::with_capacity(by_category.len());
    for (category, months) in &by_category {
        let totals: Vec<f64> = months.values().copied().collect();
        let sample_size = totals.len();

        let average_monthly = totals.iter().sum::<f64>() / sample_size as f64;
        let volatility = if sample_size < 2 {
            0.0
        } else {
            let variance = totals
                .iter()
                .map(|t| (t - average_monthly).powi(2))
                .sum::<f64>()
                / sample_size as f64;
            variance.sqrt()
        };

        // Latest month against the average of the earlier months
        let trend = classify_trend(&totals, config);

        patterns.push(SpendingPattern {
            category: category.to_string(),
            average_monthly,
            trend,
            volatility,
            sample_size,
        });
    }

    debug!(
        categories = patterns.len(),
        anchor = %anchor,
        lookback = lookback_months,
        "Spending pattern analysis complete"
    );

    Ok(patterns)
}

/// Classify the trend of chronologically ordered per-month totals
fn classify_trend(totals: &[f64], config: &AnalyticsConfig) -> Trend {
    let (latest, earlier) = match totals.split_last() {
        Some((latest, earlier)) if !earlier.is_empty() => (*latest, earlier),
        _ => return Trend::Stable, // one month gives nothing to compare against
    };

    let earlier_avg = earlier.iter().sum::<f64>() / earlier.len() as f64;
    if earlier_avg <= f64::EPSILON {
        return Trend::Stable;
    }

    let ratio = latest / earlier_avg;
    if ratio > config.trend_increase_ratio {
        Trend::Increasing
    } else if ratio < config.trend_decrease_ratio {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}
