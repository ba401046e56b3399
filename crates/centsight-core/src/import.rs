//! Snapshot loading for transactions and budgets
//!
//! The engine itself never touches the filesystem; these readers turn CSV or
//! JSON snapshot files from the surrounding application into domain values.
//!
//! Canonical transaction CSV header: `Date,Category,Amount,Type,Merchant`.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Budget, Transaction, TransactionKind};

/// Derive a stable id for an imported row
///
/// Row index is included so two identical purchases on the same day keep
/// distinct ids.
fn generate_id(date: &NaiveDate, category: &str, amount: f64, row: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(date.to_string().as_bytes());
    hasher.update(category.as_bytes());
    hasher.update(amount.to_be_bytes());
    hasher.update(row.to_be_bytes());
    hex::encode(hasher.finalize())
}

/// Parse transactions from canonical CSV
pub fn parse_transactions_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidData(format!("Missing CSV column: {}", name)))
    };
    let date_col = column("Date")?;
    let category_col = column("Category")?;
    let amount_col = column("Amount")?;
    let kind_col = column("Type")?;
    let merchant_col = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("Merchant"));

    let mut transactions = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let date = NaiveDate::parse_from_str(field(date_col), "%Y-%m-%d")
            .map_err(|e| Error::InvalidData(format!("Row {}: bad date: {}", row + 1, e)))?;
        let category = field(category_col).to_string();
        if category.is_empty() {
            return Err(Error::InvalidData(format!("Row {}: empty category", row + 1)));
        }
        let amount: f64 = field(amount_col)
            .parse()
            .map_err(|_| Error::InvalidData(format!("Row {}: bad amount", row + 1)))?;
        let kind = TransactionKind::from_str(field(kind_col))
            .map_err(|e| Error::InvalidData(format!("Row {}: {}", row + 1, e)))?;
        let merchant = merchant_col
            .map(field)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        transactions.push(Transaction {
            id: generate_id(&date, &category, amount, row),
            date,
            amount: amount.abs(),
            category,
            kind,
            merchant,
        });
    }

    debug!(count = transactions.len(), "Parsed transaction CSV");
    Ok(transactions)
}

/// Read transactions from a JSON array
pub fn read_transactions_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;
    Ok(transactions)
}

/// Read budgets from a JSON array, validating the budget invariants
pub fn read_budgets_json<R: Read>(reader: R) -> Result<Vec<Budget>> {
    let budgets: Vec<Budget> = serde_json::from_reader(reader)?;

    let mut seen = std::collections::HashSet::new();
    for budget in &budgets {
        if budget.limit <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Budget {}: limit must be positive",
                budget.category
            )));
        }
        if budget.spent < 0.0 {
            return Err(Error::InvalidData(format!(
                "Budget {}: spent must not be negative",
                budget.category
            )));
        }
        if !seen.insert(budget.category.as_str()) {
            return Err(Error::InvalidData(format!(
                "Duplicate budget category: {}",
                budget.category
            )));
        }
    }

    Ok(budgets)
}

/// Load transactions from a file, dispatching on extension (.csv or .json)
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => parse_transactions_csv(file),
        Some("json") => read_transactions_json(file),
        _ => Err(Error::InvalidData(format!(
            "Unsupported transaction file extension: {}",
            path.display()
        ))),
    }
}

/// Load budgets from a JSON file
pub fn load_budgets(path: &Path) -> Result<Vec<Budget>> {
    read_budgets_json(File::open(path)?)
}
