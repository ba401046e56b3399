//! Analytics configuration
//!
//! Every tunable threshold the engine uses lives here, with defaults that
//! match the shipped behavior. A TOML override file can set any subset of
//! fields; unset fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Thresholds and knobs for the analytics pipeline
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Months of history the pattern analyzer looks back over
    pub lookback_months: u32,
    /// Latest-month / earlier-average ratio above which a trend is increasing
    pub trend_increase_ratio: f64,
    /// Ratio below which a trend is decreasing
    pub trend_decrease_ratio: f64,
    /// Months of history at which forecast confidence reaches 0.5
    pub confidence_pivot_months: f64,
    /// Spend percentage at which a budget gets a near/over-limit warning
    pub warning_percentage: f64,
    /// Spend percentage from which a predicted overrun gets an early warning
    pub early_warning_percentage: f64,
    /// Spent/limit ratio under which a decreasing category is a savings callout
    pub savings_spend_ratio: f64,
    /// Spend percentage under which a sibling counts as a reallocation donor
    pub surplus_percentage: f64,
    /// Volatility/average ratio above which a category counts as volatile
    pub high_volatility_ratio: f64,
    /// Fixed limit increase applied by a reallocation recommendation
    pub reallocation_step: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            lookback_months: 6,
            trend_increase_ratio: 1.10,
            trend_decrease_ratio: 0.90,
            confidence_pivot_months: 2.0,
            warning_percentage: 90.0,
            early_warning_percentage: 60.0,
            savings_spend_ratio: 0.50,
            surplus_percentage: 50.0,
            high_volatility_ratio: 0.25, // flag when std dev > 25% of the mean
            reallocation_step: 500.0,
        }
    }
}

impl AnalyticsConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AnalyticsConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check that the thresholds are mutually consistent
    pub fn validate(&self) -> Result<()> {
        if self.lookback_months == 0 {
            return Err(Error::Config("lookback_months must be at least 1".into()));
        }
        if self.trend_decrease_ratio >= self.trend_increase_ratio {
            return Err(Error::Config(format!(
                "trend_decrease_ratio ({}) must be below trend_increase_ratio ({})",
                self.trend_decrease_ratio, self.trend_increase_ratio
            )));
        }
        if self.early_warning_percentage >= self.warning_percentage {
            return Err(Error::Config(format!(
                "early_warning_percentage ({}) must be below warning_percentage ({})",
                self.early_warning_percentage, self.warning_percentage
            )));
        }
        if !(self.confidence_pivot_months > 0.0) {
            return Err(Error::Config(
                "confidence_pivot_months must be positive".into(),
            ));
        }
        if !(self.reallocation_step > 0.0) {
            return Err(Error::Config("reallocation_step must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyticsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalyticsConfig::from_toml_str("reallocation_step = 250.0").unwrap();
        assert!((config.reallocation_step - 250.0).abs() < f64::EPSILON);
        assert_eq!(config.lookback_months, 6);
        assert!((config.trend_increase_ratio - 1.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_trend_ratios_rejected() {
        let result = AnalyticsConfig::from_toml_str(
            "trend_increase_ratio = 0.8\ntrend_decrease_ratio = 1.2",
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_step_rejected() {
        let result = AnalyticsConfig::from_toml_str("reallocation_step = 0.0");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lookback_months = 12\nwarning_percentage = 85.0").unwrap();

        let config = AnalyticsConfig::load(file.path()).unwrap();
        assert_eq!(config.lookback_months, 12);
        assert!((config.warning_percentage - 85.0).abs() < f64::EPSILON);
    }
}
