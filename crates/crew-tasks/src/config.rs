//! Configuration for the stock analysis task catalog

use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};

/// Default motivational line appended to the long-form analysis tasks
pub const DEFAULT_TIP: &str = "If you do your BEST WORK, I'll give you a $10,000 commission!";

/// Environment variable that toggles the tip section
pub const ENV_INCLUDE_TIP: &str = "STOCK_CREW_INCLUDE_TIP";
/// Environment variable that replaces the tip text
pub const ENV_TIP: &str = "STOCK_CREW_TIP";
/// Environment variable for the dividend forecast horizon
pub const ENV_FORECAST_YEARS: &str = "STOCK_CREW_FORECAST_YEARS";

/// Configuration for the task catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Whether research, financial, filings and recommendation tasks carry the tip
    pub include_tip: bool,

    /// Tip text
    pub tip: String,

    /// Dividend forecast horizon in years
    pub forecast_years: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_tip: true,
            tip: DEFAULT_TIP.to_string(),
            forecast_years: 5,
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration builder
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.forecast_years == 0 {
            return Err(TaskError::Config(
                "forecast_years must be greater than 0".to_string(),
            ));
        }

        if self.include_tip && self.tip.trim().is_empty() {
            return Err(TaskError::Config(
                "tip must not be empty when include_tip is set".to_string(),
            ));
        }

        Ok(())
    }

    /// The tip text to interpolate, empty when the tip is disabled
    pub fn tip_section(&self) -> &str {
        if self.include_tip { self.tip.as_str() } else { "" }
    }
}

/// Builder for CatalogConfig
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    include_tip: Option<bool>,
    tip: Option<String>,
    forecast_years: Option<u32>,
    env_error: Option<String>,
}

impl CatalogConfigBuilder {
    /// Enable or disable the tip section
    pub fn include_tip(mut self, include: bool) -> Self {
        self.include_tip = Some(include);
        self
    }

    /// Set the tip text
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    /// Set the dividend forecast horizon
    pub fn forecast_years(mut self, years: u32) -> Self {
        self.forecast_years = Some(years);
        self
    }

    /// Apply overrides from the process environment
    ///
    /// Values that fail to parse surface as a configuration error from
    /// [`CatalogConfigBuilder::build`].
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_INCLUDE_TIP) {
            match parse_bool(&raw) {
                Some(include) => self.include_tip = Some(include),
                None => {
                    self.env_error =
                        Some(format!("{ENV_INCLUDE_TIP} must be a boolean, got '{raw}'"));
                }
            }
        }

        if let Some(tip) = lookup(ENV_TIP) {
            self.tip = Some(tip);
        }

        if let Some(raw) = lookup(ENV_FORECAST_YEARS) {
            match raw.trim().parse::<u32>() {
                Ok(years) => self.forecast_years = Some(years),
                Err(e) => {
                    self.env_error = Some(format!("{ENV_FORECAST_YEARS} is invalid: {e}"));
                }
            }
        }

        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CatalogConfig> {
        if let Some(err) = self.env_error {
            return Err(TaskError::Config(err));
        }

        let defaults = CatalogConfig::default();

        let config = CatalogConfig {
            include_tip: self.include_tip.unwrap_or(defaults.include_tip),
            tip: self.tip.unwrap_or(defaults.tip),
            forecast_years: self.forecast_years.unwrap_or(defaults.forecast_years),
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
