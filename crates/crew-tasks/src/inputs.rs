//! Caller-supplied task inputs
//!
//! Mapping inputs arrive as JSON objects keyed by statement or report name.
//! The helpers here pull the required entries out and turn them into prompt
//! text, failing with [`TaskError::MissingKey`] when an entry is absent.

use crate::error::{Result, TaskError};
use crew_prompt::render_value;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Mapping keys the catalog looks up
pub mod keys {
    /// Income statement entry of the dividend forecast input
    pub const INCOME_STATEMENT: &str = "IncomeStatement";
    /// Cash flow statement entry of the dividend forecast input
    pub const CASH_FLOW_STATEMENT: &str = "CashFlowStatement";
    /// Financial reports entry of the sector prediction input
    pub const FINANCIAL_REPORTS: &str = "FinancialReports";
    /// Government policy changes entry of the sector prediction input
    pub const POLICY_CHANGES: &str = "PolicyChanges";
    /// Macroeconomic indicators entry of the sector prediction input
    pub const MACROECONOMIC_DATA: &str = "MacroeconomicData";
}

/// Fibonacci retracement levels, label to price, in display order
pub type FibonacciLevels = IndexMap<String, f64>;

/// Look up a required entry of a mapping input
pub fn require<'a>(
    map: &'a Map<String, Value>,
    key: &'static str,
    mapping: &'static str,
) -> Result<&'a Value> {
    map.get(key).ok_or(TaskError::MissingKey { key, mapping })
}

/// View a JSON value as a mapping input
pub fn as_mapping<'a>(value: &'a Value, mapping: &'static str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or(TaskError::NotAMapping(mapping))
}

/// Serialize any caller value and render it as prompt text
pub fn to_prompt_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(render_value(&value))
}

/// Statements backing a dividend growth forecast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialStatements {
    pub income_statement: String,
    pub cash_flow_statement: String,
}

impl FinancialStatements {
    /// Extract both statements from a `financial_data` mapping
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        const MAPPING: &str = "financial_data";
        Ok(Self {
            income_statement: render_value(require(map, keys::INCOME_STATEMENT, MAPPING)?),
            cash_flow_statement: render_value(require(map, keys::CASH_FLOW_STATEMENT, MAPPING)?),
        })
    }
}

/// Inputs backing a sector performance prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorInputs {
    pub financial_reports: String,
    pub policy_changes: String,
    pub macroeconomic_data: String,
}

impl SectorInputs {
    /// Extract the three inputs from a `combined_data` mapping
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        const MAPPING: &str = "combined_data";
        Ok(Self {
            financial_reports: render_value(require(map, keys::FINANCIAL_REPORTS, MAPPING)?),
            policy_changes: render_value(require(map, keys::POLICY_CHANGES, MAPPING)?),
            macroeconomic_data: render_value(require(map, keys::MACROECONOMIC_DATA, MAPPING)?),
        })
    }
}

/// Format a retracement value the way a decimal literal reads
///
/// Whole numbers keep one fractional digit so `100` reads as a price, not a
/// count. Magnitudes below `1e-4` or from `1e16` up switch to exponent
/// notation with a signed, two-digit exponent (`1e+16`, `1e-05`).
pub fn format_level(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}inf");
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        exponent_form(value)
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Template context for the levels of a Fibonacci report, in insertion order
pub fn levels_context(levels: &FibonacciLevels) -> Value {
    levels
        .iter()
        .map(|(label, value)| {
            serde_json::json!({
                "label": label,
                "value": format_level(*value),
            })
        })
        .collect()
}
