//! Stock analysis task catalog
//!
//! This crate builds the tasks a multi-agent stock analysis crew works
//! through: news research, financial and filings analysis, a final
//! recommendation, Fibonacci retracement analysis, sentiment scoring and
//! advice, dividend growth forecasting and sector performance prediction.
//!
//! Each task is a [`crew_core::Task`] whose text comes from the templates in
//! [`prompts`]. The agent value is passed through untouched, so the crate
//! works with whatever executor type the orchestration engine uses.
//!
//! # Example
//!
//! ```
//! use crew_core::AgentRef;
//! use crew_tasks::{FibonacciLevels, StockAnalysisTasks};
//! use serde_json::json;
//!
//! let tasks = StockAnalysisTasks::new()?;
//!
//! let mut levels = FibonacciLevels::new();
//! levels.insert("23.6%".to_string(), 100.0);
//! levels.insert("38.2%".to_string(), 95.0);
//! let fib = tasks.fibonacci_analysis(AgentRef::new("financial_analyst"), &levels)?;
//! assert!(fib.description().contains("23.6%: 100.0\n38.2%: 95.0"));
//!
//! let data = json!({ "IncomeStatement": "X", "CashFlowStatement": "Y" });
//! let data = crew_tasks::inputs::as_mapping(&data, "financial_data")?;
//! let dividend = tasks.forecast_dividend_growth(AgentRef::new("dividend_forecaster"), data, "Acme")?;
//! assert!(dividend.prompt().is_some_and(|p| p.contains("Acme")));
//! # Ok::<(), crew_tasks::TaskError>(())
//! ```

pub mod config;
pub mod error;
pub mod inputs;
pub mod kind;
pub mod prompts;
pub mod tasks;

// Re-export main types for convenience
pub use config::CatalogConfig;
pub use error::{Result, TaskError};
pub use inputs::{FibonacciLevels, FinancialStatements, SectorInputs};
pub use kind::TaskKind;
pub use tasks::StockAnalysisTasks;
