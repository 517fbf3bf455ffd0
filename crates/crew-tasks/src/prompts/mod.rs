//! Stock analysis prompt templates
//!
//! Templates are organized into:
//! - `description`: task instructions and the auxiliary dividend prompt
//! - `expected`: descriptions of the output that completes each task

mod description;
mod expected;

pub use description::*;
pub use expected::*;

use crew_prompt::{PromptRegistry, Result};

/// Registered template names
pub mod names {
    pub const RESEARCH: &str = "stock.research";
    pub const FINANCIAL_ANALYSIS: &str = "stock.financial_analysis";
    pub const FILINGS_ANALYSIS: &str = "stock.filings_analysis";
    pub const RECOMMEND: &str = "stock.recommend";
    pub const FIBONACCI_ANALYSIS: &str = "stock.fibonacci_analysis";
    pub const FIBONACCI_REPORT: &str = "stock.fibonacci_analysis.report";
    pub const ANALYZE_SENTIMENT: &str = "stock.analyze_sentiment";
    pub const INVESTMENT_ADVICE: &str = "stock.provide_investment_advice";
    pub const DIVIDEND_FORECAST: &str = "stock.forecast_dividend_growth";
    pub const DIVIDEND_FORECAST_PROMPT: &str = "stock.forecast_dividend_growth.prompt";
    pub const SECTOR_PERFORMANCE: &str = "stock.predict_sector_performance";

    /// Expected output templates
    pub mod expected {
        pub const RESEARCH: &str = "stock.expected.research";
        pub const FINANCIAL_ANALYSIS: &str = "stock.expected.financial_analysis";
        pub const FILINGS_ANALYSIS: &str = "stock.expected.filings_analysis";
        pub const RECOMMEND: &str = "stock.expected.recommend";
        pub const FIBONACCI_ANALYSIS: &str = "stock.expected.fibonacci_analysis";
        pub const ANALYZE_SENTIMENT: &str = "stock.expected.analyze_sentiment";
        pub const INVESTMENT_ADVICE: &str = "stock.expected.provide_investment_advice";
        pub const DIVIDEND_FORECAST: &str = "stock.expected.forecast_dividend_growth";
        pub const SECTOR_PERFORMANCE: &str = "stock.expected.predict_sector_performance";
    }
}

/// Register all stock analysis templates with the given registry
///
/// Fails if any of the names is already taken.
pub fn register_prompts(registry: &mut PromptRegistry) -> Result<()> {
    // Task descriptions
    registry.register(research()?)?;
    registry.register(financial_analysis()?)?;
    registry.register(filings_analysis()?)?;
    registry.register(recommend()?)?;
    registry.register(fibonacci_analysis()?)?;
    registry.register(fibonacci_report()?)?;
    registry.register(analyze_sentiment()?)?;
    registry.register(provide_investment_advice()?)?;
    registry.register(forecast_dividend_growth()?)?;
    registry.register(forecast_dividend_growth_prompt()?)?;
    registry.register(predict_sector_performance()?)?;

    // Expected outputs
    registry.register(research_output()?)?;
    registry.register(financial_analysis_output()?)?;
    registry.register(filings_analysis_output()?)?;
    registry.register(recommend_output()?)?;
    registry.register(fibonacci_analysis_output()?)?;
    registry.register(analyze_sentiment_output()?)?;
    registry.register(provide_investment_advice_output()?)?;
    registry.register(forecast_dividend_growth_output()?)?;
    registry.register(predict_sector_performance_output()?)?;

    Ok(())
}
