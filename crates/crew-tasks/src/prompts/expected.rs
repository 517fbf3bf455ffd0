//! Expected output templates
//!
//! The engine compares a finished answer against these to judge completion.

use super::names::expected;
use crew_prompt::{JinjaTemplate, Result};

pub fn research_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::RESEARCH,
        "A comprehensive report summarizing the latest news, market sentiments, and potential \
         impacts on the stock, along with the stock ticker.",
    )
}

pub fn financial_analysis_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::FINANCIAL_ANALYSIS,
        "A detailed report on the stock's financial health, including analysis of key financial \
         metrics and comparison with industry peers.",
    )
}

pub fn filings_analysis_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::FILINGS_ANALYSIS,
        "A comprehensive report summarizing significant findings from 10-Q and 10-K filings, \
         highlighting potential impacts on the stock's performance.",
    )
}

pub fn recommend_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::RECOMMEND,
        "A comprehensive investment recommendation report, including a detailed analysis and \
         clear investment stance, well-formatted for the customer.",
    )
}

pub fn fibonacci_analysis_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::FIBONACCI_ANALYSIS,
        "A comprehensive analysis of Fibonacci retracement levels, including price targets and \
         potential support/resistance zones.",
    )
}

pub fn analyze_sentiment_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::ANALYZE_SENTIMENT,
        "A sentiment score and analysis report on the specified stock or sector.",
    )
}

pub fn provide_investment_advice_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::INVESTMENT_ADVICE,
        "Actionable investment advice based on the sentiment score.",
    )
}

/// Names the company and horizon, unlike the other fixed outputs
pub fn forecast_dividend_growth_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::DIVIDEND_FORECAST,
        "A detailed dividend growth forecast report for {{ company }} for the next {{ years }} \
         years, including risks and assumptions.",
    )
}

pub fn predict_sector_performance_output() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        expected::SECTOR_PERFORMANCE,
        "A detailed report on which sectors are expected to perform well, with a breakdown of \
         the impact of macroeconomic indicators and government policies.",
    )
}
