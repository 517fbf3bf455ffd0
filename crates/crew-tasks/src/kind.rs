//! Task archetypes offered by the catalog

use crate::inputs::keys;
use crate::prompts::names;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The archetypes of task the catalog can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Research,
    FinancialAnalysis,
    FilingsAnalysis,
    Recommend,
    FibonacciAnalysis,
    AnalyzeSentiment,
    ProvideInvestmentAdvice,
    ForecastDividendGrowth,
    PredictSectorPerformance,
}

impl TaskKind {
    /// Every archetype, in catalog order
    pub const ALL: [TaskKind; 9] = [
        TaskKind::Research,
        TaskKind::FinancialAnalysis,
        TaskKind::FilingsAnalysis,
        TaskKind::Recommend,
        TaskKind::FibonacciAnalysis,
        TaskKind::AnalyzeSentiment,
        TaskKind::ProvideInvestmentAdvice,
        TaskKind::ForecastDividendGrowth,
        TaskKind::PredictSectorPerformance,
    ];

    /// Stable snake_case name
    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Research => "research",
            TaskKind::FinancialAnalysis => "financial_analysis",
            TaskKind::FilingsAnalysis => "filings_analysis",
            TaskKind::Recommend => "recommend",
            TaskKind::FibonacciAnalysis => "fibonacci_analysis",
            TaskKind::AnalyzeSentiment => "analyze_sentiment",
            TaskKind::ProvideInvestmentAdvice => "provide_investment_advice",
            TaskKind::ForecastDividendGrowth => "forecast_dividend_growth",
            TaskKind::PredictSectorPerformance => "predict_sector_performance",
        }
    }

    /// One-line summary for listings
    pub fn summary(self) -> &'static str {
        match self {
            TaskKind::Research => "News and sentiment research brief for a company",
            TaskKind::FinancialAnalysis => "Financial metrics and peer comparison",
            TaskKind::FilingsAnalysis => "10-Q and 10-K filings review",
            TaskKind::Recommend => "Investment recommendation from prior analyses",
            TaskKind::FibonacciAnalysis => "Support and resistance from retracement levels",
            TaskKind::AnalyzeSentiment => "Sentiment scoring of a news payload",
            TaskKind::ProvideInvestmentAdvice => "Buy/hold/sell advice from a sentiment result",
            TaskKind::ForecastDividendGrowth => "Dividend growth forecast from financial statements",
            TaskKind::PredictSectorPerformance => "Sector outlook from reports, policy and macro data",
        }
    }

    /// Agent role the archetype is written for
    pub fn default_agent(self) -> &'static str {
        match self {
            TaskKind::Research => "research_analyst",
            TaskKind::FinancialAnalysis | TaskKind::FibonacciAnalysis => "financial_analyst",
            TaskKind::FilingsAnalysis => "filings_analyst",
            TaskKind::Recommend | TaskKind::ProvideInvestmentAdvice => "investment_advisor",
            TaskKind::AnalyzeSentiment => "sentiment_analyst",
            TaskKind::ForecastDividendGrowth => "dividend_forecaster",
            TaskKind::PredictSectorPerformance => "sector_strategist",
        }
    }

    /// Template rendering the task description
    pub fn description_template(self) -> &'static str {
        match self {
            TaskKind::Research => names::RESEARCH,
            TaskKind::FinancialAnalysis => names::FINANCIAL_ANALYSIS,
            TaskKind::FilingsAnalysis => names::FILINGS_ANALYSIS,
            TaskKind::Recommend => names::RECOMMEND,
            TaskKind::FibonacciAnalysis => names::FIBONACCI_ANALYSIS,
            TaskKind::AnalyzeSentiment => names::ANALYZE_SENTIMENT,
            TaskKind::ProvideInvestmentAdvice => names::INVESTMENT_ADVICE,
            TaskKind::ForecastDividendGrowth => names::DIVIDEND_FORECAST,
            TaskKind::PredictSectorPerformance => names::SECTOR_PERFORMANCE,
        }
    }

    /// Template rendering the expected output
    pub fn expected_output_template(self) -> &'static str {
        match self {
            TaskKind::Research => names::expected::RESEARCH,
            TaskKind::FinancialAnalysis => names::expected::FINANCIAL_ANALYSIS,
            TaskKind::FilingsAnalysis => names::expected::FILINGS_ANALYSIS,
            TaskKind::Recommend => names::expected::RECOMMEND,
            TaskKind::FibonacciAnalysis => names::expected::FIBONACCI_ANALYSIS,
            TaskKind::AnalyzeSentiment => names::expected::ANALYZE_SENTIMENT,
            TaskKind::ProvideInvestmentAdvice => names::expected::INVESTMENT_ADVICE,
            TaskKind::ForecastDividendGrowth => names::expected::DIVIDEND_FORECAST,
            TaskKind::PredictSectorPerformance => names::expected::SECTOR_PERFORMANCE,
        }
    }

    /// Template rendering the auxiliary prompt, for archetypes that carry one
    pub fn prompt_template(self) -> Option<&'static str> {
        match self {
            TaskKind::ForecastDividendGrowth => Some(names::DIVIDEND_FORECAST_PROMPT),
            _ => None,
        }
    }

    /// Keys the archetype's mapping input must contain
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            TaskKind::ForecastDividendGrowth => {
                &[keys::INCOME_STATEMENT, keys::CASH_FLOW_STATEMENT]
            }
            TaskKind::PredictSectorPerformance => &[
                keys::FINANCIAL_REPORTS,
                keys::POLICY_CHANGES,
                keys::MACROECONOMIC_DATA,
            ],
            _ => &[],
        }
    }

    /// Whether the archetype carries the tip section
    pub fn includes_tip(self) -> bool {
        matches!(
            self,
            TaskKind::Research
                | TaskKind::FinancialAnalysis
                | TaskKind::FilingsAnalysis
                | TaskKind::Recommend
        )
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| format!("unknown task kind '{s}'"))
    }
}
