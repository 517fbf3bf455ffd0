//! Task description templates

use super::names;
use crew_prompt::{JinjaTemplate, Result};

/// Research brief: latest news, sentiment and upcoming events for a company
pub fn research() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::RESEARCH,
        r"Collect and summarize recent news articles, press
releases, and market analyses related to the stock and
its industry.
Pay special attention to any significant events, market
sentiments, and analysts' opinions. Also include upcoming
events like earnings and others.

Your final answer MUST be a report that includes a
comprehensive summary of the latest news, any notable
shifts in market sentiment, and potential impacts on
the stock.
Also make sure to return the stock ticker.

{{ tip }}

Make sure to use the most recent data as possible.

Selected company by the customer: {{ company }}",
    )
}

/// Financial health and peer comparison
pub fn financial_analysis() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::FINANCIAL_ANALYSIS,
        r"Conduct a thorough analysis of the stock's financial
health and market performance.
This includes examining key financial metrics such as
P/E ratio, EPS growth, revenue trends, and
debt-to-equity ratio.
Also, analyze the stock's performance in comparison
to its industry peers and overall market trends.

Your final report MUST expand on the summary provided
but now including a clear assessment of the stock's
financial standing, its strengths and weaknesses,
and how it fares against its competitors in the current
market scenario.

{{ tip }}

Make sure to use the most recent data possible.",
    )
}

/// 10-Q and 10-K filings review
pub fn filings_analysis() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::FILINGS_ANALYSIS,
        r"Analyze the latest 10-Q and 10-K filings from EDGAR for
the stock in question.
Focus on key sections like Management's Discussion and
Analysis, financial statements, insider trading activity,
and any disclosed risks.
Extract relevant data and insights that could influence
the stock's future performance.

Your final answer must be an expanded report that now
also highlights significant findings from these filings,
including any red flags or positive indicators for
your customer.

{{ tip }}",
    )
}

/// Synthesis of the research, financial and filings analyses
pub fn recommend() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::RECOMMEND,
        r"Review and synthesize the analyses provided by the
Financial Analyst and the Research Analyst.
Combine these insights to form a comprehensive
investment recommendation.

You MUST Consider all aspects, including financial
health, market sentiment, and qualitative data from
EDGAR filings.

Make sure to include a section that shows insider
trading activity, and upcoming events like earnings.

Your final answer MUST be a recommendation for your
customer. It should be a full super detailed report, providing a
clear investment stance and strategy with supporting evidence.
Make it pretty and well formatted for your customer.

{{ tip }}",
    )
}

/// Fibonacci retracement analysis around a rendered levels report
pub fn fibonacci_analysis() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::FIBONACCI_ANALYSIS,
        r"Analyze the following Fibonacci retracement levels for the selected stock.
Pay attention to potential support and resistance levels based on these Fibonacci levels.
Use these levels to assess the stock's future price movements.

The Fibonacci retracement levels are as follows:

{{ report }}

Your final answer MUST be a comprehensive analysis of these levels,
including potential price targets, support/resistance zones, and
any other important considerations.

Make sure to use the most recent stock data available.",
    )
}

/// One `label: value` line per retracement level
pub fn fibonacci_report() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::FIBONACCI_REPORT,
        "Fibonacci Analysis Report:\nRetracement Levels:\n\
         {% for level in levels %}{{ level.label }}: {{ level.value }}\n{% endfor %}",
    )
}

pub fn analyze_sentiment() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::ANALYZE_SENTIMENT,
        r"Perform sentiment analysis on the latest financial news related to {{ news_data }}.
Derive sentiment scores based on the emotional tone and market reaction.",
    )
}

pub fn provide_investment_advice() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::INVESTMENT_ADVICE,
        r"Based on the sentiment analysis for {{ sentiment_data }}, provide actionable investment advice.
Formulate clear buy/hold/sell recommendations depending on the sentiment's market impact.",
    )
}

/// Short dividend forecast instruction; the statements travel in the prompt
pub fn forecast_dividend_growth() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::DIVIDEND_FORECAST,
        r"Analyze {{ company }}'s income statement and cash flow statement
to forecast dividend growth. Focus on earnings, cash flow,
and past dividend payout history.",
    )
}

/// Detailed dividend forecast prompt embedding both statements
pub fn forecast_dividend_growth_prompt() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::DIVIDEND_FORECAST_PROMPT,
        r"You are analyzing the financial data for {{ company }}.

The following financial data is provided:

Income Statement:
{{ income_statement }}

Cash Flow Statement:
{{ cash_flow_statement }}

Based on {{ company }}'s earnings, cash flow, and dividend payout history,
forecast the potential dividend growth for the next {{ years }} years.
Please include a detailed explanation of your analysis and any
potential risks or assumptions made in the forecast.",
    )
}

pub fn predict_sector_performance() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        names::SECTOR_PERFORMANCE,
        r"Based on the provided macroeconomic data, financial reports, and recent government policy changes,
analyze the information and predict which sectors are likely to perform well in the upcoming quarters.

Your analysis should take into account macroeconomic factors such as GDP growth, inflation rates, and unemployment rates,
along with the effect of new government policies on different sectors of the economy.

Ensure that your final report includes a detailed breakdown of your predictions and the reasoning behind your analysis.

Financial Reports: {{ financial_reports }}
Policy Changes: {{ policy_changes }}
Macroeconomic Data: {{ macroeconomic_data }}",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_prompt::PromptTemplate;
    use serde_json::json;

    #[test]
    fn test_research_render() {
        let text = research()
            .unwrap()
            .render(&json!({ "company": "ACME", "tip": "Tip!" }))
            .unwrap();

        assert!(text.ends_with("Selected company by the customer: ACME"));
        assert!(text.contains("\n\nTip!\n\n"));
    }

    #[test]
    fn test_research_requires_company() {
        let result = research().unwrap().render(&json!({ "tip": "" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_fibonacci_report_render() {
        let text = fibonacci_report()
            .unwrap()
            .render(&json!({
                "levels": [
                    { "label": "23.6%", "value": "100.0" },
                    { "label": "38.2%", "value": "95.0" }
                ]
            }))
            .unwrap();

        assert_eq!(
            text,
            "Fibonacci Analysis Report:\nRetracement Levels:\n23.6%: 100.0\n38.2%: 95.0\n"
        );
    }

    #[test]
    fn test_fibonacci_report_without_levels() {
        let text = fibonacci_report()
            .unwrap()
            .render(&json!({ "levels": [] }))
            .unwrap();
        assert_eq!(text, "Fibonacci Analysis Report:\nRetracement Levels:\n");
    }

    #[test]
    fn test_dividend_prompt_render() {
        let text = forecast_dividend_growth_prompt()
            .unwrap()
            .render(&json!({
                "company": "Acme",
                "income_statement": "Net income 2B",
                "cash_flow_statement": "FCF 1B",
                "years": 5
            }))
            .unwrap();

        assert!(text.starts_with("You are analyzing the financial data for Acme."));
        assert!(text.contains("Income Statement:\nNet income 2B\n"));
        assert!(text.contains("Cash Flow Statement:\nFCF 1B\n"));
        assert!(text.contains("for the next 5 years"));
    }

    #[test]
    fn test_sector_render() {
        let text = predict_sector_performance()
            .unwrap()
            .render(&json!({
                "financial_reports": "A",
                "policy_changes": "B",
                "macroeconomic_data": "C"
            }))
            .unwrap();

        assert!(text.contains("Financial Reports: A\nPolicy Changes: B\nMacroeconomic Data: C"));
    }
}
