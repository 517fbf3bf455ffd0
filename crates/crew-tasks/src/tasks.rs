//! The stock analysis task catalog

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::inputs::{
    FibonacciLevels, FinancialStatements, SectorInputs, levels_context, to_prompt_text,
};
use crate::kind::TaskKind;
use crate::prompts::{names, register_prompts};
use crew_core::Task;
use crew_prompt::PromptRegistry;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Factory for stock analysis tasks
///
/// Every operation renders the archetype's templates and wraps the text,
/// together with the caller's agent, into a [`Task`]. Operations are pure:
/// the same inputs always produce the same text.
///
/// `financial_analysis`, `filings_analysis` and `recommend` take no data.
/// They build on the output of earlier tasks, which the execution engine
/// passes along in its own context.
///
/// # Example
///
/// ```
/// use crew_core::AgentRef;
/// use crew_tasks::StockAnalysisTasks;
///
/// let tasks = StockAnalysisTasks::new()?;
/// let task = tasks.research(AgentRef::new("research_analyst"), "ACME Corp")?;
///
/// assert!(task.description().contains("ACME Corp"));
/// # Ok::<(), crew_tasks::TaskError>(())
/// ```
#[derive(Debug)]
pub struct StockAnalysisTasks {
    registry: PromptRegistry,
    config: CatalogConfig,
}

impl StockAnalysisTasks {
    /// Create a catalog with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a catalog with the given configuration
    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = PromptRegistry::new();
        register_prompts(&mut registry)?;

        Ok(Self { registry, config })
    }

    /// Get the catalog configuration
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Get the registry holding the catalog's templates
    pub fn registry(&self) -> &PromptRegistry {
        &self.registry
    }

    /// Research brief covering news, sentiment and upcoming events for `company`
    pub fn research<A>(&self, agent: A, company: &str) -> Result<Task<A>> {
        debug!(kind = %TaskKind::Research, company, "Building task");
        self.build(
            TaskKind::Research,
            agent,
            json!({ "company": company }),
        )
    }

    /// Financial health analysis of the stock researched earlier
    pub fn financial_analysis<A>(&self, agent: A) -> Result<Task<A>> {
        debug!(kind = %TaskKind::FinancialAnalysis, "Building task");
        self.build(TaskKind::FinancialAnalysis, agent, json!({}))
    }

    /// EDGAR 10-Q and 10-K filings analysis
    pub fn filings_analysis<A>(&self, agent: A) -> Result<Task<A>> {
        debug!(kind = %TaskKind::FilingsAnalysis, "Building task");
        self.build(TaskKind::FilingsAnalysis, agent, json!({}))
    }

    /// Investment recommendation synthesized from the earlier analyses
    pub fn recommend<A>(&self, agent: A) -> Result<Task<A>> {
        debug!(kind = %TaskKind::Recommend, "Building task");
        self.build(TaskKind::Recommend, agent, json!({}))
    }

    /// Analysis of Fibonacci retracement levels, listed in insertion order
    pub fn fibonacci_analysis<A>(
        &self,
        agent: A,
        fibonacci_levels: &FibonacciLevels,
    ) -> Result<Task<A>> {
        debug!(
            kind = %TaskKind::FibonacciAnalysis,
            levels = fibonacci_levels.len(),
            "Building task"
        );

        let report = self.registry.render(
            names::FIBONACCI_REPORT,
            &json!({ "levels": levels_context(fibonacci_levels) }),
        )?;

        self.build(TaskKind::FibonacciAnalysis, agent, json!({ "report": report }))
    }

    /// Sentiment analysis of an arbitrary news payload
    pub fn analyze_sentiment<A, T>(&self, agent: A, news_data: &T) -> Result<Task<A>>
    where
        T: Serialize + ?Sized,
    {
        let news_data = to_prompt_text(news_data)?;
        debug!(kind = %TaskKind::AnalyzeSentiment, len = news_data.len(), "Building task");
        self.build(
            TaskKind::AnalyzeSentiment,
            agent,
            json!({ "news_data": news_data }),
        )
    }

    /// Buy/hold/sell advice derived from a sentiment result
    pub fn provide_investment_advice<A, T>(&self, agent: A, sentiment_data: &T) -> Result<Task<A>>
    where
        T: Serialize + ?Sized,
    {
        let sentiment_data = to_prompt_text(sentiment_data)?;
        debug!(
            kind = %TaskKind::ProvideInvestmentAdvice,
            len = sentiment_data.len(),
            "Building task"
        );
        self.build(
            TaskKind::ProvideInvestmentAdvice,
            agent,
            json!({ "sentiment_data": sentiment_data }),
        )
    }

    /// Dividend growth forecast for `company`
    ///
    /// `financial_data` must contain `IncomeStatement` and `CashFlowStatement`.
    /// Both statements are embedded in the task's prompt.
    pub fn forecast_dividend_growth<A>(
        &self,
        agent: A,
        financial_data: &Map<String, Value>,
        company: &str,
    ) -> Result<Task<A>> {
        let statements = FinancialStatements::from_map(financial_data)?;
        debug!(kind = %TaskKind::ForecastDividendGrowth, company, "Building task");

        let vars = json!({
            "company": company,
            "income_statement": statements.income_statement,
            "cash_flow_statement": statements.cash_flow_statement,
            "years": self.config.forecast_years,
        });

        self.build(TaskKind::ForecastDividendGrowth, agent, vars)
    }

    /// Prediction of which sectors will outperform
    ///
    /// `combined_data` must contain `FinancialReports`, `PolicyChanges` and
    /// `MacroeconomicData`.
    pub fn predict_sector_performance<A>(
        &self,
        agent: A,
        combined_data: &Map<String, Value>,
    ) -> Result<Task<A>> {
        let inputs = SectorInputs::from_map(combined_data)?;
        debug!(kind = %TaskKind::PredictSectorPerformance, "Building task");

        self.build(
            TaskKind::PredictSectorPerformance,
            agent,
            json!({
                "financial_reports": inputs.financial_reports,
                "policy_changes": inputs.policy_changes,
                "macroeconomic_data": inputs.macroeconomic_data,
            }),
        )
    }

    /// Placeholder for a news lookup
    ///
    /// Returns a sentence naming the subject; no request is made.
    pub fn fetch_news(&self, stock_or_sector: &str) -> String {
        format!("Fetching the latest news related to {stock_or_sector}.")
    }

    /// Render the archetype's templates into a task
    ///
    /// The tip is added to `vars` for archetypes that carry it, and the
    /// auxiliary prompt is rendered for archetypes that have one.
    fn build<A>(&self, kind: TaskKind, agent: A, mut vars: Value) -> Result<Task<A>> {
        if kind.includes_tip() {
            if let Some(map) = vars.as_object_mut() {
                map.insert("tip".to_string(), Value::from(self.config.tip_section()));
            }
        }

        let description = self.registry.render(kind.description_template(), &vars)?;
        let expected_output = self.registry.render(kind.expected_output_template(), &vars)?;
        let task = Task::new(description, agent, expected_output)?;

        match kind.prompt_template() {
            Some(name) => Ok(task.with_prompt(self.registry.render(name, &vars)?)?),
            None => Ok(task),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskError;
    use crate::config::DEFAULT_TIP;
    use crew_core::AgentRef;

    fn catalog() -> StockAnalysisTasks {
        StockAnalysisTasks::new().unwrap()
    }

    fn agent() -> AgentRef {
        AgentRef::new("analyst")
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_research_contains_company() {
        let catalog = catalog();
        for company in ["Acme", "Berkshire Hathaway Inc.", "株式会社", "A&B <Holdings>"] {
            let task = catalog.research(agent(), company).unwrap();
            assert!(task.description().contains(company));
            assert!(!task.expected_output().is_empty());
            assert!(task.prompt().is_none());
        }
    }

    #[test]
    fn test_tip_section() {
        let task = catalog().recommend(agent()).unwrap();
        assert!(task.description().contains(DEFAULT_TIP));

        let config = CatalogConfig::builder().include_tip(false).build().unwrap();
        let quiet = StockAnalysisTasks::with_config(config).unwrap();
        for task in [
            quiet.research(agent(), "Acme").unwrap(),
            quiet.financial_analysis(agent()).unwrap(),
            quiet.filings_analysis(agent()).unwrap(),
            quiet.recommend(agent()).unwrap(),
        ] {
            assert!(!task.description().contains("commission"));
        }
    }

    fn build_every_kind(catalog: &StockAnalysisTasks) -> Vec<(TaskKind, Task<AgentRef>)> {
        let mut levels = FibonacciLevels::new();
        levels.insert("23.6%".to_string(), 100.0);
        let financial = object(json!({ "IncomeStatement": "X", "CashFlowStatement": "Y" }));
        let combined = object(json!({
            "FinancialReports": "A",
            "PolicyChanges": "B",
            "MacroeconomicData": "C"
        }));

        TaskKind::ALL
            .into_iter()
            .map(|kind| {
                let task = match kind {
                    TaskKind::Research => catalog.research(agent(), "Acme"),
                    TaskKind::FinancialAnalysis => catalog.financial_analysis(agent()),
                    TaskKind::FilingsAnalysis => catalog.filings_analysis(agent()),
                    TaskKind::Recommend => catalog.recommend(agent()),
                    TaskKind::FibonacciAnalysis => catalog.fibonacci_analysis(agent(), &levels),
                    TaskKind::AnalyzeSentiment => catalog.analyze_sentiment(agent(), "news"),
                    TaskKind::ProvideInvestmentAdvice => {
                        catalog.provide_investment_advice(agent(), "positive")
                    }
                    TaskKind::ForecastDividendGrowth => {
                        catalog.forecast_dividend_growth(agent(), &financial, "Acme")
                    }
                    TaskKind::PredictSectorPerformance => {
                        catalog.predict_sector_performance(agent(), &combined)
                    }
                };
                (kind, task.unwrap())
            })
            .collect()
    }

    #[test]
    fn test_tip_follows_kind() {
        for (kind, task) in build_every_kind(&catalog()) {
            assert_eq!(
                task.description().contains(DEFAULT_TIP),
                kind.includes_tip(),
                "{kind}"
            );
        }
    }

    #[test]
    fn test_prompt_follows_kind() {
        let catalog = catalog();
        for (kind, task) in build_every_kind(&catalog) {
            assert_eq!(task.prompt().is_some(), kind.prompt_template().is_some(), "{kind}");
        }
    }

    #[test]
    fn test_context_only_tasks() {
        let catalog = catalog();

        let financial = catalog.financial_analysis(agent()).unwrap();
        assert!(financial.description().contains("P/E ratio"));
        assert!(financial.expected_output().contains("industry peers"));

        let filings = catalog.filings_analysis(agent()).unwrap();
        assert!(filings.description().contains("10-Q and 10-K"));

        let recommendation = catalog.recommend(agent()).unwrap();
        assert!(recommendation.description().contains("insider"));
    }

    #[test]
    fn test_fibonacci_levels_in_order() {
        let mut levels = FibonacciLevels::new();
        levels.insert("23.6%".to_string(), 100.0);
        levels.insert("38.2%".to_string(), 95.0);

        let task = catalog().fibonacci_analysis(agent(), &levels).unwrap();
        let description = task.description();

        assert!(description.contains("23.6%: 100.0\n38.2%: 95.0\n"));
        let first = description.find("23.6%: 100.0").unwrap();
        let second = description.find("38.2%: 95.0").unwrap();
        assert!(first < second);
        assert!(description.contains("Fibonacci Analysis Report:\nRetracement Levels:\n"));
    }

    #[test]
    fn test_fibonacci_insertion_order_not_sorted() {
        let mut levels = FibonacciLevels::new();
        levels.insert("61.8%".to_string(), 80.5);
        levels.insert("0%".to_string(), 120.0);

        let task = catalog().fibonacci_analysis(agent(), &levels).unwrap();
        let description = task.description();
        assert!(description.find("61.8%: 80.5").unwrap() < description.find("0%: 120.0").unwrap());
    }

    #[test]
    fn test_analyze_sentiment_embeds_payload() {
        let catalog = catalog();

        let task = catalog.analyze_sentiment(agent(), "semiconductors").unwrap();
        assert!(task.description().contains("related to semiconductors."));

        let payload = json!({ "headline": "Chip demand surges" });
        let task = catalog.analyze_sentiment(agent(), &payload).unwrap();
        assert!(task.description().contains(r#"{"headline":"Chip demand surges"}"#));
    }

    #[test]
    fn test_unrenderable_payload_is_error() {
        use std::collections::HashMap;

        // Non-string map keys cannot become JSON
        let payload: HashMap<Vec<u8>, u8> = HashMap::from([(vec![1], 1)]);
        let result = catalog().analyze_sentiment(agent(), &payload);
        assert!(matches!(result, Err(TaskError::Serialization(_))));
    }

    #[test]
    fn test_investment_advice() {
        let task = catalog()
            .provide_investment_advice(agent(), &json!(0.72))
            .unwrap();
        assert!(task.description().contains("sentiment analysis for 0.72,"));
        assert!(task.description().contains("buy/hold/sell"));
    }

    #[test]
    fn test_dividend_forecast_prompt() {
        let data = object(json!({ "IncomeStatement": "X", "CashFlowStatement": "Y" }));
        let task = catalog()
            .forecast_dividend_growth(agent(), &data, "Acme")
            .unwrap();

        let prompt = task.prompt().unwrap();
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("Income Statement:\nX"));
        assert!(prompt.contains("Cash Flow Statement:\nY"));
        assert!(task.description().contains("Acme's income statement"));
        assert!(task.expected_output().contains("for Acme for the next 5 years"));
    }

    #[test]
    fn test_dividend_forecast_missing_key() {
        let data = object(json!({ "IncomeStatement": "X" }));
        let result = catalog().forecast_dividend_growth(agent(), &data, "Acme");

        assert!(matches!(
            result,
            Err(TaskError::MissingKey {
                key: "CashFlowStatement",
                mapping: "financial_data"
            })
        ));
    }

    #[test]
    fn test_dividend_forecast_horizon() {
        let config = CatalogConfig::builder().forecast_years(3).build().unwrap();
        let catalog = StockAnalysisTasks::with_config(config).unwrap();
        let data = object(json!({ "IncomeStatement": "X", "CashFlowStatement": "Y" }));

        let task = catalog.forecast_dividend_growth(agent(), &data, "Acme").unwrap();
        assert!(task.prompt().unwrap().contains("next 3 years"));
        assert!(task.expected_output().contains("next 3 years"));
    }

    #[test]
    fn test_sector_prediction() {
        let data = object(json!({
            "FinancialReports": "A",
            "PolicyChanges": "B",
            "MacroeconomicData": "C"
        }));
        let task = catalog().predict_sector_performance(agent(), &data).unwrap();

        let description = task.description();
        assert!(description.contains("Financial Reports: A"));
        assert!(description.contains("Policy Changes: B"));
        assert!(description.contains("Macroeconomic Data: C"));
    }

    #[test]
    fn test_sector_prediction_missing_key() {
        let data = object(json!({ "FinancialReports": "A", "MacroeconomicData": "C" }));
        let result = catalog().predict_sector_performance(agent(), &data);

        assert!(matches!(
            result,
            Err(TaskError::MissingKey {
                key: "PolicyChanges",
                ..
            })
        ));
    }

    #[test]
    fn test_fetch_news() {
        assert_eq!(
            catalog().fetch_news("semiconductors"),
            "Fetching the latest news related to semiconductors."
        );
    }

    #[test]
    fn test_idempotent() {
        let catalog = catalog();
        let data = object(json!({ "IncomeStatement": "X", "CashFlowStatement": "Y" }));

        let first = catalog.forecast_dividend_growth(agent(), &data, "Acme").unwrap();
        let second = catalog.forecast_dividend_growth(agent(), &data, "Acme").unwrap();
        assert_eq!(first, second);

        let first = catalog.research(agent(), "Acme").unwrap();
        let second = catalog.research(agent(), "Acme").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_agent_passes_through() {
        #[derive(Debug, PartialEq)]
        struct Executor {
            id: u32,
        }

        let task = catalog().recommend(Executor { id: 9 }).unwrap();
        assert_eq!(task.agent(), &Executor { id: 9 });
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CatalogConfig {
            forecast_years: 0,
            ..Default::default()
        };
        assert!(matches!(
            StockAnalysisTasks::with_config(config),
            Err(TaskError::Config(_))
        ));
    }
}
