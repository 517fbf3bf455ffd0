//! Command-line interface for stock-crew
//!
//! Builds a single stock analysis task and prints it, either as labelled text
//! or as the JSON document an execution engine consumes.
//!
//! ```bash
//! stock-crew research --company "ACME Corp"
//! stock-crew --format json fibonacci --level 23.6%=100.0 --level 38.2%=95.0
//! stock-crew dividend --company Acme --data @financials.json
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use crew_core::{AgentRef, Task};
use crew_tasks::{CatalogConfig, FibonacciLevels, StockAnalysisTasks, TaskKind, inputs};
use crew_utils::LogFormat;
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-crew")]
#[command(about = "Build stock analysis tasks for a multi-agent crew", long_about = None)]
struct Args {
    /// Agent name to assign (defaults to the archetype's role)
    #[arg(short, long, global = true)]
    agent: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log output format
    #[arg(long, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Leave the tip section out of long-form tasks
    #[arg(long, global = true)]
    no_tip: bool,

    /// Dividend forecast horizon in years
    #[arg(long, global = true)]
    forecast_years: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// News and sentiment research brief for a company
    Research {
        #[arg(short, long)]
        company: String,
    },
    /// Financial health analysis
    FinancialAnalysis,
    /// 10-Q and 10-K filings analysis
    FilingsAnalysis,
    /// Investment recommendation from prior analyses
    Recommend,
    /// Fibonacci retracement analysis
    Fibonacci {
        /// Retracement level as LABEL=VALUE, repeatable, kept in order
        #[arg(short, long = "level", value_parser = parse_level, required = true)]
        levels: Vec<(String, f64)>,
    },
    /// Sentiment analysis of a news payload
    Sentiment {
        #[arg(short, long)]
        news: String,
    },
    /// Investment advice from a sentiment result
    Advice {
        #[arg(short, long)]
        sentiment: String,
    },
    /// Dividend growth forecast
    Dividend {
        #[arg(short, long)]
        company: String,
        /// JSON object with IncomeStatement and CashFlowStatement, or @FILE
        #[arg(short, long)]
        data: String,
    },
    /// Sector performance prediction
    Sector {
        /// JSON object with FinancialReports, PolicyChanges and MacroeconomicData, or @FILE
        #[arg(short, long)]
        data: String,
    },
    /// Print the news lookup placeholder for a stock or sector
    FetchNews { subject: String },
    /// List the task archetypes
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    crew_utils::init_tracing_with(args.log_format);

    let mut builder = CatalogConfig::builder().with_env();
    if args.no_tip {
        builder = builder.include_tip(false);
    }
    if let Some(years) = args.forecast_years {
        builder = builder.forecast_years(years);
    }
    let config = builder.build().context("Invalid catalog configuration")?;

    info!(?config, "Starting stock-crew");
    let catalog = StockAnalysisTasks::with_config(config)?;

    let agent = |kind: TaskKind| {
        AgentRef::new(
            args.agent
                .clone()
                .unwrap_or_else(|| kind.default_agent().to_string()),
        )
    };

    let task = match &args.command {
        Command::Research { company } => catalog.research(agent(TaskKind::Research), company)?,
        Command::FinancialAnalysis => {
            catalog.financial_analysis(agent(TaskKind::FinancialAnalysis))?
        }
        Command::FilingsAnalysis => catalog.filings_analysis(agent(TaskKind::FilingsAnalysis))?,
        Command::Recommend => catalog.recommend(agent(TaskKind::Recommend))?,
        Command::Fibonacci { levels } => {
            let levels: FibonacciLevels = levels.iter().cloned().collect();
            catalog.fibonacci_analysis(agent(TaskKind::FibonacciAnalysis), &levels)?
        }
        Command::Sentiment { news } => {
            catalog.analyze_sentiment(agent(TaskKind::AnalyzeSentiment), news.as_str())?
        }
        Command::Advice { sentiment } => catalog
            .provide_investment_advice(agent(TaskKind::ProvideInvestmentAdvice), sentiment.as_str())?,
        Command::Dividend { company, data } => {
            let data = load_json(data)?;
            let data = inputs::as_mapping(&data, "financial_data")?;
            catalog.forecast_dividend_growth(agent(TaskKind::ForecastDividendGrowth), data, company)?
        }
        Command::Sector { data } => {
            let data = load_json(data)?;
            let data = inputs::as_mapping(&data, "combined_data")?;
            catalog.predict_sector_performance(agent(TaskKind::PredictSectorPerformance), data)?
        }
        Command::FetchNews { subject } => {
            println!("{}", catalog.fetch_news(subject));
            return Ok(());
        }
        Command::List => {
            println!("{}", kinds_table());
            return Ok(());
        }
    };

    print_task(&task, args.format)
}

/// Parse a `LABEL=VALUE` retracement level
fn parse_level(raw: &str) -> std::result::Result<(String, f64), String> {
    let (label, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{raw}'"))?;

    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in '{raw}'"));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value in '{raw}': {e}"))?;

    Ok((label.to_string(), value))
}

/// Read a JSON argument given inline or as `@path`
fn load_json(arg: &str) -> Result<Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file '{path}'"))?,
        None => arg.to_string(),
    };

    if text.trim().is_empty() {
        bail!("Task data is empty");
    }

    serde_json::from_str(&text).context("Task data is not valid JSON")
}

fn render_task(task: &Task<AgentRef>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(task)?),
        OutputFormat::Text => {
            let mut out = format!(
                "Agent: {}\n\nDescription:\n{}\n\nExpected output:\n{}\n",
                task.agent(),
                task.description(),
                task.expected_output()
            );
            if let Some(prompt) = task.prompt() {
                out.push_str(&format!("\nPrompt:\n{prompt}\n"));
            }
            Ok(out)
        }
    }
}

fn print_task(task: &Task<AgentRef>, format: OutputFormat) -> Result<()> {
    println!("{}", render_task(task, format)?);
    Ok(())
}

fn kinds_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Task", "Default agent", "Required keys", "Summary"]);

    for kind in TaskKind::ALL {
        table.add_row(vec![
            kind.name().to_string(),
            kind.default_agent().to_string(),
            kind.required_keys().join(", "),
            kind.summary().to_string(),
        ]);
    }

    table
}
