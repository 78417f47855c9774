//! The calculate command
//!
//! Runs one budget: locate and load the config, confirm the half-month and the
//! income, compute, and write the report in the requested format.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::paths::CONFIG_ENV_VAR;
use crate::config::{load_config, PaydayPaths};
use crate::display::format_budget_result;
use crate::error::PaydayResult;
use crate::export::{export_budget_csv, export_budget_json};
use crate::models::HalfMonth;
use crate::services::{resolve_income, BudgetResult, BudgetService};

use super::prompt::Prompter;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Exact amounts as JSON
    Json,
    /// Section,Name,Amount records
    Csv,
}

/// Arguments for a budget run
#[derive(Debug, Clone, Default, Args)]
pub struct CalculateArgs {
    /// Path to the budget config (JSON, or YAML by extension)
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Half of the month to budget (first or second); skips the prompt
    #[arg(long)]
    pub half: Option<HalfMonth>,

    /// Income for this half; skips the prompt
    #[arg(short, long, allow_hyphen_values = true)]
    pub income: Option<String>,

    /// Accept the suggested half and the computed income without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Handle a budget run
///
/// `input` feeds the prompts, `prompts` receives them, and `output` receives
/// only the report.
pub fn handle_calculate<R, P, W>(
    args: &CalculateArgs,
    paths: &PaydayPaths,
    suggested: HalfMonth,
    input: R,
    prompts: P,
    output: &mut W,
) -> PaydayResult<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let mut prompter = Prompter::new(input, prompts);
    prompter.say("Welcome to the payday calculator!")?;

    let config_path = paths.resolve_config_file(args.config.as_deref());
    let config = load_config(&config_path)?;
    prompter.say(&format!("Successful config load: {}", config_path.display()))?;

    let half = match args.half {
        Some(half) => half,
        None if args.yes => suggested,
        None => prompter.confirm_half_month(suggested)?,
    };

    let service = BudgetService::new(&config);
    let computed = service.total_income()?;
    let income = match args.income.as_deref() {
        Some(raw) => resolve_income(computed, raw)?,
        None if args.yes => computed,
        None => prompter.confirm_income(computed)?,
    };

    let result = service.calculate(half, income)?;
    write_report(&result, args.format, output)
}

/// Write a finished budget in the given format
pub fn write_report<W: Write>(
    result: &BudgetResult,
    format: OutputFormat,
    output: &mut W,
) -> PaydayResult<()> {
    match format {
        OutputFormat::Table => {
            write!(output, "{}", format_budget_result(result))?;
            Ok(())
        }
        OutputFormat::Json => export_budget_json(result, output),
        OutputFormat::Csv => export_budget_csv(result, output),
    }
}
