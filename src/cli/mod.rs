//! Command-line front end: parses arguments, loads a household snapshot,
//! and renders accuracy reports.

pub mod args;
pub mod output;

use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::config::{Config, ConfigManager};
use crate::core::services::AccuracyService;
use crate::domain::DateWindow;
use crate::errors::{BudgetError, CliError};
use crate::storage::load_snapshot_from_path;

pub use args::{parse_args, Command, ReportArgs, USAGE};

/// Entry point used by the binary: reads process arguments, loads the stored
/// configuration when the command needs it, then writes to stdout.
pub fn run_cli() -> Result<(), CliError> {
    let command = parse_args(std::env::args().skip(1))?;
    let config = match command {
        Command::Report(_) => ConfigManager::new()?.load()?,
        Command::Help | Command::Zones => Config::default(),
    };
    if !config.color_output {
        colored::control::set_override(false);
    }
    let today = Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    execute(command, &config, today, &mut handle)
}

pub fn execute<W: Write>(
    command: Command,
    config: &Config,
    today: NaiveDate,
    out: &mut W,
) -> Result<(), CliError> {
    let rendered = match command {
        Command::Help => format!("{USAGE}\n"),
        Command::Zones => output::render_zone_table(),
        Command::Report(report) => render_report(&report, config, today)?,
    };
    out.write_all(rendered.as_bytes())
        .map_err(|err| CliError::Core(err.into()))
}

/// Resolves the report window: `--to` defaults to today and `--from` to the
/// start of the configured trailing month range.
pub fn resolve_window(
    args: &ReportArgs,
    config: &Config,
    today: NaiveDate,
) -> Result<DateWindow, CliError> {
    let end = args.to.unwrap_or(today);
    match args.from {
        Some(start) => DateWindow::new(start, end).map_err(CliError::from),
        None => DateWindow::trailing_months(end, config.default_window_months)
            .map_err(CliError::from),
    }
}

fn render_report(args: &ReportArgs, config: &Config, today: NaiveDate) -> Result<String, CliError> {
    let window = resolve_window(args, config, today)?;
    let snapshot = load_snapshot_from_path(&args.snapshot)?;
    let report = AccuracyService::report(&snapshot, window);

    if args.json {
        let json = if args.summary {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string_pretty(&report.records)
        }
        .map_err(BudgetError::from)?;
        return Ok(format!("{json}\n"));
    }

    let mut rendered = output::render_records(&report.window, &report.records, &config.currency);
    if args.summary {
        rendered.push('\n');
        rendered.push_str(&output::render_summary(&report.summary, &config.currency));
    }
    Ok(rendered)
}
