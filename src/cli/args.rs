use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::transaction::parse_transaction_date;
use crate::errors::CliError;

pub const USAGE: &str = "\
Usage:
  budget_accuracy_cli report <snapshot.json> [--from YYYY-MM-DD] [--to YYYY-MM-DD] [--json] [--summary]
  budget_accuracy_cli zones
  budget_accuracy_cli help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    pub snapshot: PathBuf,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub json: bool,
    pub summary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Report(ReportArgs),
    Zones,
    Help,
}

/// Parses the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let Some(command) = args.next() else {
        return Err(CliError::Usage(USAGE.to_string()));
    };

    match command.as_str() {
        "report" => parse_report(args).map(Command::Report),
        "zones" => Ok(Command::Zones),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::Input(format!("unknown command `{other}`"))),
    }
}

fn parse_report(mut args: impl Iterator<Item = String>) -> Result<ReportArgs, CliError> {
    let mut snapshot = None;
    let mut report = ReportArgs {
        snapshot: PathBuf::new(),
        from: None,
        to: None,
        json: false,
        summary: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--from" => report.from = Some(parse_date_flag("--from", args.next())?),
            "--to" => report.to = Some(parse_date_flag("--to", args.next())?),
            "--json" => report.json = true,
            "--summary" => report.summary = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Input(format!("unknown flag `{flag}`")))
            }
            path if snapshot.is_none() => snapshot = Some(PathBuf::from(path)),
            extra => return Err(CliError::Input(format!("unexpected argument `{extra}`"))),
        }
    }

    report.snapshot =
        snapshot.ok_or_else(|| CliError::Input("report needs a snapshot path".into()))?;
    Ok(report)
}

fn parse_date_flag(flag: &str, value: Option<String>) -> Result<NaiveDate, CliError> {
    let raw = value.ok_or_else(|| CliError::Input(format!("{flag} needs a date")))?;
    parse_transaction_date(&raw)
        .ok_or_else(|| CliError::Input(format!("{flag}: `{raw}` is not a date")))
}
