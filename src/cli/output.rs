use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::accuracy::{AccuracyZone, CategoryAccuracy};
use crate::core::services::AccuracySummary;
use crate::domain::DateWindow;

const CATEGORY_WIDTH: usize = 18;

/// Paints `text` in the colour associated with `zone`.
pub fn paint_zone(zone: AccuracyZone, text: &str) -> ColoredString {
    match zone {
        AccuracyZone::Bullseye => text.green().bold(),
        AccuracyZone::Ring1 => text.green(),
        AccuracyZone::Ring2 => text.cyan(),
        AccuracyZone::Ring3 => text.yellow(),
        AccuracyZone::Ring4 | AccuracyZone::Ring5 => text.magenta(),
        AccuracyZone::Bust => text.red().bold(),
        AccuracyZone::Unused => text.dimmed(),
    }
}

fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(percentage) => format!("{percentage:.1}%"),
        None => "n/a".to_string(),
    }
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= CATEGORY_WIDTH {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(CATEGORY_WIDTH - 1).collect();
        short.push('~');
        short
    }
}

pub fn render_records(window: &DateWindow, records: &[CategoryAccuracy], currency: &str) -> String {
    let mut out = String::new();
    let months = window.months_in_range();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "=== Accuracy {} to {} ({} month{}) ===",
            window.start,
            window.end,
            months,
            if months == 1 { "" } else { "s" }
        )
        .bold()
    );
    if records.is_empty() {
        let _ = writeln!(out, "No active budget categories.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<width$} {:>12} {:>12} {:>9}  {:<9} {:>8}",
        "Category",
        format!("Budget {currency}"),
        format!("Actual {currency}"),
        "Accuracy",
        "Zone",
        "Exceeded",
        width = CATEGORY_WIDTH
    );
    for record in records {
        let exceeded = record
            .day_exceeded
            .map(|day| format!("day {day}"))
            .unwrap_or_else(|| "-".to_string());
        // Pad before colouring so escape codes do not skew the columns.
        let zone = paint_zone(
            record.accuracy_zone,
            &format!("{:<9}", record.accuracy_zone.label()),
        );
        let _ = writeln!(
            out,
            "{:<width$} {:>12.2} {:>12.2} {:>9}  {} {:>8}",
            truncate(&record.category),
            record.budget_average,
            record.actual_average,
            format_percentage(record.accuracy_percentage),
            zone,
            exceeded,
            width = CATEGORY_WIDTH
        );
    }
    out
}

pub fn render_summary(summary: &AccuracySummary, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=== Summary ===".bold());
    let _ = writeln!(
        out,
        "Budgeted {:.2} {currency}, spent {:.2} {currency}",
        summary.total_budgeted, summary.total_spent
    );
    let counts: Vec<String> = summary
        .zone_counts
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| format!("{} {}", paint_zone(entry.zone, entry.zone.label()), entry.count))
        .collect();
    if !counts.is_empty() {
        let _ = writeln!(out, "Zones: {}", counts.join(", "));
    }
    let _ = writeln!(out, "Bullseye rate: {:.0}%", summary.bullseye_rate * 100.0);
    if !summary.over_budget.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "Over budget:".red(),
            summary.over_budget.join(", ")
        );
    }
    if !summary.warnings.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "Near limit:".yellow(),
            summary.warnings.join(", ")
        );
    }
    if !summary.unused.is_empty() {
        let _ = writeln!(out, "Unused: {}", summary.unused.join(", "));
    }
    out
}

pub fn render_zone_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=== Accuracy zones ===".bold());
    for zone in AccuracyZone::ALL {
        let _ = writeln!(out, "{:<9} {}", zone.label(), zone.band_description());
    }
    out
}
