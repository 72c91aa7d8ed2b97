use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::window::months_between;
use crate::domain::{BudgetCategoryConfig, BudgetConfig, DateWindow, Transaction};

use super::placement::{hit_angle, target_position, MAX_POSITION};
use super::zone::AccuracyZone;

/// Percentages are rounded to this many decimal places before
/// classification so that float noise cannot flip a band edge.
const PERCENT_PRECISION: f64 = 1e6;

/// How closely one category's spending tracked its budget over a window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAccuracy {
    pub category: String,
    pub budget_average: f64,
    pub actual_average: f64,
    pub total_budgeted: f64,
    pub total_spent: f64,
    pub months_in_range: u32,
    /// `None` when spending hit a zero limit; the percentage is unbounded.
    pub accuracy_percentage: Option<f64>,
    pub variance: f64,
    /// `None` whenever the budget average is zero.
    pub variance_percentage: Option<f64>,
    pub is_over_budget: bool,
    pub is_unused: bool,
    pub accuracy_zone: AccuracyZone,
    pub target_position: f64,
    pub hit_angle: f64,
    pub transaction_count: usize,
    pub day_exceeded: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Scores every active category in `budget` against the expense
/// transactions dated within `[start, end]`.
///
/// Records come back in the configuration's insertion order. An inverted
/// window yields no records.
pub fn compute_accuracy(
    transactions: &[Transaction],
    budget: &BudgetConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CategoryAccuracy> {
    let Some(months) = months_between(start, end) else {
        tracing::trace!(%start, %end, "inverted accuracy window, nothing to score");
        return Vec::new();
    };

    let mut by_category: HashMap<&str, Vec<&Transaction>> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.date >= start && txn.date <= end)
    {
        by_category.entry(txn.category.as_str()).or_default().push(txn);
    }

    let latest_start = DateWindow { start, end }.latest_month_start();
    budget
        .active()
        .map(|category| {
            let expenses = by_category
                .get(category.name.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            score_category(category, expenses, months, latest_start, end)
        })
        .collect()
}

fn score_category(
    category: &BudgetCategoryConfig,
    expenses: &[&Transaction],
    months: u32,
    latest_start: NaiveDate,
    end: NaiveDate,
) -> CategoryAccuracy {
    let months_f = f64::from(months);
    let total_spent: f64 = expenses.iter().map(|txn| txn.amount).sum();
    let budget_average = category.monthly_limit;
    let actual_average = total_spent / months_f;
    let variance = actual_average - budget_average;
    let variance_percentage = ratio_percent(variance, budget_average);

    let (accuracy_percentage, accuracy_zone, position, is_unused) = if total_spent <= 0.0 {
        (Some(0.0), AccuracyZone::Unused, 1.0, true)
    } else {
        match ratio_percent(actual_average, budget_average) {
            Some(percentage) => (
                Some(percentage),
                AccuracyZone::classify(percentage),
                target_position(percentage),
                false,
            ),
            // Zero limit, or a limit so small the ratio is unbounded.
            None => (None, AccuracyZone::Bust, MAX_POSITION, false),
        }
    };

    let exceeded_on = day_exceeded(expenses, category.monthly_limit, latest_start, end);

    tracing::debug!(
        category = %category.name,
        total_spent,
        months,
        zone = %accuracy_zone,
        "scored category"
    );

    CategoryAccuracy {
        category: category.name.clone(),
        budget_average,
        actual_average,
        total_budgeted: category.monthly_limit * months_f,
        total_spent,
        months_in_range: months,
        accuracy_percentage,
        variance,
        variance_percentage,
        is_over_budget: actual_average > budget_average,
        is_unused,
        accuracy_zone,
        target_position: position,
        hit_angle: hit_angle(&category.name),
        transaction_count: expenses.len(),
        day_exceeded: exceeded_on,
        color: category.color.clone(),
    }
}

/// Day of month on which cumulative spend in `[from, to]` first went over
/// `limit`, walking the days in order.
pub fn day_exceeded(
    expenses: &[&Transaction],
    limit: f64,
    from: NaiveDate,
    to: NaiveDate,
) -> Option<u32> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for txn in expenses.iter().filter(|txn| txn.date >= from && txn.date <= to) {
        *daily.entry(txn.date).or_insert(0.0) += txn.amount;
    }

    let mut cumulative = 0.0;
    daily.into_iter().find_map(|(date, amount)| {
        cumulative += amount;
        (cumulative > limit).then(|| date.day())
    })
}

/// `numerator / denominator` as a rounded percentage, or `None` when the
/// denominator is not positive or the result is not finite.
fn ratio_percent(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator <= 0.0 {
        return None;
    }
    let percentage = round_percent(numerator / denominator * 100.0);
    percentage.is_finite().then_some(percentage)
}

fn round_percent(value: f64) -> f64 {
    let scaled = value * PERCENT_PRECISION;
    if scaled.is_finite() {
        scaled.round() / PERCENT_PRECISION
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn groceries(limit: f64) -> BudgetConfig {
        BudgetConfig::new().with(BudgetCategoryConfig::new("Groceries", limit))
    }

    #[test]
    fn day_exceeded_walks_latest_month_only() {
        let txns = vec![
            Transaction::expense(date(2024, 1, 20), 900.0, "Groceries"),
            Transaction::expense(date(2024, 2, 3), 200.0, "Groceries"),
            Transaction::expense(date(2024, 2, 3), 100.0, "Groceries"),
            Transaction::expense(date(2024, 2, 11), 250.0, "Groceries"),
        ];
        let records = compute_accuracy(&txns, &groceries(500.0), date(2024, 1, 1), date(2024, 2, 29));
        assert_eq!(records[0].day_exceeded, Some(11));
    }

    #[test]
    fn day_exceeded_requires_strictly_more_than_limit() {
        let txns = vec![Transaction::expense(date(2024, 3, 5), 500.0, "Groceries")];
        let records = compute_accuracy(&txns, &groceries(500.0), date(2024, 3, 1), date(2024, 3, 31));
        assert_eq!(records[0].day_exceeded, None);
    }

    #[test]
    fn income_and_out_of_window_rows_are_ignored() {
        let txns = vec![
            Transaction::income(date(2024, 3, 2), 3000.0, "Groceries"),
            Transaction::expense(date(2024, 2, 29), 80.0, "Groceries"),
            Transaction::expense(date(2024, 4, 1), 80.0, "Groceries"),
            Transaction::expense(date(2024, 3, 31), 250.0, "Groceries"),
        ];
        let records = compute_accuracy(&txns, &groceries(500.0), date(2024, 3, 1), date(2024, 3, 31));
        assert_eq!(records[0].total_spent, 250.0);
        assert_eq!(records[0].transaction_count, 1);
        assert_eq!(records[0].accuracy_percentage, Some(50.0));
        assert_eq!(records[0].accuracy_zone, AccuracyZone::Ring3);
    }

    #[test]
    fn zero_limit_with_spend_is_bust_without_nan() {
        let txns = vec![Transaction::expense(date(2024, 3, 9), 12.0, "Groceries")];
        let records = compute_accuracy(&txns, &groceries(0.0), date(2024, 3, 1), date(2024, 3, 31));
        let record = &records[0];
        assert_eq!(record.accuracy_zone, AccuracyZone::Bust);
        assert_eq!(record.accuracy_percentage, None);
        assert_eq!(record.variance_percentage, None);
        assert!(record.is_over_budget);
        assert!(record.target_position.is_finite() && record.target_position > 1.0);
        assert_eq!(record.day_exceeded, Some(9));
    }

    #[test]
    fn zero_limit_without_spend_is_unused() {
        let records = compute_accuracy(&[], &groceries(0.0), date(2024, 3, 1), date(2024, 3, 31));
        assert!(records[0].is_unused);
        assert_eq!(records[0].accuracy_zone, AccuracyZone::Unused);
        assert_eq!(records[0].accuracy_percentage, Some(0.0));
        assert!(!records[0].is_over_budget);
    }

    #[test]
    fn vanishing_limit_is_bust_without_infinity() {
        let txns = vec![Transaction::expense(date(2024, 3, 9), 1e10, "Groceries")];
        let records = compute_accuracy(&txns, &groceries(1e-300), date(2024, 3, 9), date(2024, 3, 9));
        let record = &records[0];
        assert_eq!(record.accuracy_zone, AccuracyZone::Bust);
        assert_eq!(record.accuracy_percentage, None);
        assert_eq!(record.variance_percentage, None);
        assert_eq!(record.target_position, MAX_POSITION);
        assert!(record.is_over_budget);
    }

    #[test]
    fn huge_but_finite_percentages_survive_rounding() {
        assert_eq!(round_percent(1e303), 1e303);
        assert!(ratio_percent(1e300, 1.0).map_or(false, f64::is_finite));
        assert_eq!(ratio_percent(f64::MAX, 1e-10), None);
        assert_eq!(ratio_percent(5.0, 0.0), None);
    }

    #[test]
    fn round_percent_absorbs_float_noise() {
        assert_eq!(round_percent(95.000_000_000_01), 95.0);
        assert_eq!(AccuracyZone::classify(round_percent(95.000_000_000_01)), AccuracyZone::Ring1);
    }
}
