#![allow(dead_code)]

use std::path::PathBuf;

use budget_accuracy::{
    storage::{save_snapshot_to_path, HouseholdSnapshot},
    BudgetCategoryConfig, BudgetConfig, Transaction,
};
use chrono::NaiveDate;
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Groceries at 500/month, dining at 200/month, plus an inactive gym budget.
pub fn household_budget() -> BudgetConfig {
    BudgetConfig::new()
        .with(BudgetCategoryConfig::new("Groceries", 500.0).with_color("#2e7d32"))
        .with(BudgetCategoryConfig::new("Dining", 200.0))
        .with(BudgetCategoryConfig::new("Gym", 40.0).inactive())
}

/// Spends exactly `total` on groceries in January 2024, split across the month.
pub fn january_groceries(total: f64) -> Vec<Transaction> {
    vec![
        Transaction::expense(date(2024, 1, 4), total * 0.4, "Groceries"),
        Transaction::expense(date(2024, 1, 18), total * 0.6, "Groceries"),
    ]
}

pub fn sample_snapshot() -> HouseholdSnapshot {
    let mut transactions = january_groceries(500.0);
    transactions.push(Transaction::expense(date(2024, 1, 12), 320.0, "Dining"));
    transactions.push(Transaction::income(date(2024, 1, 1), 4_000.0, "Salary"));
    HouseholdSnapshot {
        budget: household_budget(),
        transactions,
    }
}

/// Writes `snapshot` into a fresh temp dir; keep the guard alive while the
/// file is in use.
pub fn write_snapshot(snapshot: &HouseholdSnapshot) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("household.json");
    save_snapshot_to_path(snapshot, &path).expect("write snapshot");
    (temp, path)
}
