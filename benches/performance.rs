use budget_accuracy::{compute_accuracy, BudgetCategoryConfig, BudgetConfig, Transaction};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CATEGORIES: [&str; 8] = [
    "Groceries",
    "Dining",
    "Rent",
    "Utilities",
    "Transport",
    "Health",
    "Fun",
    "Gifts",
];

fn build_household(txn_count: usize) -> (BudgetConfig, Vec<Transaction>) {
    let budget = CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, name)| BudgetCategoryConfig::new(*name, 100.0 * (idx + 1) as f64))
        .collect();

    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let transactions = (0..txn_count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let category = CATEGORIES[idx % CATEGORIES.len()];
            let amount = 5.0 + (idx % 120) as f64;
            if idx % 10 == 0 {
                Transaction::income(date, amount * 20.0, "Salary")
            } else {
                Transaction::expense(date, amount, category)
            }
        })
        .collect();

    (budget, transactions)
}

fn bench_accuracy(c: &mut Criterion) {
    let (budget, transactions) = build_household(black_box(10_000));
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let month_end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let year_end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    c.bench_function("accuracy_10k_one_month", |b| {
        b.iter(|| black_box(compute_accuracy(&transactions, &budget, start, month_end)))
    });

    c.bench_function("accuracy_10k_full_year", |b| {
        b.iter(|| black_box(compute_accuracy(&transactions, &budget, start, year_end)))
    });
}

criterion_group!(benches, bench_accuracy);
criterion_main!(benches);
