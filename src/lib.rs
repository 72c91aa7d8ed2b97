#![doc(test(attr(deny(warnings))))]

//! Budget Accuracy scores household spending against a monthly budget,
//! classifying each category into dartboard-style accuracy zones.

pub mod accuracy;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use accuracy::{compute_accuracy, AccuracyZone, CategoryAccuracy};
pub use domain::{BudgetCategoryConfig, BudgetConfig, DateWindow, Transaction, TransactionType};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Accuracy tracing initialized.");
    });
}
