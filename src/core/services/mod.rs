pub mod accuracy_service;
pub mod summary_service;

pub use accuracy_service::{AccuracyReport, AccuracyService};
pub use summary_service::{AccuracySummary, SummaryService, ZoneCount};

use crate::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("{0}")]
    Invalid(String),
}
