use serde::{Deserialize, Serialize};

use crate::accuracy::{compute_accuracy, CategoryAccuracy};
use crate::domain::DateWindow;
use crate::errors::BudgetError;
use crate::storage::HouseholdSnapshot;

use super::{AccuracySummary, ServiceError, ServiceResult, SummaryService};

/// Accuracy records for a window together with their dashboard roll-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyReport {
    pub window: DateWindow,
    pub records: Vec<CategoryAccuracy>,
    pub summary: AccuracySummary,
}

pub struct AccuracyService;

impl AccuracyService {
    pub fn score(snapshot: &HouseholdSnapshot, window: DateWindow) -> Vec<CategoryAccuracy> {
        let records = compute_accuracy(
            &snapshot.transactions,
            &snapshot.budget,
            window.start,
            window.end,
        );
        tracing::info!(
            start = %window.start,
            end = %window.end,
            categories = records.len(),
            "computed category accuracy"
        );
        records
    }

    /// Scores a single category; it must exist and be active.
    pub fn score_category(
        snapshot: &HouseholdSnapshot,
        category: &str,
        window: DateWindow,
    ) -> ServiceResult<CategoryAccuracy> {
        match snapshot.budget.get(category) {
            Some(config) if config.is_active => {}
            Some(_) => {
                return Err(ServiceError::Invalid(format!(
                    "category `{category}` is inactive"
                )))
            }
            None => return Err(BudgetError::CategoryNotFound(category.to_string()).into()),
        }
        Self::score(snapshot, window)
            .into_iter()
            .find(|record| record.category == category)
            .ok_or_else(|| BudgetError::CategoryNotFound(category.to_string()).into())
    }

    pub fn report(snapshot: &HouseholdSnapshot, window: DateWindow) -> AccuracyReport {
        let records = Self::score(snapshot, window);
        let summary = SummaryService::summarize(&records, &snapshot.budget);
        AccuracyReport {
            window,
            records,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetCategoryConfig, BudgetConfig, Transaction};
    use chrono::NaiveDate;

    fn snapshot() -> HouseholdSnapshot {
        HouseholdSnapshot {
            budget: BudgetConfig::new()
                .with(BudgetCategoryConfig::new("Rent", 1200.0))
                .with(BudgetCategoryConfig::new("Gym", 40.0).inactive()),
            transactions: vec![Transaction::expense(
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                1200.0,
                "Rent",
            )],
        }
    }

    fn may() -> DateWindow {
        DateWindow::month_of(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap()
    }

    #[test]
    fn score_category_finds_active_record() {
        let record = AccuracyService::score_category(&snapshot(), "Rent", may()).unwrap();
        assert_eq!(record.accuracy_percentage, Some(100.0));
    }

    #[test]
    fn score_category_rejects_unknown_and_inactive() {
        let missing = AccuracyService::score_category(&snapshot(), "Travel", may()).unwrap_err();
        assert!(format!("{missing}").contains("Travel"));
        let inactive = AccuracyService::score_category(&snapshot(), "Gym", may()).unwrap_err();
        assert!(matches!(inactive, ServiceError::Invalid(_)));
    }

    #[test]
    fn report_bundles_summary() {
        let report = AccuracyService::report(&snapshot(), may());
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.summary.total_spent, 1200.0);
        assert_eq!(report.window, may());
    }
}
