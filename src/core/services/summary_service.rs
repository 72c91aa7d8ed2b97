use serde::{Deserialize, Serialize};

use crate::accuracy::{AccuracyZone, CategoryAccuracy};
use crate::domain::BudgetConfig;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneCount {
    pub zone: AccuracyZone,
    pub count: usize,
}

/// Dashboard roll-up over a set of accuracy records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccuracySummary {
    pub months_in_range: u32,
    pub total_budgeted: f64,
    pub total_spent: f64,
    /// One entry per zone, in zone order, including empty zones.
    pub zone_counts: Vec<ZoneCount>,
    /// Share of used categories that landed in the bullseye.
    pub bullseye_rate: f64,
    pub over_budget: Vec<String>,
    pub unused: Vec<String>,
    /// Categories at or past their warning threshold but not yet over.
    pub warnings: Vec<String>,
}

impl AccuracySummary {
    pub fn count(&self, zone: AccuracyZone) -> usize {
        self.zone_counts
            .iter()
            .find(|entry| entry.zone == zone)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(records: &[CategoryAccuracy], budget: &BudgetConfig) -> AccuracySummary {
        let zone_counts = AccuracyZone::ALL
            .iter()
            .map(|zone| ZoneCount {
                zone: *zone,
                count: records
                    .iter()
                    .filter(|record| record.accuracy_zone == *zone)
                    .count(),
            })
            .collect::<Vec<_>>();

        let used = records.iter().filter(|record| !record.is_unused).count();
        let bullseyes = records
            .iter()
            .filter(|record| record.accuracy_zone == AccuracyZone::Bullseye)
            .count();
        let bullseye_rate = if used == 0 {
            0.0
        } else {
            bullseyes as f64 / used as f64
        };

        let warnings = names_where(records, |record| {
            if record.is_unused || record.is_over_budget {
                return false;
            }
            let threshold = budget
                .get(&record.category)
                .map(|config| config.warning_threshold);
            matches!(
                (record.accuracy_percentage, threshold),
                (Some(percentage), Some(threshold)) if percentage >= threshold
            )
        });

        AccuracySummary {
            months_in_range: records
                .first()
                .map(|record| record.months_in_range)
                .unwrap_or(0),
            total_budgeted: records.iter().map(|record| record.total_budgeted).sum(),
            total_spent: records.iter().map(|record| record.total_spent).sum(),
            zone_counts,
            bullseye_rate,
            over_budget: names_where(records, |record| record.is_over_budget),
            unused: names_where(records, |record| record.is_unused),
            warnings,
        }
    }
}

fn names_where(
    records: &[CategoryAccuracy],
    predicate: impl Fn(&CategoryAccuracy) -> bool,
) -> Vec<String> {
    records
        .iter()
        .filter(|record| predicate(record))
        .map(|record| record.category.clone())
        .collect()
}
