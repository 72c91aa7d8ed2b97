pub mod json_backend;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{BudgetConfig, Transaction},
    errors::BudgetError,
};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Everything the accuracy engine needs from the outside world: the budget
/// configuration and the raw transaction list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HouseholdSnapshot {
    #[serde(default)]
    pub budget: BudgetConfig,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Abstraction over backends capable of persisting household snapshots.
pub trait SnapshotStore {
    fn load(&self) -> Result<HouseholdSnapshot>;
    fn save(&self, snapshot: &HouseholdSnapshot) -> Result<()>;
}

pub use json_backend::{load_snapshot_from_path, save_snapshot_to_path, JsonSnapshotStore};
