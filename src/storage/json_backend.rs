use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::write_atomic,
    errors::BudgetError,
};

use super::{HouseholdSnapshot, Result, SnapshotStore};

/// Snapshot store backed by a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<HouseholdSnapshot> {
        load_snapshot_from_path(&self.path)
    }

    fn save(&self, snapshot: &HouseholdSnapshot) -> Result<()> {
        save_snapshot_to_path(snapshot, &self.path)
    }
}

pub fn load_snapshot_from_path(path: &Path) -> Result<HouseholdSnapshot> {
    if !path.exists() {
        return Err(BudgetError::StorageError(format!(
            "snapshot `{}` not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    let snapshot: HouseholdSnapshot = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        categories = snapshot.budget.len(),
        transactions = snapshot.transactions.len(),
        "loaded household snapshot"
    );
    Ok(snapshot)
}

pub fn save_snapshot_to_path(snapshot: &HouseholdSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    write_atomic(path, &json)?;
    tracing::debug!(path = %path.display(), "saved household snapshot");
    Ok(())
}
