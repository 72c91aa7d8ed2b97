mod common;

use std::fs;

use budget_accuracy::{
    errors::BudgetError,
    storage::{load_snapshot_from_path, JsonSnapshotStore, SnapshotStore},
};
use common::{sample_snapshot, write_snapshot};
use tempfile::TempDir;

#[test]
fn snapshot_survives_save_and_load() {
    let snapshot = sample_snapshot();
    let (_guard, path) = write_snapshot(&snapshot);
    let loaded = load_snapshot_from_path(&path).expect("load snapshot");
    assert_eq!(loaded, snapshot);
    let names: Vec<&str> = loaded.budget.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Groceries", "Dining", "Gym"]);
}

#[test]
fn store_trait_round_trips_through_file() {
    let temp = TempDir::new().unwrap();
    let store = JsonSnapshotStore::new(temp.path().join("data").join("house.json"));
    let snapshot = sample_snapshot();
    store.save(&snapshot).expect("save");
    assert!(store.path().exists());
    assert_eq!(store.load().expect("load"), snapshot);
}

#[test]
fn missing_snapshot_names_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");
    let err = load_snapshot_from_path(&path).unwrap_err();
    assert!(matches!(err, BudgetError::StorageError(ref msg) if msg.contains("absent.json")));
}

#[test]
fn accepts_hand_written_wire_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("export.json");
    fs::write(
        &path,
        r#"{
            "budget": [
                {"name": "Groceries", "monthlyLimit": 500, "isActive": true, "warningThreshold": 90, "color": "green"},
                {"name": "Gifts", "monthlyLimit": 0, "isActive": false}
            ],
            "transactions": [
                {"id": "0b6f6d4e-9a77-4bb0-8c7a-0e2a3bd3c001", "date": "2024-01-03T12:30:00.000Z",
                 "amount": 61.25, "category": "Groceries", "type": "expense"},
                {"id": "0b6f6d4e-9a77-4bb0-8c7a-0e2a3bd3c002", "date": "2024-01-05",
                 "amount": 2500, "category": "Salary", "type": "income", "description": "Payroll"}
            ]
        }"#,
    )
    .unwrap();

    let snapshot = load_snapshot_from_path(&path).expect("parse export");
    assert_eq!(snapshot.budget.len(), 2);
    assert_eq!(snapshot.budget.active().count(), 1);
    assert_eq!(snapshot.budget.get("Groceries").unwrap().warning_threshold, 90.0);
    assert_eq!(snapshot.transactions.len(), 2);
    assert_eq!(snapshot.transactions[1].description.as_deref(), Some("Payroll"));
}

#[test]
fn malformed_json_is_a_storage_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_snapshot_from_path(&path),
        Err(BudgetError::StorageError(_))
    ));
}
