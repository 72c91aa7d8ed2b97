//! Immutable spending and income records supplied by the transaction store.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Direction of a transaction. Only expenses count toward budget accuracy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category: category.into(),
            transaction_type,
            description: None,
        }
    }

    pub fn expense(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self::new(date, amount, category, TransactionType::Expense)
    }

    pub fn income(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self::new(date, amount, category, TransactionType::Income)
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Parses a transaction date from either `YYYY-MM-DD` or an RFC 3339
/// timestamp, keeping only the calendar date of the latter.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|stamp| stamp.date_naive())
}

fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_transaction_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date `{raw}`")))
}
