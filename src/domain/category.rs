//! Per-category budget settings owned by the budget configuration source.

use serde::{Deserialize, Serialize};

use crate::domain::common::NamedEntity;

pub const DEFAULT_WARNING_THRESHOLD: f64 = 80.0;

/// Monthly spending limit and display settings for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategoryConfig {
    pub name: String,
    pub monthly_limit: f64,
    /// Percentage of the limit at which the category is flagged as close.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_active() -> bool {
    true
}

impl BudgetCategoryConfig {
    pub fn new(name: impl Into<String>, monthly_limit: f64) -> Self {
        Self {
            name: name.into(),
            monthly_limit,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            is_active: true,
            color: None,
            description: None,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_warning_threshold(mut self, threshold: f64) -> Self {
        self.warning_threshold = threshold;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl NamedEntity for BudgetCategoryConfig {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered mapping from category name to its budget settings.
///
/// Insertion order is preserved; it is the order in which accuracy records
/// are produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BudgetConfig {
    categories: Vec<BudgetCategoryConfig>,
}

impl BudgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a category, replacing an existing entry with the same name in
    /// place so its position is kept.
    pub fn upsert(&mut self, category: BudgetCategoryConfig) {
        match self
            .categories
            .iter_mut()
            .find(|existing| existing.name() == category.name())
        {
            Some(slot) => *slot = category,
            None => self.categories.push(category),
        }
    }

    pub fn with(mut self, category: BudgetCategoryConfig) -> Self {
        self.upsert(category);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BudgetCategoryConfig> {
        self.categories.iter().find(|category| category.name() == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<BudgetCategoryConfig> {
        let index = self
            .categories
            .iter()
            .position(|category| category.name() == name)?;
        Some(self.categories.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BudgetCategoryConfig> {
        self.categories.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &BudgetCategoryConfig> {
        self.categories.iter().filter(|category| category.is_active)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<BudgetCategoryConfig> for BudgetConfig {
    fn from_iter<I: IntoIterator<Item = BudgetCategoryConfig>>(iter: I) -> Self {
        let mut config = BudgetConfig::new();
        for category in iter {
            config.upsert(category);
        }
        config
    }
}
