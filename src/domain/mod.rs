//! Input types consumed by the accuracy engine: transactions, budget
//! configuration, and query windows.

pub mod category;
pub mod common;
pub mod transaction;
pub mod window;

pub use category::{BudgetCategoryConfig, BudgetConfig};
pub use common::NamedEntity;
pub use transaction::{Transaction, TransactionType};
pub use window::DateWindow;
