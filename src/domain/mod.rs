pub mod catalog;
pub mod collections;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod recipes;
pub mod users;

use crate::domain::error::DomainError;

/// Bounds the domain services enforce
#[derive(Debug, Clone)]
pub struct PantryConfig {
    pub max_collections_per_user: usize,
    pub max_entry_amount: f64,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            max_collections_per_user: 10,
            max_entry_amount: 10_000.0,
        }
    }
}

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::database(e.to_string())
}
