//! Pantry/recipe tracker core.
//!
//! Users own named quantity collections (a "Grocery" list, a "Pantry" list,
//! custom lists) and recipes, all holding ingredient-quantity entries. The
//! interesting part is the ledger mutation engine: insert-or-merge by a
//! composite key, decrement-or-remove, the combined set-or-move across two
//! collections, and the cascade that purges entries everywhere when a custom
//! ingredient definition is deleted.
//!
//! Layering:
//! - [`contract`]: models, stable errors, and the [`contract::PantryApi`]
//!   trait a request layer consumes
//! - [`domain`]: the services and the pure entry algebra
//! - [`infra`]: SeaORM entities, mappers, and migrations
//! - [`gateways`]: the local client wiring the contract trait to the
//!   domain services

pub mod contract;
pub mod domain;
pub mod gateways;
pub mod infra;

pub use contract::{PantryApi, PantryError};
pub use domain::PantryConfig;
pub use gateways::PantryLocalClient;
