pub mod client;
pub mod error;
pub mod model;

pub use client::PantryApi;
pub use error::PantryError;
pub use model::{
    Amount, Collection, CustomIngredient, IngredientRef, MoveRequest, NewUser, QuantityEntry,
    Recipe, User,
};
