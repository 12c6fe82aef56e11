pub mod collections;
pub mod custom_ingredients;
pub mod ingredients;
pub mod list_names;
pub mod measurements;
pub mod recipes;
pub mod users;
