//! Convert database entities to contract models

use crate::contract::model::{Collection, CustomIngredient, Recipe, User};
use crate::infra::storage::entity;

pub fn user_to_contract(entity: entity::users::Model) -> User {
    User {
        id: entity.id,
        username: entity.username,
        email: entity.email,
        created_at: entity.created_at,
    }
}

pub fn custom_ingredient_to_contract(entity: entity::custom_ingredients::Model) -> CustomIngredient {
    CustomIngredient {
        id: entity.id,
        user_id: entity.user_id,
        name: entity.name,
        ingredient_type: entity.ingredient_type,
    }
}

/// The collection row stores a reference to its `list_names` row; the caller
/// resolves that to the name string.
pub fn collection_to_contract(entity: entity::collections::Model, name: String) -> Collection {
    Collection {
        id: entity.id,
        user_id: entity.user_id,
        name,
        entries: entity.entries.0,
        created_at: entity.created_at,
    }
}

pub fn recipe_to_contract(entity: entity::recipes::Model) -> Recipe {
    Recipe {
        id: entity.id,
        user_id: entity.user_id,
        name: entity.name,
        entries: entity.entries.0,
        steps: entity.steps.0,
        created_at: entity.created_at,
    }
}
