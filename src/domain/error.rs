use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("Username '{username}' is already taken")]
    UsernameTaken { username: String },

    #[error("Collection not found: '{name}'")]
    CollectionNotFound { name: String },

    #[error("Recipe not found: '{name}'")]
    RecipeNotFound { name: String },

    #[error("Ingredient not found: '{name}'")]
    IngredientNotFound { name: String },

    #[error("Unknown unit: '{name}'")]
    UnitNotFound { name: String },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("User already owns the maximum of {max} collections")]
    CollectionLimitExceeded { max: usize },

    #[error("Ingredient '{name}' already exists in the common catalog")]
    DuplicateIngredient { name: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Self::CollectionNotFound { name: name.into() }
    }

    pub fn recipe_not_found(name: impl Into<String>) -> Self {
        Self::RecipeNotFound { name: name.into() }
    }

    pub fn ingredient_not_found(name: impl Into<String>) -> Self {
        Self::IngredientNotFound { name: name.into() }
    }

    pub fn unit_not_found(name: impl Into<String>) -> Self {
        Self::UnitNotFound { name: name.into() }
    }

    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    pub fn collection_limit_exceeded(max: usize) -> Self {
        Self::CollectionLimitExceeded { max }
    }

    pub fn duplicate_ingredient(name: impl Into<String>) -> Self {
        Self::DuplicateIngredient { name: name.into() }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
