use thiserror::Error;

/// Errors that are safe to expose to callers of the contract API
#[derive(Error, Debug, Clone)]
pub enum PantryError {
    #[error("{entity} not found: {name}")]
    NotFound { entity: &'static str, name: String },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Collection limit exceeded (max: {max})")]
    LimitExceeded { max: usize },

    #[error("Name already in use: '{name}'")]
    Duplicate { name: String },

    #[error("Internal error")]
    Internal,
}

impl PantryError {
    pub fn not_found(entity: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            name: name.into(),
        }
    }

    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    pub fn limit_exceeded(max: usize) -> Self {
        Self::LimitExceeded { max }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
