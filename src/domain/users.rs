use sea_orm::DatabaseConnection;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewUser, User};
use crate::domain::error::DomainError;
use crate::domain::{collections, db_err, PantryConfig};
use crate::infra::storage::entity::{
    collections as collection_rows, custom_ingredients, recipes as recipe_rows, users,
};
use crate::infra::storage::mapper;

/// Domain service for the user lifecycle.
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
    config: PantryConfig,
}

impl UserService {
    pub fn new(db: DatabaseConnection, config: PantryConfig) -> Self {
        Self { db, config }
    }

    /// Create a user and their default collections.
    #[instrument(
        name = "pantry.users.create_user",
        skip(self),
        fields(username = %new_user.username)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        if users::find_by_username(&self.db, &new_user.username)
            .await
            .map_err(db_err)?
            .is_some()
        {
            return Err(DomainError::username_taken(new_user.username));
        }

        let row = users::create(&self.db, new_user.username, new_user.email)
            .await
            .map_err(db_err)?;
        for name in collections::DEFAULT_COLLECTIONS {
            collections::ensure(&self.db, &self.config, row.id, name, Vec::new()).await?;
        }

        info!(user_id = %row.id, "Created user");
        Ok(mapper::user_to_contract(row))
    }

    #[instrument(name = "pantry.users.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        let row = users::find_by_id(&self.db, id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        Ok(mapper::user_to_contract(row))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = users::find_by_username(&self.db, username)
            .await
            .map_err(db_err)?;
        Ok(row.map(mapper::user_to_contract))
    }

    /// Delete a user together with their collections, recipes, and custom
    /// ingredient definitions.
    #[instrument(name = "pantry.users.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        collection_rows::delete_for_user(&self.db, id)
            .await
            .map_err(db_err)?;
        recipe_rows::delete_for_user(&self.db, id)
            .await
            .map_err(db_err)?;
        custom_ingredients::delete_for_user(&self.db, id)
            .await
            .map_err(db_err)?;

        let deleted = users::delete(&self.db, id).await.map_err(db_err)?;
        if !deleted {
            return Err(DomainError::user_not_found(id));
        }
        info!("Deleted user");
        Ok(())
    }
}
