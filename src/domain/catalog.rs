//! Ingredient and unit catalogs, plus the cascade that runs when a custom
//! ingredient definition is deleted.

use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{CustomIngredient, IngredientRef};
use crate::domain::error::DomainError;
use crate::domain::{db_err, entry};
use crate::infra::storage::entity::{
    collections as collection_rows, custom_ingredients, ingredients, measurements,
    recipes as recipe_rows,
};
use crate::infra::storage::{mapper, EntryList};

pub(crate) async fn resolve_common(
    db: &DatabaseConnection,
    name: &str,
) -> Result<IngredientRef, DomainError> {
    ingredients::find_by_name(db, name)
        .await
        .map_err(db_err)?
        .map(|m| IngredientRef {
            name: m.name,
            ingredient_type: m.ingredient_type,
        })
        .ok_or_else(|| DomainError::ingredient_not_found(name))
}

pub(crate) async fn resolve_custom(
    db: &DatabaseConnection,
    user_id: Uuid,
    name: &str,
) -> Result<IngredientRef, DomainError> {
    custom_ingredients::find_one(db, user_id, name)
        .await
        .map_err(db_err)?
        .map(|m| IngredientRef {
            name: m.name,
            ingredient_type: m.ingredient_type,
        })
        .ok_or_else(|| DomainError::ingredient_not_found(name))
}

/// Resolve an identity against the catalog an entry claims to come from.
pub(crate) async fn resolve_ingredient(
    db: &DatabaseConnection,
    user_id: Uuid,
    name: &str,
    is_custom: bool,
) -> Result<IngredientRef, DomainError> {
    if is_custom {
        resolve_custom(db, user_id, name).await
    } else {
        resolve_common(db, name).await
    }
}

pub(crate) async fn resolve_unit(db: &DatabaseConnection, name: &str) -> Result<String, DomainError> {
    measurements::find_by_name(db, name)
        .await
        .map_err(db_err)?
        .map(|m| m.name)
        .ok_or_else(|| DomainError::unit_not_found(name))
}

/// Domain service for the ingredient/unit catalogs.
#[derive(Clone)]
pub struct CatalogService {
    db: DatabaseConnection,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get-or-create a common-catalog ingredient. An existing row wins and
    /// keeps its type.
    #[instrument(name = "pantry.catalog.ensure_ingredient", skip(self))]
    pub async fn ensure_ingredient(
        &self,
        name: &str,
        ingredient_type: &str,
    ) -> Result<IngredientRef, DomainError> {
        let row = ingredients::get_or_create(&self.db, name, ingredient_type)
            .await
            .map_err(db_err)?;
        Ok(IngredientRef {
            name: row.name,
            ingredient_type: row.ingredient_type,
        })
    }

    /// Get-or-create a unit name.
    #[instrument(name = "pantry.catalog.ensure_unit", skip(self))]
    pub async fn ensure_unit(&self, name: &str) -> Result<String, DomainError> {
        let row = measurements::get_or_create(&self.db, name)
            .await
            .map_err(db_err)?;
        Ok(row.name)
    }

    pub async fn resolve_unit(&self, name: &str) -> Result<String, DomainError> {
        resolve_unit(&self.db, name).await
    }

    /// Create a user-owned definition. The name must not collide with the
    /// common catalog; within `(user, name)` this is get-or-create.
    #[instrument(
        name = "pantry.catalog.create_custom_ingredient",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn create_custom_ingredient(
        &self,
        user_id: Uuid,
        name: &str,
        ingredient_type: &str,
    ) -> Result<CustomIngredient, DomainError> {
        if ingredients::find_by_name(&self.db, name)
            .await
            .map_err(db_err)?
            .is_some()
        {
            return Err(DomainError::duplicate_ingredient(name));
        }
        let row = custom_ingredients::get_or_create(&self.db, user_id, name, ingredient_type)
            .await
            .map_err(db_err)?;
        Ok(mapper::custom_ingredient_to_contract(row))
    }

    pub async fn list_custom_ingredients(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CustomIngredient>, DomainError> {
        let rows = custom_ingredients::list_for_user(&self.db, user_id)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(mapper::custom_ingredient_to_contract)
            .collect())
    }

    /// Delete a definition (no-op when absent) and purge every matching
    /// entry from all of the user's collections and recipes. Matching is by
    /// name and the custom flag only, never by unit. Returns the remaining
    /// definitions.
    #[instrument(
        name = "pantry.catalog.delete_custom_ingredient",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn delete_custom_ingredient(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<Vec<CustomIngredient>, DomainError> {
        let deleted = custom_ingredients::delete(&self.db, user_id, name)
            .await
            .map_err(db_err)?;
        if deleted {
            info!("Deleted custom ingredient definition");
        }

        for row in collection_rows::list_for_user(&self.db, user_id)
            .await
            .map_err(db_err)?
        {
            let mut entries = row.entries.0;
            if entry::purge_custom(&mut entries, name) {
                collection_rows::update_entries(&self.db, row.id, EntryList(entries))
                    .await
                    .map_err(db_err)?;
                debug!(collection_id = %row.id, "Purged entries from collection");
            }
        }

        for row in recipe_rows::list_for_user(&self.db, user_id)
            .await
            .map_err(db_err)?
        {
            let mut entries = row.entries.0;
            if entry::purge_custom(&mut entries, name) {
                recipe_rows::update_entries(&self.db, row.id, EntryList(entries))
                    .await
                    .map_err(db_err)?;
                debug!(recipe_id = %row.id, "Purged entries from recipe");
            }
        }

        self.list_custom_ingredients(user_id).await
    }
}
