//! Recipes: the recipe-scoped ledger (add/remove only, no move) and the
//! 1-indexed step editor.

use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Amount, Recipe};
use crate::domain::error::DomainError;
use crate::domain::{db_err, entry, ledger, PantryConfig};
use crate::infra::storage::entity::recipes as recipe_rows;
use crate::infra::storage::{mapper, EntryList, StepList};

/// Domain service for recipes, their ingredient entries, and their steps.
#[derive(Clone)]
pub struct RecipeService {
    db: DatabaseConnection,
    config: PantryConfig,
}

impl RecipeService {
    pub fn new(db: DatabaseConnection, config: PantryConfig) -> Self {
        Self { db, config }
    }

    async fn require(&self, user_id: Uuid, name: &str) -> Result<recipe_rows::Model, DomainError> {
        recipe_rows::find_one(&self.db, user_id, name)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::recipe_not_found(name))
    }

    #[instrument(
        name = "pantry.recipes.get_or_create",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn get_or_create(&self, user_id: Uuid, name: &str) -> Result<Recipe, DomainError> {
        if let Some(existing) = recipe_rows::find_one(&self.db, user_id, name)
            .await
            .map_err(db_err)?
        {
            return Ok(mapper::recipe_to_contract(existing));
        }
        let created = recipe_rows::create(&self.db, user_id, name)
            .await
            .map_err(db_err)?;
        info!(recipe_id = %created.id, "Created recipe");
        Ok(mapper::recipe_to_contract(created))
    }

    #[instrument(name = "pantry.recipes.list", skip(self), fields(user_id = %user_id))]
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Recipe>, DomainError> {
        let rows = recipe_rows::list_for_user(&self.db, user_id)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(mapper::recipe_to_contract).collect())
    }

    /// Delete a recipe; a miss is a no-op. Returns the remaining recipes.
    #[instrument(
        name = "pantry.recipes.delete",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn delete(&self, user_id: Uuid, name: &str) -> Result<Vec<Recipe>, DomainError> {
        if let Some(row) = recipe_rows::find_one(&self.db, user_id, name)
            .await
            .map_err(db_err)?
        {
            recipe_rows::delete(&self.db, row.id).await.map_err(db_err)?;
            info!(recipe_id = %row.id, "Deleted recipe");
        }
        self.list(user_id).await
    }

    /// Insert-or-merge an ingredient entry, same contract as the collection
    /// ledger's add.
    #[instrument(
        name = "pantry.recipes.add_ingredient",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn add_ingredient(
        &self,
        user_id: Uuid,
        recipe: &str,
        ingredient: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> Result<Recipe, DomainError> {
        let new_entry = ledger::build_entry(
            &self.db,
            &self.config,
            user_id,
            ingredient,
            amount,
            unit,
            is_custom,
        )
        .await?;
        let row = self.require(user_id, recipe).await?;

        let mut entries = row.entries.0;
        entry::upsert(&mut entries, new_entry);
        let updated = recipe_rows::update_entries(&self.db, row.id, EntryList(entries))
            .await
            .map_err(db_err)?;
        debug!("Added recipe ingredient");
        Ok(mapper::recipe_to_contract(updated))
    }

    /// Remove the entry matching the exact `(name, unit, custom)` triple; a
    /// miss leaves the recipe untouched.
    #[instrument(
        name = "pantry.recipes.remove_ingredient",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn remove_ingredient(
        &self,
        user_id: Uuid,
        recipe: &str,
        ingredient: &str,
        unit: &str,
        is_custom: bool,
    ) -> Result<Recipe, DomainError> {
        let row = self.require(user_id, recipe).await?;

        let mut entries = row.entries.0.clone();
        if !entry::remove_exact(&mut entries, ingredient, unit, is_custom) {
            return Ok(mapper::recipe_to_contract(row));
        }
        let updated = recipe_rows::update_entries(&self.db, row.id, EntryList(entries))
            .await
            .map_err(db_err)?;
        debug!("Removed recipe ingredient");
        Ok(mapper::recipe_to_contract(updated))
    }

    /// Append a step unconditionally.
    #[instrument(
        name = "pantry.recipes.add_step",
        skip(self, text),
        fields(user_id = %user_id)
    )]
    pub async fn add_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        text: &str,
    ) -> Result<Recipe, DomainError> {
        let row = self.require(user_id, recipe).await?;

        let mut steps = row.steps.0;
        steps.push(text.to_string());
        let updated = recipe_rows::update_steps(&self.db, row.id, StepList(steps))
            .await
            .map_err(db_err)?;
        Ok(mapper::recipe_to_contract(updated))
    }

    /// Replace the step at a 1-based position; out-of-range positions leave
    /// the steps untouched.
    #[instrument(
        name = "pantry.recipes.edit_step",
        skip(self, text),
        fields(user_id = %user_id)
    )]
    pub async fn edit_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        position: usize,
        text: &str,
    ) -> Result<Recipe, DomainError> {
        let row = self.require(user_id, recipe).await?;

        let mut steps = row.steps.0.clone();
        if position == 0 || position > steps.len() {
            return Ok(mapper::recipe_to_contract(row));
        }
        steps[position - 1] = text.to_string();
        let updated = recipe_rows::update_steps(&self.db, row.id, StepList(steps))
            .await
            .map_err(db_err)?;
        Ok(mapper::recipe_to_contract(updated))
    }

    /// Remove the step at a 1-based position, shifting later steps down;
    /// out-of-range positions leave the steps untouched.
    #[instrument(
        name = "pantry.recipes.remove_step",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn remove_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        position: usize,
    ) -> Result<Recipe, DomainError> {
        let row = self.require(user_id, recipe).await?;

        let mut steps = row.steps.0.clone();
        if position == 0 || position > steps.len() {
            return Ok(mapper::recipe_to_contract(row));
        }
        steps.remove(position - 1);
        let updated = recipe_rows::update_steps(&self.db, row.id, StepList(steps))
            .await
            .map_err(db_err)?;
        Ok(mapper::recipe_to_contract(updated))
    }
}
