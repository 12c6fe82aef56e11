use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{
    Amount, Collection, CustomIngredient, MoveRequest, NewUser, Recipe, User,
};

/// Public API trait for the pantry tracker that a request layer can use
///
/// Errors are `anyhow::Error` wrapping a [`crate::contract::PantryError`].
#[async_trait]
pub trait PantryApi: Send + Sync {
    // --- users ---

    /// Create a user; also creates the default "Grocery" and "Pantry"
    /// collections.
    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Get a user by id
    async fn get_user(&self, id: Uuid) -> anyhow::Result<User>;

    /// Delete a user and everything they own
    async fn delete_user(&self, id: Uuid) -> anyhow::Result<()>;

    // --- collections ---

    /// List a user's collections in creation order
    async fn list_collections(&self, user_id: Uuid) -> anyhow::Result<Vec<Collection>>;

    /// Idempotent get-or-create, subject to the per-user cap
    async fn get_or_create_collection(&self, user_id: Uuid, name: &str)
        -> anyhow::Result<Collection>;

    /// Delete a collection (no-op when absent); returns the remaining ones
    async fn delete_collection(&self, user_id: Uuid, name: &str)
        -> anyhow::Result<Vec<Collection>>;

    /// Rename a collection, carrying its entries to the new name
    async fn rename_collection(
        &self,
        user_id: Uuid,
        old_name: &str,
        new_name: &str,
    ) -> anyhow::Result<Collection>;

    // --- ledger ---

    /// Insert-or-merge an entry into a collection
    async fn add_entry(
        &self,
        user_id: Uuid,
        list: &str,
        ingredient: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Collection>;

    /// Remove the entry matching the exact `(name, unit, custom)` triple;
    /// no-op on miss
    async fn remove_entry(
        &self,
        user_id: Uuid,
        list: &str,
        ingredient: &str,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Collection>;

    /// Decrement-from-source plus merge-into-destination; returns all of the
    /// user's collections
    async fn set_or_move_entry(
        &self,
        user_id: Uuid,
        request: MoveRequest,
    ) -> anyhow::Result<Vec<Collection>>;

    // --- custom ingredients ---

    /// Create a user-owned ingredient definition; fails when the name
    /// collides with a common-catalog ingredient
    async fn create_custom_ingredient(
        &self,
        user_id: Uuid,
        name: &str,
        ingredient_type: &str,
    ) -> anyhow::Result<CustomIngredient>;

    async fn list_custom_ingredients(&self, user_id: Uuid)
        -> anyhow::Result<Vec<CustomIngredient>>;

    /// Delete a definition and purge matching entries from every collection
    /// and recipe; returns the remaining definitions
    async fn delete_custom_ingredient(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Vec<CustomIngredient>>;

    // --- recipes ---

    async fn get_or_create_recipe(&self, user_id: Uuid, name: &str) -> anyhow::Result<Recipe>;

    async fn list_recipes(&self, user_id: Uuid) -> anyhow::Result<Vec<Recipe>>;

    /// Delete a recipe (no-op when absent); returns the remaining ones
    async fn delete_recipe(&self, user_id: Uuid, name: &str) -> anyhow::Result<Vec<Recipe>>;

    async fn add_recipe_ingredient(
        &self,
        user_id: Uuid,
        recipe: &str,
        ingredient: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Recipe>;

    async fn remove_recipe_ingredient(
        &self,
        user_id: Uuid,
        recipe: &str,
        ingredient: &str,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Recipe>;

    /// Append a step to a recipe
    async fn add_step(&self, user_id: Uuid, recipe: &str, text: &str) -> anyhow::Result<Recipe>;

    /// Replace the step at a 1-based position; out-of-range is a no-op
    async fn edit_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        position: usize,
        text: &str,
    ) -> anyhow::Result<Recipe>;

    /// Remove the step at a 1-based position; out-of-range is a no-op
    async fn remove_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        position: usize,
    ) -> anyhow::Result<Recipe>;
}
