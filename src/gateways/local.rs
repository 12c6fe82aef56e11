use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::contract::{
    client::PantryApi,
    error::PantryError,
    model::{Amount, Collection, CustomIngredient, MoveRequest, NewUser, Recipe, User},
};
use crate::domain::{
    catalog::CatalogService, collections::CollectionService, error::DomainError,
    ledger::LedgerService, recipes::RecipeService, users::UserService, PantryConfig,
};

/// Local implementation of the PantryApi trait that delegates to the domain
/// services
pub struct PantryLocalClient {
    users: UserService,
    catalog: CatalogService,
    collections: CollectionService,
    ledger: LedgerService,
    recipes: RecipeService,
}

impl PantryLocalClient {
    pub fn new(db: DatabaseConnection, config: PantryConfig) -> Self {
        Self {
            users: UserService::new(db.clone(), config.clone()),
            catalog: CatalogService::new(db.clone()),
            collections: CollectionService::new(db.clone(), config.clone()),
            ledger: LedgerService::new(db.clone(), config.clone()),
            recipes: RecipeService::new(db, config),
        }
    }
}

#[async_trait]
impl PantryApi for PantryLocalClient {
    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        self.users
            .create_user(new_user)
            .await
            .map_err(map_domain_error)
    }

    async fn get_user(&self, id: Uuid) -> anyhow::Result<User> {
        self.users.get_user(id).await.map_err(map_domain_error)
    }

    async fn delete_user(&self, id: Uuid) -> anyhow::Result<()> {
        self.users.delete_user(id).await.map_err(map_domain_error)
    }

    async fn list_collections(&self, user_id: Uuid) -> anyhow::Result<Vec<Collection>> {
        self.collections
            .list(user_id)
            .await
            .map_err(map_domain_error)
    }

    async fn get_or_create_collection(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Collection> {
        self.collections
            .get_or_create(user_id, name)
            .await
            .map_err(map_domain_error)
    }

    async fn delete_collection(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Vec<Collection>> {
        self.collections
            .delete(user_id, name)
            .await
            .map_err(map_domain_error)
    }

    async fn rename_collection(
        &self,
        user_id: Uuid,
        old_name: &str,
        new_name: &str,
    ) -> anyhow::Result<Collection> {
        self.collections
            .rename(user_id, old_name, new_name)
            .await
            .map_err(map_domain_error)
    }

    async fn add_entry(
        &self,
        user_id: Uuid,
        list: &str,
        ingredient: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Collection> {
        self.ledger
            .add_entry(user_id, list, ingredient, amount, unit, is_custom)
            .await
            .map_err(map_domain_error)
    }

    async fn remove_entry(
        &self,
        user_id: Uuid,
        list: &str,
        ingredient: &str,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Collection> {
        self.ledger
            .remove_entry(user_id, list, ingredient, unit, is_custom)
            .await
            .map_err(map_domain_error)
    }

    async fn set_or_move_entry(
        &self,
        user_id: Uuid,
        request: MoveRequest,
    ) -> anyhow::Result<Vec<Collection>> {
        self.ledger
            .set_or_move_entry(user_id, request)
            .await
            .map_err(map_domain_error)
    }

    async fn create_custom_ingredient(
        &self,
        user_id: Uuid,
        name: &str,
        ingredient_type: &str,
    ) -> anyhow::Result<CustomIngredient> {
        self.catalog
            .create_custom_ingredient(user_id, name, ingredient_type)
            .await
            .map_err(map_domain_error)
    }

    async fn list_custom_ingredients(
        &self,
        user_id: Uuid,
    ) -> anyhow::Result<Vec<CustomIngredient>> {
        self.catalog
            .list_custom_ingredients(user_id)
            .await
            .map_err(map_domain_error)
    }

    async fn delete_custom_ingredient(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Vec<CustomIngredient>> {
        self.catalog
            .delete_custom_ingredient(user_id, name)
            .await
            .map_err(map_domain_error)
    }

    async fn get_or_create_recipe(&self, user_id: Uuid, name: &str) -> anyhow::Result<Recipe> {
        self.recipes
            .get_or_create(user_id, name)
            .await
            .map_err(map_domain_error)
    }

    async fn list_recipes(&self, user_id: Uuid) -> anyhow::Result<Vec<Recipe>> {
        self.recipes.list(user_id).await.map_err(map_domain_error)
    }

    async fn delete_recipe(&self, user_id: Uuid, name: &str) -> anyhow::Result<Vec<Recipe>> {
        self.recipes
            .delete(user_id, name)
            .await
            .map_err(map_domain_error)
    }

    async fn add_recipe_ingredient(
        &self,
        user_id: Uuid,
        recipe: &str,
        ingredient: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Recipe> {
        self.recipes
            .add_ingredient(user_id, recipe, ingredient, amount, unit, is_custom)
            .await
            .map_err(map_domain_error)
    }

    async fn remove_recipe_ingredient(
        &self,
        user_id: Uuid,
        recipe: &str,
        ingredient: &str,
        unit: &str,
        is_custom: bool,
    ) -> anyhow::Result<Recipe> {
        self.recipes
            .remove_ingredient(user_id, recipe, ingredient, unit, is_custom)
            .await
            .map_err(map_domain_error)
    }

    async fn add_step(&self, user_id: Uuid, recipe: &str, text: &str) -> anyhow::Result<Recipe> {
        self.recipes
            .add_step(user_id, recipe, text)
            .await
            .map_err(map_domain_error)
    }

    async fn edit_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        position: usize,
        text: &str,
    ) -> anyhow::Result<Recipe> {
        self.recipes
            .edit_step(user_id, recipe, position, text)
            .await
            .map_err(map_domain_error)
    }

    async fn remove_step(
        &self,
        user_id: Uuid,
        recipe: &str,
        position: usize,
    ) -> anyhow::Result<Recipe> {
        self.recipes
            .remove_step(user_id, recipe, position)
            .await
            .map_err(map_domain_error)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::UserNotFound { id } => PantryError::not_found("user", id.to_string()),
        DomainError::UsernameTaken { username } => PantryError::duplicate(username),
        DomainError::CollectionNotFound { name } => PantryError::not_found("collection", name),
        DomainError::RecipeNotFound { name } => PantryError::not_found("recipe", name),
        DomainError::IngredientNotFound { name } => PantryError::not_found("ingredient", name),
        DomainError::UnitNotFound { name } => PantryError::not_found("unit", name),
        DomainError::InvalidAmount { message } => PantryError::invalid_amount(message),
        DomainError::CollectionLimitExceeded { max } => PantryError::limit_exceeded(max),
        DomainError::DuplicateIngredient { name } => PantryError::duplicate(name),
        DomainError::Database { .. } => PantryError::internal(),
    };
    anyhow::Error::new(contract_error)
}
