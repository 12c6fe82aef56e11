use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use pantry_tracker::contract::model::{NewUser, User};
use pantry_tracker::domain::{
    catalog::CatalogService, collections::CollectionService, ledger::LedgerService,
    recipes::RecipeService, users::UserService, PantryConfig,
};
use pantry_tracker::infra::storage::migrations::Migrator;

/// Create a fresh test database for each test
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// All domain services over one fresh database, with a seeded catalog.
pub struct TestEnv {
    pub users: UserService,
    pub catalog: CatalogService,
    pub collections: CollectionService,
    pub ledger: LedgerService,
    pub recipes: RecipeService,
    pub db: DatabaseConnection,
}

pub async fn setup() -> TestEnv {
    let db = create_test_db().await;
    let config = PantryConfig::default();

    let env = TestEnv {
        users: UserService::new(db.clone(), config.clone()),
        catalog: CatalogService::new(db.clone()),
        collections: CollectionService::new(db.clone(), config.clone()),
        ledger: LedgerService::new(db.clone(), config.clone()),
        recipes: RecipeService::new(db.clone(), config),
        db,
    };

    for (name, kind) in [
        ("Flour", "Baking"),
        ("Sugar", "Baking"),
        ("Milk", "Dairy"),
        ("Salt", "Seasoning"),
    ] {
        env.catalog
            .ensure_ingredient(name, kind)
            .await
            .expect("Failed to seed ingredient");
    }
    for unit in ["g", "ml", "cup", "tbsp"] {
        env.catalog
            .ensure_unit(unit)
            .await
            .expect("Failed to seed unit");
    }

    env
}

pub async fn create_user(env: &TestEnv, username: &str) -> User {
    env.users
        .create_user(NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        })
        .await
        .expect("Failed to create test user")
}
