//! The contract trait exercised end to end through the local gateway.

mod common;

use std::sync::Arc;

use pantry_tracker::contract::model::{Amount, NewUser};
use pantry_tracker::{PantryApi, PantryConfig, PantryError, PantryLocalClient};

async fn create_test_client() -> Arc<dyn PantryApi> {
    let env = common::setup().await;
    Arc::new(PantryLocalClient::new(env.db.clone(), PantryConfig::default()))
}

#[tokio::test]
async fn grocery_flow_through_the_contract_trait() {
    let client = create_test_client().await;

    let user = client
        .create_user(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();

    let grocery = client
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();
    assert_eq!(grocery.entries.len(), 1);

    let grocery = client
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(100), "g", false)
        .await
        .unwrap();
    assert_eq!(grocery.entries[0].amount, Amount::Int(600));

    let grocery = client
        .remove_entry(user.id, "Grocery", "Flour", "g", false)
        .await
        .unwrap();
    assert!(grocery.entries.is_empty());

    let recipe = client.get_or_create_recipe(user.id, "Bread").await.unwrap();
    let recipe = client.add_step(user.id, &recipe.name, "Knead.").await.unwrap();
    assert_eq!(recipe.steps, vec!["Knead."]);
}

#[tokio::test]
async fn domain_errors_surface_as_contract_errors() {
    let client = create_test_client().await;
    let user = client
        .create_user(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();

    let err = client
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(10_000), "g", false)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PantryError>(),
        Some(PantryError::InvalidAmount { .. })
    ));

    let err = client
        .add_entry(user.id, "Grocery", "Plutonium", Amount::Int(1), "g", false)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PantryError>(),
        Some(PantryError::NotFound {
            entity: "ingredient",
            ..
        })
    ));

    for i in 0..8 {
        client
            .get_or_create_collection(user.id, &format!("List {i}"))
            .await
            .unwrap();
    }
    let err = client
        .get_or_create_collection(user.id, "One Too Many")
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PantryError>(),
        Some(PantryError::LimitExceeded { max: 10 })
    ));

    let err = client
        .create_custom_ingredient(user.id, "Flour", "Baking")
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PantryError>(),
        Some(PantryError::Duplicate { .. })
    ));
}
