mod common;

use std::collections::HashSet;

use pantry_tracker::contract::model::{Amount, Collection, MoveRequest, QuantityEntry};
use pantry_tracker::domain::error::DomainError;

fn move_request(
    old_list: &str,
    old_name: &str,
    old_amount: Amount,
    new_list: &str,
    new_name: &str,
    new_amount: Amount,
) -> MoveRequest {
    MoveRequest {
        old_list: old_list.to_string(),
        old_name: old_name.to_string(),
        old_amount,
        old_unit: "g".to_string(),
        old_is_custom: false,
        new_list: new_list.to_string(),
        new_name: new_name.to_string(),
        new_amount,
        new_unit: "g".to_string(),
        new_is_custom: false,
    }
}

fn assert_unique_keys(entries: &[QuantityEntry]) {
    let keys: HashSet<(&str, &str, bool)> = entries
        .iter()
        .map(|e| {
            (
                e.ingredient_name.as_str(),
                e.unit.as_str(),
                e.is_custom_ingredient,
            )
        })
        .collect();
    assert_eq!(keys.len(), entries.len());
}

fn find<'a>(collections: &'a [Collection], name: &str) -> &'a Collection {
    collections
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no collection named {name}"))
}

#[tokio::test]
async fn add_then_merge_then_remove() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    let collection = env
        .ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();
    assert_eq!(collection.entries.len(), 1);
    assert_eq!(collection.entries[0].amount, Amount::Int(500));
    assert_eq!(collection.entries[0].ingredient_type, "Baking");

    let collection = env
        .ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(100), "g", false)
        .await
        .unwrap();
    assert_eq!(collection.entries.len(), 1);
    assert_eq!(collection.entries[0].amount, Amount::Int(600));

    let collection = env
        .ledger
        .remove_entry(user.id, "Grocery", "Flour", "g", false)
        .await
        .unwrap();
    assert!(collection.entries.is_empty());
}

#[tokio::test]
async fn add_appends_for_distinct_keys() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();
    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(2), "cup", false)
        .await
        .unwrap();
    let collection = env
        .ledger
        .add_entry(user.id, "Grocery", "Sugar", Amount::Int(200), "g", false)
        .await
        .unwrap();

    assert_eq!(collection.entries.len(), 3);
    assert_unique_keys(&collection.entries);
    // Creation order is preserved.
    assert_eq!(collection.entries[0].ingredient_name, "Flour");
    assert_eq!(collection.entries[0].unit, "g");
    assert_eq!(collection.entries[2].ingredient_name, "Sugar");
}

#[tokio::test]
async fn build_entry_validation() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    let err = env
        .ledger
        .build_entry(user.id, "Plutonium", Amount::Int(1), "g", false)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::IngredientNotFound { .. }));

    let err = env
        .ledger
        .build_entry(user.id, "Flour", Amount::Int(10_000), "g", false)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidAmount { .. }));

    let err = env
        .ledger
        .build_entry(user.id, "Flour", Amount::Float(12_345.0), "g", false)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidAmount { .. }));

    let entry = env
        .ledger
        .build_entry(user.id, "Flour", Amount::Float(9_999.99), "g", false)
        .await
        .unwrap();
    assert_eq!(entry.amount, Amount::Float(9_999.99));

    let err = env
        .ledger
        .build_entry(user.id, "Flour", Amount::Int(1), "furlong", false)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::UnitNotFound { .. }));

    // A custom-flagged identity resolves against the user's catalog only.
    let err = env
        .ledger
        .build_entry(user.id, "Flour", Amount::Int(1), "g", true)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::IngredientNotFound { .. }));
}

#[tokio::test]
async fn remove_miss_is_noop() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();
    env.ledger
        .add_entry(user.id, "Grocery", "Sugar", Amount::Int(200), "g", false)
        .await
        .unwrap();
    let before = env.collections.get_or_create(user.id, "Grocery").await.unwrap();

    // Wrong unit, wrong flag, wrong name: all misses.
    for (name, unit, custom) in [("Flour", "cup", false), ("Flour", "g", true), ("Milk", "g", false)]
    {
        let after = env
            .ledger
            .remove_entry(user.id, "Grocery", name, unit, custom)
            .await
            .unwrap();
        assert_eq!(after.entries, before.entries);
    }
}

#[tokio::test]
async fn move_full_amount_between_lists() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();

    let all = env
        .ledger
        .set_or_move_entry(
            user.id,
            move_request(
                "Grocery",
                "Flour",
                Amount::Int(500),
                "Pantry",
                "Flour",
                Amount::Int(500),
            ),
        )
        .await
        .unwrap();

    assert!(find(&all, "Grocery").entries.is_empty());
    let pantry = find(&all, "Pantry");
    assert_eq!(pantry.entries.len(), 1);
    assert_eq!(pantry.entries[0].amount, Amount::Int(500));
}

#[tokio::test]
async fn move_partial_amount_decrements_source() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();

    let all = env
        .ledger
        .set_or_move_entry(
            user.id,
            move_request(
                "Grocery",
                "Flour",
                Amount::Int(200),
                "Pantry",
                "Flour",
                Amount::Int(200),
            ),
        )
        .await
        .unwrap();

    assert_eq!(find(&all, "Grocery").entries[0].amount, Amount::Int(300));
    assert_eq!(find(&all, "Pantry").entries[0].amount, Amount::Int(200));
}

#[tokio::test]
async fn move_merges_into_existing_destination_entry() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();
    env.ledger
        .add_entry(user.id, "Pantry", "Flour", Amount::Int(100), "g", false)
        .await
        .unwrap();

    let all = env
        .ledger
        .set_or_move_entry(
            user.id,
            move_request(
                "Grocery",
                "Flour",
                Amount::Int(500),
                "Pantry",
                "Flour",
                Amount::Int(500),
            ),
        )
        .await
        .unwrap();

    assert!(find(&all, "Grocery").entries.is_empty());
    let pantry = find(&all, "Pantry");
    assert_eq!(pantry.entries.len(), 1);
    assert_eq!(pantry.entries[0].amount, Amount::Int(600));
}

#[tokio::test]
async fn same_list_edit_sees_draw_down_before_merge() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();

    // Edit in place: replace 500 g with 300 g under the same key.
    let all = env
        .ledger
        .set_or_move_entry(
            user.id,
            move_request(
                "Grocery",
                "Flour",
                Amount::Int(500),
                "Grocery",
                "Flour",
                Amount::Int(300),
            ),
        )
        .await
        .unwrap();

    let grocery = find(&all, "Grocery");
    assert_eq!(grocery.entries.len(), 1);
    assert_eq!(grocery.entries[0].amount, Amount::Int(300));
    assert_unique_keys(&grocery.entries);
}

#[tokio::test]
async fn move_may_change_identity_and_amounts() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();

    // "Move 50 of X from list A" into "100 of Y in list B" in one call.
    let mut request = move_request(
        "Grocery",
        "Flour",
        Amount::Int(50),
        "Pantry",
        "Milk",
        Amount::Int(100),
    );
    request.new_unit = "ml".to_string();
    let all = env.ledger.set_or_move_entry(user.id, request).await.unwrap();

    assert_eq!(find(&all, "Grocery").entries[0].amount, Amount::Int(450));
    let pantry = find(&all, "Pantry");
    assert_eq!(pantry.entries[0].ingredient_name, "Milk");
    assert_eq!(pantry.entries[0].unit, "ml");
    assert_eq!(pantry.entries[0].amount, Amount::Int(100));
}

#[tokio::test]
async fn move_with_missing_source_entry_still_adds_to_destination() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    let all = env
        .ledger
        .set_or_move_entry(
            user.id,
            move_request(
                "Grocery",
                "Flour",
                Amount::Int(500),
                "Pantry",
                "Flour",
                Amount::Int(500),
            ),
        )
        .await
        .unwrap();

    assert!(find(&all, "Grocery").entries.is_empty());
    assert_eq!(find(&all, "Pantry").entries[0].amount, Amount::Int(500));
}

#[tokio::test]
async fn failed_destination_build_leaves_source_untouched() {
    let env = common::setup().await;
    let user = common::create_user(&env, "alice").await;

    env.ledger
        .add_entry(user.id, "Grocery", "Flour", Amount::Int(500), "g", false)
        .await
        .unwrap();

    let err = env
        .ledger
        .set_or_move_entry(
            user.id,
            move_request(
                "Grocery",
                "Flour",
                Amount::Int(500),
                "Pantry",
                "Flour",
                Amount::Int(10_000),
            ),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidAmount { .. }));

    let grocery = env.collections.get_or_create(user.id, "Grocery").await.unwrap();
    assert_eq!(grocery.entries[0].amount, Amount::Int(500));
    let pantry = env.collections.get_or_create(user.id, "Pantry").await.unwrap();
    assert!(pantry.entries.is_empty());
}
