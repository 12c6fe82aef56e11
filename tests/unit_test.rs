use pantry_tracker::contract::model::{Amount, QuantityEntry};

#[test]
fn amount_arithmetic_preserves_representation() {
    assert_eq!(Amount::Int(2) + Amount::Int(3), Amount::Int(5));
    assert_eq!(Amount::Int(5) - Amount::Int(3), Amount::Int(2));

    assert_eq!(Amount::Int(2) + Amount::Float(0.5), Amount::Float(2.5));
    assert_eq!(Amount::Float(2.5) + Amount::Int(2), Amount::Float(4.5));
    assert_eq!(Amount::Float(1.0) + Amount::Float(2.0), Amount::Float(3.0));
}

#[test]
fn amount_ordering_spans_representations() {
    assert!(Amount::Int(2) < Amount::Float(2.5));
    assert!(Amount::Float(3.0) > Amount::Int(2));
    assert!(Amount::Int(100) <= Amount::Int(100));
    assert!(Amount::Float(2.0) <= Amount::Int(2));
}

#[test]
fn amount_serde_is_untagged() {
    assert_eq!(serde_json::to_string(&Amount::Int(500)).unwrap(), "500");
    assert_eq!(serde_json::to_string(&Amount::Float(2.5)).unwrap(), "2.5");

    let int: Amount = serde_json::from_str("500").unwrap();
    assert_eq!(int, Amount::Int(500));
    let float: Amount = serde_json::from_str("2.5").unwrap();
    assert_eq!(float, Amount::Float(2.5));
}

#[test]
fn entry_round_trips_as_a_flat_record() {
    let entry = QuantityEntry {
        ingredient_name: "Flour".to_string(),
        ingredient_type: "Baking".to_string(),
        amount: Amount::Int(500),
        unit: "g".to_string(),
        is_custom_ingredient: false,
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["ingredient_name"], "Flour");
    assert_eq!(json["amount"], 500);
    assert_eq!(json["is_custom_ingredient"], false);

    let back: QuantityEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn composite_key_matching_is_exact() {
    let entry = QuantityEntry {
        ingredient_name: "Flour".to_string(),
        ingredient_type: "Baking".to_string(),
        amount: Amount::Int(500),
        unit: "g".to_string(),
        is_custom_ingredient: false,
    };

    assert!(entry.matches_key("Flour", "g", false));
    assert!(!entry.matches_key("Flour", "g", true));
    assert!(!entry.matches_key("Flour", "cup", false));
    assert!(!entry.matches_key("flour", "g", false));
}
