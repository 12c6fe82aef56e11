use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quantity that remembers whether it came from an integer or a real
/// number. Arithmetic keeps integer operands integral; mixing an integer
/// with a float yields a float. Comparison (including equality) is by
/// numeric value, so `Int(2) == Float(2.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Int(i64),
    Float(f64),
}

impl Amount {
    /// Numeric value regardless of representation.
    pub fn value(self) -> f64 {
        match self {
            Amount::Int(v) => v as f64,
            Amount::Float(v) => v,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Amount::Int(_) => true,
            Amount::Float(v) => v.is_finite(),
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Int(a), Amount::Int(b)) => Amount::Int(a + b),
            (a, b) => Amount::Float(a.value() + b.value()),
        }
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Int(a), Amount::Int(b)) => Amount::Int(a - b),
            (a, b) => Amount::Float(a.value() - b.value()),
        }
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Amount) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Amount) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl From<i64> for Amount {
    fn from(v: i64) -> Self {
        Amount::Int(v)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Amount::Float(v)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Int(v) => write!(f, "{}", v),
            Amount::Float(v) => write!(f, "{}", v),
        }
    }
}

/// One ingredient-quantity record inside a collection or recipe.
///
/// Entries are denormalized snapshots of the catalog rows they were built
/// from: renaming an ingredient or unit later does not rewrite stored
/// entries. Within one sequence the composite key
/// `(ingredient_name, unit, is_custom_ingredient)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityEntry {
    pub ingredient_name: String,
    pub ingredient_type: String,
    pub amount: Amount,
    pub unit: String,
    pub is_custom_ingredient: bool,
}

impl QuantityEntry {
    /// Exact composite-key match used by add/remove/move.
    pub fn matches_key(&self, name: &str, unit: &str, is_custom: bool) -> bool {
        self.ingredient_name == name && self.unit == unit && self.is_custom_ingredient == is_custom
    }
}

/// Pure user model for callers (no storage types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// A resolved catalog ingredient: the `(name, type)` pair an entry
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRef {
    pub name: String,
    pub ingredient_type: String,
}

/// A user-owned ingredient definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomIngredient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub ingredient_type: String,
}

/// A named, per-user ordered sequence of quantity entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub entries: Vec<QuantityEntry>,
    pub created_at: DateTime<Utc>,
}

/// A per-user recipe: ingredient entries plus ordered instruction steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub entries: Vec<QuantityEntry>,
    pub steps: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Arguments for the combined decrement-from-source / merge-into-destination
/// mutation. The two sides may name different collections, ingredients,
/// units, and amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub old_list: String,
    pub old_name: String,
    pub old_amount: Amount,
    pub old_unit: String,
    pub old_is_custom: bool,
    pub new_list: String,
    pub new_name: String,
    pub new_amount: Amount,
    pub new_unit: String,
    pub new_is_custom: bool,
}
