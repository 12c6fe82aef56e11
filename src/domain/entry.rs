//! The matching/merge algebra over entry sequences.
//!
//! Everything here is pure: services load a row's entry sequence, run one of
//! these mutations, and persist the result. Two distinct matching predicates
//! exist on purpose: add/remove/move match the exact
//! `(name, unit, is_custom)` triple, while the cascade delete matches
//! `(name, is_custom = true)` across every unit.

use crate::contract::model::{Amount, QuantityEntry};
use crate::domain::error::DomainError;

/// Check an amount at entry-construction time: finite, positive, and below
/// `max`. Merged totals are not re-validated against this bound.
pub fn validate_amount(amount: Amount, max: f64) -> Result<(), DomainError> {
    if !amount.is_finite() {
        return Err(DomainError::invalid_amount(format!(
            "{} is not a number",
            amount
        )));
    }
    if amount.value() <= 0.0 {
        return Err(DomainError::invalid_amount(format!(
            "{} is not positive",
            amount
        )));
    }
    if amount.value() >= max {
        return Err(DomainError::invalid_amount(format!(
            "{} is at or above the maximum of {}",
            amount, max
        )));
    }
    Ok(())
}

/// Insert-or-merge: an entry sharing the composite key with an existing one
/// has its amount summed into it; otherwise the entry is appended.
pub fn upsert(entries: &mut Vec<QuantityEntry>, entry: QuantityEntry) {
    match entries.iter_mut().find(|e| {
        e.matches_key(
            &entry.ingredient_name,
            &entry.unit,
            entry.is_custom_ingredient,
        )
    }) {
        Some(existing) => existing.amount = existing.amount + entry.amount,
        None => entries.push(entry),
    }
}

/// Remove the entry matching the exact triple. Returns whether the sequence
/// changed; a miss leaves it untouched.
pub fn remove_exact(
    entries: &mut Vec<QuantityEntry>,
    name: &str,
    unit: &str,
    is_custom: bool,
) -> bool {
    match entries.iter().position(|e| e.matches_key(name, unit, is_custom)) {
        Some(idx) => {
            entries.remove(idx);
            true
        }
        None => false,
    }
}

/// Decrement the matching entry by `amount`, removing it outright when its
/// stored amount does not exceed the requested one. A miss is a no-op.
pub fn draw_down(
    entries: &mut Vec<QuantityEntry>,
    name: &str,
    unit: &str,
    is_custom: bool,
    amount: Amount,
) -> bool {
    let Some(idx) = entries.iter().position(|e| e.matches_key(name, unit, is_custom)) else {
        return false;
    };
    if entries[idx].amount <= amount {
        entries.remove(idx);
    } else {
        entries[idx].amount = entries[idx].amount - amount;
    }
    true
}

/// Cascade-delete predicate: drop every entry for a custom ingredient with
/// this name, whatever its unit. Returns whether the sequence changed.
pub fn purge_custom(entries: &mut Vec<QuantityEntry>, name: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| !(e.is_custom_ingredient && e.ingredient_name == name));
    entries.len() != before
}
