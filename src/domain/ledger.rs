//! The ledger engine: add, remove, and set-or-move mutations over a
//! collection's entry sequence.

use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::contract::model::{Amount, Collection, MoveRequest, QuantityEntry};
use crate::domain::error::DomainError;
use crate::domain::{catalog, collections, db_err, entry, PantryConfig};
use crate::infra::storage::entity::collections as collection_rows;
use crate::infra::storage::{mapper, EntryList};

/// Resolve and validate everything an entry snapshots, before any row is
/// mutated: the ingredient identity, the amount bound, then the unit.
pub(crate) async fn build_entry(
    db: &DatabaseConnection,
    config: &PantryConfig,
    user_id: Uuid,
    name: &str,
    amount: Amount,
    unit: &str,
    is_custom: bool,
) -> Result<QuantityEntry, DomainError> {
    let ingredient = catalog::resolve_ingredient(db, user_id, name, is_custom).await?;
    entry::validate_amount(amount, config.max_entry_amount)?;
    let unit = catalog::resolve_unit(db, unit).await?;
    Ok(QuantityEntry {
        ingredient_name: ingredient.name,
        ingredient_type: ingredient.ingredient_type,
        amount,
        unit,
        is_custom_ingredient: is_custom,
    })
}

/// Domain service mutating collection entry sequences.
#[derive(Clone)]
pub struct LedgerService {
    db: DatabaseConnection,
    config: PantryConfig,
}

impl LedgerService {
    pub fn new(db: DatabaseConnection, config: PantryConfig) -> Self {
        Self { db, config }
    }

    /// Validate an identity/amount/unit triple into a snapshot entry without
    /// touching any collection.
    pub async fn build_entry(
        &self,
        user_id: Uuid,
        name: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> Result<QuantityEntry, DomainError> {
        build_entry(&self.db, &self.config, user_id, name, amount, unit, is_custom).await
    }

    /// Insert-or-merge an entry into a collection, creating the collection
    /// on first reference.
    #[instrument(
        name = "pantry.ledger.add_entry",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn add_entry(
        &self,
        user_id: Uuid,
        list: &str,
        ingredient: &str,
        amount: Amount,
        unit: &str,
        is_custom: bool,
    ) -> Result<Collection, DomainError> {
        let new_entry =
            build_entry(&self.db, &self.config, user_id, ingredient, amount, unit, is_custom)
                .await?;
        let row = collections::ensure(&self.db, &self.config, user_id, list, Vec::new()).await?;

        let mut entries = row.entries.0;
        entry::upsert(&mut entries, new_entry);
        let updated = collection_rows::update_entries(&self.db, row.id, EntryList(entries))
            .await
            .map_err(db_err)?;
        debug!("Added entry");
        Ok(mapper::collection_to_contract(updated, list.to_string()))
    }

    /// Remove the entry matching the exact `(name, unit, custom)` triple; a
    /// miss leaves the collection untouched.
    #[instrument(
        name = "pantry.ledger.remove_entry",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn remove_entry(
        &self,
        user_id: Uuid,
        list: &str,
        ingredient: &str,
        unit: &str,
        is_custom: bool,
    ) -> Result<Collection, DomainError> {
        let row = collections::ensure(&self.db, &self.config, user_id, list, Vec::new()).await?;

        let mut entries = row.entries.0.clone();
        if !entry::remove_exact(&mut entries, ingredient, unit, is_custom) {
            return Ok(mapper::collection_to_contract(row, list.to_string()));
        }
        let updated = collection_rows::update_entries(&self.db, row.id, EntryList(entries))
            .await
            .map_err(db_err)?;
        debug!("Removed entry");
        Ok(mapper::collection_to_contract(updated, list.to_string()))
    }

    /// Decrement (or remove) the source entry and insert-or-merge the
    /// destination entry, possibly across two collections. The destination
    /// entry is validated first; a failure there aborts with nothing
    /// changed. A missing source entry is advisory and skipped silently.
    /// Returns all of the user's collections so a caller can refresh its
    /// whole view.
    #[instrument(
        name = "pantry.ledger.set_or_move_entry",
        skip(self, request),
        fields(user_id = %user_id, old_list = %request.old_list, new_list = %request.new_list)
    )]
    pub async fn set_or_move_entry(
        &self,
        user_id: Uuid,
        request: MoveRequest,
    ) -> Result<Vec<Collection>, DomainError> {
        let new_entry = build_entry(
            &self.db,
            &self.config,
            user_id,
            &request.new_name,
            request.new_amount,
            &request.new_unit,
            request.new_is_custom,
        )
        .await?;

        let source =
            collections::ensure(&self.db, &self.config, user_id, &request.old_list, Vec::new())
                .await?;

        if request.old_list == request.new_list {
            // One in-memory sequence for both halves, so the draw-down is
            // visible to the merge.
            let mut entries = source.entries.0;
            entry::draw_down(
                &mut entries,
                &request.old_name,
                &request.old_unit,
                request.old_is_custom,
                request.old_amount,
            );
            entry::upsert(&mut entries, new_entry);
            collection_rows::update_entries(&self.db, source.id, EntryList(entries))
                .await
                .map_err(db_err)?;
        } else {
            let destination =
                collections::ensure(&self.db, &self.config, user_id, &request.new_list, Vec::new())
                    .await?;

            let mut source_entries = source.entries.0;
            if entry::draw_down(
                &mut source_entries,
                &request.old_name,
                &request.old_unit,
                request.old_is_custom,
                request.old_amount,
            ) {
                collection_rows::update_entries(&self.db, source.id, EntryList(source_entries))
                    .await
                    .map_err(db_err)?;
            }

            let mut destination_entries = destination.entries.0;
            entry::upsert(&mut destination_entries, new_entry);
            collection_rows::update_entries(
                &self.db,
                destination.id,
                EntryList(destination_entries),
            )
            .await
            .map_err(db_err)?;
        }

        debug!("Applied set-or-move");
        collections::load_all(&self.db, user_id).await
    }
}
