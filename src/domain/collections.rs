//! Collection lifecycle: get-or-create, delete, rename, list, and the
//! per-user cap.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Collection, QuantityEntry};
use crate::domain::error::DomainError;
use crate::domain::{db_err, PantryConfig};
use crate::infra::storage::entity::{collections as collection_rows, list_names};
use crate::infra::storage::{mapper, EntryList};

/// Collections every user starts with.
pub const DEFAULT_COLLECTIONS: [&str; 2] = ["Grocery", "Pantry"];

/// Get-or-create a `(user, name)` collection row. An existing row is
/// returned unchanged and the initial entries are ignored for it; creation
/// checks the per-user cap first.
pub(crate) async fn ensure(
    db: &DatabaseConnection,
    config: &PantryConfig,
    user_id: Uuid,
    name: &str,
    initial_entries: Vec<QuantityEntry>,
) -> Result<collection_rows::Model, DomainError> {
    let list_name = list_names::get_or_create(db, name).await.map_err(db_err)?;
    if let Some(existing) = collection_rows::find_one(db, user_id, list_name.id)
        .await
        .map_err(db_err)?
    {
        return Ok(existing);
    }

    let count = collection_rows::count_for_user(db, user_id)
        .await
        .map_err(db_err)?;
    if count as usize >= config.max_collections_per_user {
        return Err(DomainError::collection_limit_exceeded(
            config.max_collections_per_user,
        ));
    }

    let created = collection_rows::create(db, user_id, list_name.id, EntryList(initial_entries))
        .await
        .map_err(db_err)?;
    debug!(collection_id = %created.id, name, "Created collection");
    Ok(created)
}

/// Load all of a user's collections in creation order, with their names
/// resolved in one batch.
pub(crate) async fn load_all(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<Collection>, DomainError> {
    let rows = collection_rows::list_for_user(db, user_id)
        .await
        .map_err(db_err)?;
    let ids: Vec<Uuid> = rows.iter().map(|r| r.list_name_id).collect();
    let names: HashMap<Uuid, String> = list_names::find_by_ids(db, ids)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(|n| (n.id, n.name))
        .collect();
    Ok(rows
        .into_iter()
        .map(|r| {
            let name = names.get(&r.list_name_id).cloned().unwrap_or_default();
            mapper::collection_to_contract(r, name)
        })
        .collect())
}

/// Domain service owning the collection lifecycle.
#[derive(Clone)]
pub struct CollectionService {
    db: DatabaseConnection,
    config: PantryConfig,
}

impl CollectionService {
    pub fn new(db: DatabaseConnection, config: PantryConfig) -> Self {
        Self { db, config }
    }

    #[instrument(
        name = "pantry.collections.get_or_create",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn get_or_create(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<Collection, DomainError> {
        let row = ensure(&self.db, &self.config, user_id, name, Vec::new()).await?;
        Ok(mapper::collection_to_contract(row, name.to_string()))
    }

    /// Delete a collection; a miss is a no-op. Always returns the user's
    /// remaining collections.
    #[instrument(
        name = "pantry.collections.delete",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn delete(&self, user_id: Uuid, name: &str) -> Result<Vec<Collection>, DomainError> {
        if let Some(list_name) = list_names::find_by_name(&self.db, name)
            .await
            .map_err(db_err)?
        {
            if let Some(row) = collection_rows::find_one(&self.db, user_id, list_name.id)
                .await
                .map_err(db_err)?
            {
                collection_rows::delete(&self.db, row.id)
                    .await
                    .map_err(db_err)?;
                info!(collection_id = %row.id, "Deleted collection");
            }
        }
        load_all(&self.db, user_id).await
    }

    /// Rename by carrying the old entries into a get-or-create of the new
    /// name and deleting the old row.
    #[instrument(
        name = "pantry.collections.rename",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn rename(
        &self,
        user_id: Uuid,
        old_name: &str,
        new_name: &str,
    ) -> Result<Collection, DomainError> {
        let old_list_name = list_names::find_by_name(&self.db, old_name)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::collection_not_found(old_name))?;
        let old_row = collection_rows::find_one(&self.db, user_id, old_list_name.id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::collection_not_found(old_name))?;

        if old_name == new_name {
            return Ok(mapper::collection_to_contract(old_row, old_name.to_string()));
        }

        // The destination is created while the source row still exists, so a
        // user at the cap hits the limit here even though the rename is
        // cap-neutral.
        let new_row = ensure(
            &self.db,
            &self.config,
            user_id,
            new_name,
            old_row.entries.0.clone(),
        )
        .await?;
        collection_rows::delete(&self.db, old_row.id)
            .await
            .map_err(db_err)?;
        info!("Renamed collection");
        Ok(mapper::collection_to_contract(new_row, new_name.to_string()))
    }

    #[instrument(name = "pantry.collections.list", skip(self), fields(user_id = %user_id))]
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Collection>, DomainError> {
        load_all(&self.db, user_id).await
    }
}
