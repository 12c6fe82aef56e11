//! The common ingredient catalog: globally shared, unique by name.

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub ingredient_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Name.eq(name)).one(db).await
}

/// Idempotent insert: an existing row wins and its type is left alone.
pub async fn get_or_create(
    db: &DatabaseConnection,
    name: &str,
    ingredient_type: &str,
) -> Result<Model, DbErr> {
    if let Some(existing) = find_by_name(db, name).await? {
        return Ok(existing);
    }
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        ingredient_type: Set(ingredient_type.to_string()),
    };
    active_model.insert(db).await
}
