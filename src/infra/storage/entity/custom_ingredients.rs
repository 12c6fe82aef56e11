//! User-owned ingredient definitions, unique by `(user_id, name)`.

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "custom_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub ingredient_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_one(
    db: &DatabaseConnection,
    user_id: Uuid,
    name: &str,
) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::Name.eq(name))
        .one(db)
        .await
}

pub async fn list_for_user(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Name)
        .all(db)
        .await
}

pub async fn get_or_create(
    db: &DatabaseConnection,
    user_id: Uuid,
    name: &str,
    ingredient_type: &str,
) -> Result<Model, DbErr> {
    if let Some(existing) = find_one(db, user_id, name).await? {
        return Ok(existing);
    }
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(name.to_string()),
        ingredient_type: Set(ingredient_type.to_string()),
    };
    active_model.insert(db).await
}

/// Delete one definition, returns true if a row was deleted
pub async fn delete(db: &DatabaseConnection, user_id: Uuid, name: &str) -> Result<bool, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::Name.eq(name))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete_for_user(db: &DatabaseConnection, user_id: Uuid) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
