use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::infra::storage::{EntryList, StepList};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub entries: EntryList,
    pub steps: StepList,
    pub created_at: DateTime<Utc>,
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
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await
}

pub async fn create(db: &DatabaseConnection, user_id: Uuid, name: &str) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(name.to_string()),
        entries: Set(EntryList::default()),
        steps: Set(StepList::default()),
        created_at: Set(Utc::now()),
    };
    active_model.insert(db).await
}

pub async fn update_entries(
    db: &DatabaseConnection,
    id: Uuid,
    entries: EntryList,
) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        id: Set(id),
        entries: Set(entries),
        ..Default::default()
    };
    active_model.update(db).await
}

pub async fn update_steps(
    db: &DatabaseConnection,
    id: Uuid,
    steps: StepList,
) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        id: Set(id),
        steps: Set(steps),
        ..Default::default()
    };
    active_model.update(db).await
}

/// Delete one recipe row, returns true if a row was deleted
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete_for_user(db: &DatabaseConnection, user_id: Uuid) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
