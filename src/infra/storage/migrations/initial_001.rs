use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Ingredients {
    Table,
    Id,
    Name,
    IngredientType,
}

#[derive(DeriveIden)]
enum CustomIngredients {
    Table,
    Id,
    UserId,
    Name,
    IngredientType,
}

#[derive(DeriveIden)]
enum Measurements {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ListNames {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Collections {
    Table,
    Id,
    UserId,
    ListNameId,
    Entries,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    UserId,
    Name,
    Entries,
    Steps,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ingredients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingredients::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ingredients::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Ingredients::IngredientType)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomIngredients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomIngredients::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomIngredients::UserId).uuid().not_null())
                    .col(ColumnDef::new(CustomIngredients::Name).string().not_null())
                    .col(
                        ColumnDef::new(CustomIngredients::IngredientType)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-custom-ingredients-user-name")
                    .table(CustomIngredients::Table)
                    .col(CustomIngredients::UserId)
                    .col(CustomIngredients::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Measurements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Measurements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Measurements::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ListNames::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ListNames::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(ListNames::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Collections::UserId).uuid().not_null())
                    .col(ColumnDef::new(Collections::ListNameId).uuid().not_null())
                    .col(ColumnDef::new(Collections::Entries).json().not_null())
                    .col(
                        ColumnDef::new(Collections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-collections-user-list-name")
                    .table(Collections::Table)
                    .col(Collections::UserId)
                    .col(Collections::ListNameId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Recipes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Recipes::UserId).uuid().not_null())
                    .col(ColumnDef::new(Recipes::Name).string().not_null())
                    .col(ColumnDef::new(Recipes::Entries).json().not_null())
                    .col(ColumnDef::new(Recipes::Steps).json().not_null())
                    .col(
                        ColumnDef::new(Recipes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-recipes-user-name")
                    .table(Recipes::Table)
                    .col(Recipes::UserId)
                    .col(Recipes::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Collections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ListNames::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Measurements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomIngredients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ingredients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}
