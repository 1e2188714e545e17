use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(pk_auto(Route::Id))
                    .col(string(Route::Title))
                    .col(string_null(Route::Region))
                    .col(text(Route::Description))
                    .col(string(Route::Creator))
                    .col(timestamp_with_time_zone(Route::CreatedAt))
                    .col(boolean(Route::IsPrivate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Route {
    Table,
    Id,
    Title,
    Region,
    Description,
    Creator,
    CreatedAt,
    IsPrivate,
}
