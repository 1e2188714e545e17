use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoutePhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(RoutePhoto::Id))
                    .col(string_null(RoutePhoto::Url))
                    .col(integer_null(RoutePhoto::RouteId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_route_photo_route_id")
                    .table(RoutePhoto::Table)
                    .col(RoutePhoto::RouteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoutePhoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoutePhoto {
    Table,
    Id,
    Url,
    RouteId,
}
