use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // route_id intentionally carries no foreign key: route deletion leaves points
        // in place unless the server runs with the cascade delete policy.
        manager
            .create_table(
                Table::create()
                    .table(RoutePoint::Table)
                    .if_not_exists()
                    .col(pk_auto(RoutePoint::Id))
                    .col(double(RoutePoint::Latitude))
                    .col(double(RoutePoint::Longitude))
                    .col(integer_null(RoutePoint::RouteId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_route_point_route_id")
                    .table(RoutePoint::Table)
                    .col(RoutePoint::RouteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoutePoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoutePoint {
    Table,
    Id,
    Latitude,
    Longitude,
    RouteId,
}
