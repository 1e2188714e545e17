pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_route_table;
mod m20260301_000002_create_route_point_table;
mod m20260301_000003_create_route_photo_table;
mod m20260302_000004_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_route_table::Migration),
            Box::new(m20260301_000002_create_route_point_table::Migration),
            Box::new(m20260301_000003_create_route_photo_table::Migration),
            Box::new(m20260302_000004_create_user_table::Migration),
        ]
    }
}
