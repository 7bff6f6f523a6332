pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_customers;
mod m20260815_000002_create_fish;
mod m20260816_000001_create_orders;
mod m20260816_000002_create_addresses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_customers::Migration),
            Box::new(m20260815_000002_create_fish::Migration),
            Box::new(m20260816_000001_create_orders::Migration),
            Box::new(m20260816_000002_create_addresses::Migration),
        ]
    }
}
