pub use sea_orm_migration::prelude::*;

mod m20240301_000000_sales;
mod m20240415_000000_waybill_fuel;
mod m20240520_000000_status;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000000_sales::Migration),
            Box::new(m20240415_000000_waybill_fuel::Migration),
            Box::new(m20240520_000000_status::Migration),
        ]
    }
}
