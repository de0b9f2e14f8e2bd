//! First ledger schema: the `sales` table as the service originally shipped
//! it, identified by `order_no`, without fuel charge or status.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Sales {
    Table,
    Id,
    Party,
    Supplier,
    OrderNo,
    InvoiceNo,
    SaleDate,
    SupplierCost,
    ClientCharge,
    Vat,
    TotalInvoice,
    Profit,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::Party).string().not_null())
                    .col(ColumnDef::new(Sales::Supplier).string().not_null())
                    .col(ColumnDef::new(Sales::OrderNo).string())
                    .col(ColumnDef::new(Sales::InvoiceNo).string().not_null())
                    .col(ColumnDef::new(Sales::SaleDate).string().not_null())
                    .col(ColumnDef::new(Sales::SupplierCost).double().not_null())
                    .col(ColumnDef::new(Sales::ClientCharge).double().not_null())
                    .col(ColumnDef::new(Sales::Vat).double().not_null())
                    .col(ColumnDef::new(Sales::TotalInvoice).double().not_null())
                    .col(ColumnDef::new(Sales::Profit).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}
