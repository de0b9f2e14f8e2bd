//! Sale records.
//!
//! A `Sale` is one row of the ledger: the caller's inputs plus the values
//! derived from them at write time.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{Derived, SaleCmd};

/// Historical shapes of the sale payload.
///
/// Every version maps onto the same canonical [`Sale`]; the version only
/// tells which columns the caller knew about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVersion {
    /// `order_no` identifier, no fuel charge, no status.
    V1,
    /// `waybill` identifier and `fuel_charge`.
    V2,
    /// Lifecycle `status` (also sent as `paid_status`).
    V3,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::V3;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub party: String,
    pub supplier: String,
    pub order_no: Option<String>,
    pub waybill: Option<String>,
    pub invoice_no: String,
    pub sale_date: String,
    pub supplier_cost: f64,
    pub client_charge: f64,
    pub fuel_charge: f64,
    pub vat: f64,
    pub total_invoice: f64,
    pub profit: f64,
    pub status: Option<String>,
}

impl Sale {
    /// The stored derived values.
    pub fn derived(&self) -> Derived {
        Derived {
            vat: self.vat,
            total_invoice: self.total_invoice,
            profit: self.profit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub party: String,
    pub supplier: String,
    pub order_no: Option<String>,
    pub waybill: Option<String>,
    pub invoice_no: String,
    pub sale_date: String,
    pub supplier_cost: f64,
    pub client_charge: f64,
    pub fuel_charge: f64,
    pub vat: f64,
    pub total_invoice: f64,
    pub profit: f64,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Every mutable column set from `cmd` and `derived`; `id` is left to
    /// the caller.
    pub(crate) fn from_cmd(cmd: SaleCmd, derived: Derived) -> Self {
        Self {
            id: ActiveValue::NotSet,
            party: ActiveValue::Set(cmd.party),
            supplier: ActiveValue::Set(cmd.supplier),
            order_no: ActiveValue::Set(cmd.order_no),
            waybill: ActiveValue::Set(cmd.waybill),
            invoice_no: ActiveValue::Set(cmd.invoice_no),
            sale_date: ActiveValue::Set(cmd.sale_date),
            supplier_cost: ActiveValue::Set(cmd.supplier_cost),
            client_charge: ActiveValue::Set(cmd.client_charge),
            fuel_charge: ActiveValue::Set(cmd.fuel_charge),
            vat: ActiveValue::Set(derived.vat),
            total_invoice: ActiveValue::Set(derived.total_invoice),
            profit: ActiveValue::Set(derived.profit),
            status: ActiveValue::Set(cmd.status),
        }
    }
}

impl From<Model> for Sale {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            party: model.party,
            supplier: model.supplier,
            order_no: model.order_no,
            waybill: model.waybill,
            invoice_no: model.invoice_no,
            sale_date: model.sale_date,
            supplier_cost: model.supplier_cost,
            client_charge: model.client_charge,
            fuel_charge: model.fuel_charge,
            vat: model.vat,
            total_invoice: model.total_invoice,
            profit: model.profit,
            status: model.status,
        }
    }
}
