//! Read-only views of the ledger shaped for renderers.
//!
//! - [`LedgerRow`]: every column, in [`LEDGER_COLUMNS`] order (spreadsheet
//!   and CSV exports).
//! - [`SaleSummary`]: the listing view, costs and VAT left out.
//! - [`InvoiceDetail`]: one sale plus its display-rounded derived values.

use serde::{Deserialize, Serialize};

use crate::{Derived, Sale};

/// Column header of the full-detail projection.
pub const LEDGER_COLUMNS: [&str; 14] = [
    "id",
    "party",
    "supplier",
    "order_no",
    "waybill",
    "invoice_no",
    "sale_date",
    "supplier_cost",
    "client_charge",
    "fuel_charge",
    "vat",
    "total_invoice",
    "profit",
    "status",
];

/// A full ledger row. Field order is the column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
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

impl From<Sale> for LedgerRow {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            party: sale.party,
            supplier: sale.supplier,
            order_no: sale.order_no,
            waybill: sale.waybill,
            invoice_no: sale.invoice_no,
            sale_date: sale.sale_date,
            supplier_cost: sale.supplier_cost,
            client_charge: sale.client_charge,
            fuel_charge: sale.fuel_charge,
            vat: sale.vat,
            total_invoice: sale.total_invoice,
            profit: sale.profit,
            status: sale.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleSummary {
    pub id: i64,
    pub party: String,
    pub supplier: String,
    pub order_no: Option<String>,
    pub waybill: Option<String>,
    pub invoice_no: String,
    pub sale_date: String,
    pub client_charge: f64,
    pub total_invoice: f64,
    pub profit: f64,
}

impl From<Sale> for SaleSummary {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            party: sale.party,
            supplier: sale.supplier,
            order_no: sale.order_no,
            waybill: sale.waybill,
            invoice_no: sale.invoice_no,
            sale_date: sale.sale_date,
            client_charge: sale.client_charge,
            total_invoice: sale.total_invoice,
            profit: sale.profit,
        }
    }
}

/// Everything an invoice renderer needs for one sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    /// The stored record, full precision.
    pub sale: Sale,
    /// Derived values rounded to 2 decimals.
    pub display: Derived,
}

impl From<Sale> for InvoiceDetail {
    fn from(sale: Sale) -> Self {
        let display = sale.derived().rounded();
        Self { sale, display }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale() -> Sale {
        Sale {
            id: 7,
            party: "KONE".to_string(),
            supplier: "DHL".to_string(),
            order_no: Some("ORD-7".to_string()),
            waybill: None,
            invoice_no: "INV-7".to_string(),
            sale_date: "2024-01-15".to_string(),
            supplier_cost: 700.0,
            client_charge: 333.333,
            fuel_charge: 0.0,
            vat: 49.996,
            total_invoice: 383.3329,
            profit: -366.667,
            status: Some("pending".to_string()),
        }
    }

    #[test]
    fn ledger_row_serializes_in_column_order() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(LedgerRow::from(sale())).unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = data.lines().next().unwrap();
        assert_eq!(header, LEDGER_COLUMNS.join(","));
    }

    #[test]
    fn invoice_display_is_rounded_but_sale_is_not() {
        let detail = InvoiceDetail::from(sale());
        assert_eq!(detail.sale.vat, 49.996);
        assert_eq!(
            detail.display,
            Derived {
                vat: 50.0,
                total_invoice: 383.33,
                profit: -366.67
            }
        );
    }

    #[test]
    fn summary_drops_costs_and_vat() {
        let json = serde_json::to_value(SaleSummary::from(sale())).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("supplier_cost"));
        assert!(!object.contains_key("vat"));
        assert_eq!(object["total_invoice"], 383.3329);
    }
}
