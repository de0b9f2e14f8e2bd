use serde::{Deserialize, Serialize};

/// A monetary field as typed by the client: a JSON number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

pub mod sale {
    use super::*;

    /// Request body for recording or replacing a sale.
    ///
    /// Older clients send `order_no`, newer ones `waybill` and
    /// `fuel_charge`; `paid_status` is accepted for `status`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SaleNew {
        pub party: Option<String>,
        pub supplier: Option<String>,
        pub order_no: Option<String>,
        pub waybill: Option<String>,
        pub invoice_no: Option<String>,
        pub sale_date: Option<String>,
        pub supplier_cost: Option<Amount>,
        pub client_charge: Option<Amount>,
        pub fuel_charge: Option<Amount>,
        #[serde(alias = "paid_status")]
        pub status: Option<String>,
    }

    /// Query string toggle, `?vat_enabled=false` to skip VAT.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct VatToggle {
        #[serde(default = "enabled")]
        pub vat_enabled: bool,
    }

    impl Default for VatToggle {
        fn default() -> Self {
            Self { vat_enabled: true }
        }
    }

    fn enabled() -> bool {
        true
    }

    /// Response to a create or update: derived values rounded to 2 decimals.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SaleRecorded {
        pub id: i64,
        pub vat: f64,
        pub total_invoice: f64,
        pub profit: f64,
        pub message: String,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SortOrder {
        #[default]
        Desc,
        Asc,
    }

    /// Query string of the sales listing.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SaleList {
        #[serde(default)]
        pub order: SortOrder,
    }

    /// Response of the sales listing.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SaleListResponse {
        pub sales: Vec<SaleView>,
        pub count: usize,
    }

    /// A listed sale: references, charge and derived totals. Supplier cost
    /// and VAT stay on the full record.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SaleView {
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
}

#[cfg(test)]
mod tests {
    use super::sale::*;
    use super::*;

    #[test]
    fn legacy_payload_deserializes() {
        let body: SaleNew = serde_json::from_str(
            r#"{"party":"KONE","supplier":"DHL","order_no":"O-1","invoice_no":"I-1",
                "sale_date":"2024-01-15","supplier_cost":700,"client_charge":"1000",
                "paid_status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(body.client_charge, Some(Amount::Text("1000".to_string())));
        assert_eq!(body.supplier_cost, Some(Amount::Number(700.0)));
        assert_eq!(body.status.as_deref(), Some("pending"));
        assert_eq!(body.waybill, None);
    }

    #[test]
    fn empty_listing_serializes_with_count() {
        let body = serde_json::to_value(SaleListResponse {
            sales: vec![],
            count: 0,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "sales": [], "count": 0 }));
    }

    #[test]
    fn list_order_defaults_to_desc() {
        let list: SaleList = serde_json::from_str("{}").unwrap();
        assert_eq!(list.order, SortOrder::Desc);
    }
}
