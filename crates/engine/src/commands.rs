//! Command structs for engine operations.
//!
//! [`SaleInput`] is the loosely typed payload a caller submits (any schema
//! version, amounts as numbers or strings). Converting it into a
//! [`SaleCmd`] performs all validation, so a `SaleCmd` can always be
//! persisted.

use serde::{Deserialize, Serialize};

use crate::{AmountInput, EngineError, ResultEngine, SchemaVersion};

/// Raw sale payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SaleInput {
    pub party: Option<String>,
    pub supplier: Option<String>,
    pub order_no: Option<String>,
    pub waybill: Option<String>,
    pub invoice_no: Option<String>,
    pub sale_date: Option<String>,
    pub supplier_cost: Option<AmountInput>,
    pub client_charge: Option<AmountInput>,
    pub fuel_charge: Option<AmountInput>,
    #[serde(alias = "paid_status")]
    pub status: Option<String>,
    /// Per-request VAT toggle; `None` means enabled.
    pub vat_enabled: Option<bool>,
}

impl SaleInput {
    /// The oldest payload shape able to carry the supplied fields.
    pub fn schema_version(&self) -> SchemaVersion {
        if self.status.is_some() {
            SchemaVersion::V3
        } else if self.waybill.is_some() || self.fuel_charge.is_some() {
            SchemaVersion::V2
        } else {
            SchemaVersion::V1
        }
    }
}

/// Create or replace a sale.
#[derive(Clone, Debug, PartialEq)]
pub struct SaleCmd {
    pub party: String,
    pub supplier: String,
    pub order_no: Option<String>,
    pub waybill: Option<String>,
    pub invoice_no: String,
    pub sale_date: String,
    pub supplier_cost: f64,
    pub client_charge: f64,
    pub fuel_charge: f64,
    pub status: Option<String>,
    pub vat_enabled: bool,
}

impl SaleCmd {
    #[must_use]
    pub fn new(
        party: impl Into<String>,
        supplier: impl Into<String>,
        invoice_no: impl Into<String>,
        sale_date: impl Into<String>,
        supplier_cost: f64,
        client_charge: f64,
    ) -> Self {
        Self {
            party: party.into(),
            supplier: supplier.into(),
            order_no: None,
            waybill: None,
            invoice_no: invoice_no.into(),
            sale_date: sale_date.into(),
            supplier_cost,
            client_charge,
            fuel_charge: 0.0,
            status: None,
            vat_enabled: true,
        }
    }

    #[must_use]
    pub fn order_no(mut self, order_no: impl Into<String>) -> Self {
        self.order_no = Some(order_no.into());
        self
    }

    #[must_use]
    pub fn waybill(mut self, waybill: impl Into<String>) -> Self {
        self.waybill = Some(waybill.into());
        self
    }

    #[must_use]
    pub fn fuel_charge(mut self, fuel_charge: f64) -> Self {
        self.fuel_charge = fuel_charge;
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn vat_enabled(mut self, vat_enabled: bool) -> Self {
        self.vat_enabled = vat_enabled;
        self
    }

    /// Checks amounts of a command built in code rather than from a
    /// [`SaleInput`].
    pub(crate) fn validate(&self) -> ResultEngine<()> {
        for (field, value) in [
            ("supplier_cost", self.supplier_cost),
            ("client_charge", self.client_charge),
            ("fuel_charge", self.fuel_charge),
        ] {
            AmountInput::Number(value).coerce(field)?;
        }
        if self.order_no.is_none() && self.waybill.is_none() {
            return Err(EngineError::InvalidField(
                "waybill or order_no is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn required(value: Option<String>, field: &str) -> ResultEngine<String> {
    value.ok_or_else(|| EngineError::InvalidField(format!("{field} is required")))
}

fn required_amount(value: Option<&AmountInput>, field: &str) -> ResultEngine<f64> {
    value
        .ok_or_else(|| EngineError::InvalidField(format!("{field} is required")))?
        .coerce(field)
}

impl TryFrom<SaleInput> for SaleCmd {
    type Error = EngineError;

    fn try_from(input: SaleInput) -> Result<Self, Self::Error> {
        let supplier_cost = required_amount(input.supplier_cost.as_ref(), "supplier_cost")?;
        let client_charge = required_amount(input.client_charge.as_ref(), "client_charge")?;
        let fuel_charge = match &input.fuel_charge {
            Some(amount) => amount.coerce("fuel_charge")?,
            None => 0.0,
        };

        let cmd = Self {
            party: required(input.party, "party")?,
            supplier: required(input.supplier, "supplier")?,
            order_no: input.order_no,
            waybill: input.waybill,
            invoice_no: required(input.invoice_no, "invoice_no")?,
            sale_date: required(input.sale_date, "sale_date")?,
            supplier_cost,
            client_charge,
            fuel_charge,
            status: input.status,
            vat_enabled: input.vat_enabled.unwrap_or(true),
        };
        cmd.validate()?;
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1_input() -> SaleInput {
        SaleInput {
            party: Some("KONE".to_string()),
            supplier: Some("DHL".to_string()),
            order_no: Some("ORD-1".to_string()),
            invoice_no: Some("INV-1".to_string()),
            sale_date: Some("2024-01-15".to_string()),
            supplier_cost: Some(AmountInput::Number(700.0)),
            client_charge: Some(AmountInput::Text("1000".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn v1_payload_maps_to_canonical_command() {
        let input = v1_input();
        assert_eq!(input.schema_version(), SchemaVersion::V1);

        let cmd = SaleCmd::try_from(input).unwrap();
        assert_eq!(
            cmd,
            SaleCmd::new("KONE", "DHL", "INV-1", "2024-01-15", 700.0, 1000.0).order_no("ORD-1")
        );
    }

    #[test]
    fn paid_status_is_an_alias_of_status() {
        let input: SaleInput = serde_json::from_value(serde_json::json!({
            "party": "WALK-IN",
            "supplier": "MOK",
            "waybill": "WB-9",
            "invoice_no": "INV-9",
            "sale_date": "2024-02-01",
            "supplier_cost": "10.50",
            "client_charge": 20,
            "fuel_charge": 5,
            "paid_status": "paid",
        }))
        .unwrap();
        assert_eq!(input.schema_version(), SchemaVersion::V3);

        let cmd = SaleCmd::try_from(input).unwrap();
        assert_eq!(cmd.status.as_deref(), Some("paid"));
        assert_eq!(cmd.supplier_cost, 10.5);
        assert_eq!(cmd.fuel_charge, 5.0);
        assert!(cmd.vat_enabled);
    }

    #[test]
    fn waybill_payload_is_v2() {
        let mut input = v1_input();
        input.order_no = None;
        input.waybill = Some("WB-1".to_string());
        assert_eq!(input.schema_version(), SchemaVersion::V2);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut input = v1_input();
        input.invoice_no = None;
        assert_eq!(
            SaleCmd::try_from(input).unwrap_err(),
            EngineError::InvalidField("invoice_no is required".to_string())
        );
    }

    #[test]
    fn non_numeric_cost_is_rejected() {
        let mut input = v1_input();
        input.supplier_cost = Some(AmountInput::Text("seven hundred".to_string()));
        let err = SaleCmd::try_from(input).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(msg) if msg.contains("supplier_cost")));
    }

    #[test]
    fn an_identifier_is_required() {
        let mut input = v1_input();
        input.order_no = None;
        assert_eq!(
            SaleCmd::try_from(input).unwrap_err(),
            EngineError::InvalidField("waybill or order_no is required".to_string())
        );
    }

    #[test]
    fn empty_party_is_kept_verbatim() {
        let mut input = v1_input();
        input.party = Some(String::new());
        assert_eq!(SaleCmd::try_from(input).unwrap().party, "");
    }
}
