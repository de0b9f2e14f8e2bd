//! Derived sale values.
//!
//! VAT, total invoice and profit are never supplied by the caller: they are
//! computed here from the sale inputs every time a record is written.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, money::round_cents};

/// VAT rate applied when none is configured.
pub const DEFAULT_VAT_RATE: f64 = 0.15;

/// The VAT rate the engine applies to new and updated sales.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VatPolicy {
    pub rate: f64,
}

impl VatPolicy {
    /// Builds a policy, rejecting negative or non-finite rates.
    pub fn new(rate: f64) -> ResultEngine<Self> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "vat rate must be a non-negative number, got {rate}"
            )));
        }
        Ok(Self { rate })
    }
}

impl Default for VatPolicy {
    fn default() -> Self {
        Self {
            rate: DEFAULT_VAT_RATE,
        }
    }
}

/// The values computed from a sale's inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    pub vat: f64,
    pub total_invoice: f64,
    pub profit: f64,
}

impl Derived {
    /// Copy rounded to 2 decimals for presentation.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            vat: round_cents(self.vat),
            total_invoice: round_cents(self.total_invoice),
            profit: round_cents(self.profit),
        }
    }
}

/// Computes VAT, total invoice and profit.
///
/// The charge base is `client_charge + fuel_charge`. VAT is levied on the
/// base only when `vat_enabled`; profit is the base minus the supplier cost
/// and may be negative.
///
/// # Examples
///
/// ```rust
/// use engine::derive;
///
/// let d = derive(1000.0, 700.0, 0.0, true, 0.15);
/// assert!((d.vat - 150.0).abs() < 1e-9);
/// assert!((d.total_invoice - 1150.0).abs() < 1e-9);
/// assert!((d.profit - 300.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn derive(
    client_charge: f64,
    supplier_cost: f64,
    fuel_charge: f64,
    vat_enabled: bool,
    vat_rate: f64,
) -> Derived {
    let base = client_charge + fuel_charge;
    let vat = if vat_enabled { base * vat_rate } else { 0.0 };
    Derived {
        vat,
        total_invoice: base + vat,
        profit: base - supplier_cost,
    }
}
