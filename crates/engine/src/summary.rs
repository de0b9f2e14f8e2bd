//! Aggregations over the ledger.
//!
//! These are pure functions over a slice of [`Sale`]s; the engine methods in
//! `ops::reports` load the records and call them.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::Sale;

// `%m/%d/%Y` is tried before `%d/%m/%Y`, so `01/02/2024` is 2 January.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
];
// Month-only dates land on the first of the month.
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Totals of one calendar month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// `YYYY-MM`.
    pub month: String,
    pub sales: u64,
    pub total_charge: f64,
    pub total_fuel: f64,
    pub total_vat: f64,
    pub total_invoice: f64,
    pub total_profit: f64,
}

/// Monthly aggregation result.
///
/// `excluded` counts the records left out because their `sale_date` could
/// not be parsed. They are still in the ledger.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub months: Vec<MonthlyTotals>,
    pub excluded: u64,
}

/// Overall totals with profit per party and per supplier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_sales: u64,
    pub total_profit: f64,
    pub by_party: BTreeMap<String, f64>,
    pub by_supplier: BTreeMap<String, f64>,
}

/// Parses a stored `sale_date` into a calendar date.
///
/// Accepts ISO dates (`2024-01-15`, `2024/01/15`), US dates (`01/15/2024`),
/// day-first dates a US reading rejects (`15/01/2024`, `15-01-2024`),
/// spelled-out months (`15 January 2024`), bare months (`2024-01`), naive
/// date-times and RFC 3339 timestamps. Returns `None` for anything else.
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(date) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(date.date());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }
    let first_of_month = format!("{raw} 01");
    MONTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&first_of_month, &format!("{fmt} %d")).ok())
}

/// Groups records by the `YYYY-MM` of their sale date and sums them.
///
/// Months come out in ascending order. Records with an unparseable date are
/// counted in [`MonthlyReport::excluded`].
pub fn monthly_summary(sales: &[Sale]) -> MonthlyReport {
    let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
    let mut excluded = 0;

    for sale in sales {
        let Some(date) = parse_sale_date(&sale.sale_date) else {
            tracing::debug!(
                sale_id = sale.id,
                sale_date = %sale.sale_date,
                "sale date not parseable, excluded from monthly summary"
            );
            excluded += 1;
            continue;
        };
        let month = date.format("%Y-%m").to_string();
        let totals = months.entry(month.clone()).or_insert_with(|| MonthlyTotals {
            month,
            ..Default::default()
        });
        totals.sales += 1;
        totals.total_charge += sale.client_charge;
        totals.total_fuel += sale.fuel_charge;
        totals.total_vat += sale.vat;
        totals.total_invoice += sale.total_invoice;
        totals.total_profit += sale.profit;
    }

    MonthlyReport {
        months: months.into_values().collect(),
        excluded,
    }
}

fn profit_by<F>(sales: &[Sale], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&Sale) -> &str,
{
    sales.iter().fold(BTreeMap::new(), |mut acc, sale| {
        *acc.entry(key(sale).to_string()).or_insert(0.0) += sale.profit;
        acc
    })
}

/// Sums profit per party. Party names are used verbatim as keys.
pub fn profit_by_party(sales: &[Sale]) -> BTreeMap<String, f64> {
    profit_by(sales, |sale| sale.party.as_str())
}

/// Sums profit per supplier. Supplier names are used verbatim as keys.
pub fn profit_by_supplier(sales: &[Sale]) -> BTreeMap<String, f64> {
    profit_by(sales, |sale| sale.supplier.as_str())
}

pub fn dashboard(sales: &[Sale]) -> Dashboard {
    Dashboard {
        total_sales: sales.len() as u64,
        total_profit: sales.iter().map(|sale| sale.profit).sum(),
        by_party: profit_by_party(sales),
        by_supplier: profit_by_supplier(sales),
    }
}
