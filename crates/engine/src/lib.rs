//! Sales ledger engine.
//!
//! The [`Engine`] owns the `sales` table: it validates and records sales,
//! derives VAT, total invoice and profit at write time, and serves the
//! aggregations and projections the dashboards and exporters read.

pub use commands::{SaleCmd, SaleInput};
pub use derivation::{DEFAULT_VAT_RATE, Derived, VatPolicy, derive};
pub use error::EngineError;
pub use money::{AmountInput, format_amount, parse_amount, round_cents};
pub use ops::{Engine, EngineBuilder, ListOrder};
pub use projection::{InvoiceDetail, LEDGER_COLUMNS, LedgerRow, SaleSummary};
pub use sales::{Sale, SchemaVersion};
pub use summary::{
    Dashboard, MonthlyReport, MonthlyTotals, dashboard, monthly_summary, parse_sale_date,
    profit_by_party, profit_by_supplier,
};

mod commands;
mod derivation;
mod error;
mod money;
mod ops;
mod projection;
mod sales;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;
