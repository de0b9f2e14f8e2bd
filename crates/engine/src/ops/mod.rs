use sea_orm::DatabaseConnection;

use crate::{Derived, ResultEngine, SaleCmd, VatPolicy, derive};

mod reports;
mod sales;

pub use sales::ListOrder;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    vat: VatPolicy,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The VAT policy applied to writes.
    pub fn vat_policy(&self) -> VatPolicy {
        self.vat
    }

    /// Derived values `cmd` would be stored with.
    pub fn quote(&self, cmd: &SaleCmd) -> Derived {
        derive(
            cmd.client_charge,
            cmd.supplier_cost,
            cmd.fuel_charge,
            cmd.vat_enabled,
            self.vat.rate,
        )
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    vat_rate: Option<f64>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Override the VAT rate (defaults to [`crate::DEFAULT_VAT_RATE`]).
    pub fn vat_rate(mut self, rate: f64) -> EngineBuilder {
        self.vat_rate = Some(rate);
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        let vat = match self.vat_rate {
            Some(rate) => VatPolicy::new(rate)?,
            None => VatPolicy::default(),
        };
        Ok(Engine {
            database: self.database,
            vat,
        })
    }
}
