//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidField`] thrown when a required sale field is missing.
//! - [`InvalidAmount`] thrown when a monetary field cannot be coerced to a
//!   non-negative number.
//! - [`KeyNotFound`] thrown when a sale id is not in the ledger.
//! - [`Database`] thrown when the store cannot be reached or a write fails;
//!   the surrounding transaction is rolled back.
//!
//!  [`InvalidField`]: EngineError::InvalidField
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Returns `true` for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidField(_) | Self::InvalidAmount(_))
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidField(a), Self::InvalidField(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidConfig(a), Self::InvalidConfig(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
