use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod reports;
mod sales;
mod server;

pub mod types {
    pub mod sale {
        pub use api_types::sale::{
            SaleList, SaleListResponse, SaleNew, SaleRecorded, SaleView, SortOrder, VatToggle,
        };
        pub use engine::{InvoiceDetail, Sale, SaleSummary};
    }

    pub mod report {
        pub use engine::{Dashboard, MonthlyReport, MonthlyTotals};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidField(_) | EngineError::InvalidAmount(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EngineError::InvalidConfig(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
