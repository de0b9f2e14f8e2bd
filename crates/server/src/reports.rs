//! Dashboard and export endpoints

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use csv::Writer;
use engine::{Dashboard, MonthlyReport};

use crate::{ServerError, server::ServerState};

const EXPORT_FILE_NAME: &str = "mok_sales.csv";

/// Profit totals, overall and per party/supplier.
pub async fn dashboard(State(state): State<ServerState>) -> Result<Json<Dashboard>, ServerError> {
    Ok(Json(state.engine.dashboard_report().await?))
}

/// Per-month totals plus the number of sales with unparseable dates.
pub async fn monthly(
    State(state): State<ServerState>,
) -> Result<Json<MonthlyReport>, ServerError> {
    Ok(Json(state.engine.monthly_report().await?))
}

/// Full ledger as CSV, one row per sale in insertion order.
pub async fn export_csv(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let rows = state.engine.ledger_rows().await?;

    let mut writer = Writer::from_writer(vec![]);
    if rows.is_empty() {
        writer
            .write_record(engine::LEDGER_COLUMNS)
            .map_err(export_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(export_error)?;
    }
    let data = writer
        .into_inner()
        .map_err(|err| export_error(err.into_error().into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        data,
    )
        .into_response())
}

fn export_error(err: csv::Error) -> ServerError {
    tracing::error!("failed to write sales export: {err}");
    ServerError::Internal("failed to write sales export".to_string())
}
