//! Sales API endpoints

use api_types::{
    Amount,
    sale::{SaleList, SaleListResponse, SaleNew, SaleRecorded, SaleView, SortOrder, VatToggle},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{AmountInput, InvoiceDetail, ListOrder, Sale, SaleCmd, SaleInput, SaleSummary};

use crate::{ServerError, server::ServerState};

fn map_amount(amount: Amount) -> AmountInput {
    match amount {
        Amount::Number(value) => AmountInput::Number(value),
        Amount::Text(text) => AmountInput::Text(text),
    }
}

fn map_order(order: SortOrder) -> ListOrder {
    match order {
        SortOrder::Desc => ListOrder::NewestFirst,
        SortOrder::Asc => ListOrder::OldestFirst,
    }
}

fn sale_view(summary: SaleSummary) -> SaleView {
    SaleView {
        id: summary.id,
        party: summary.party,
        supplier: summary.supplier,
        order_no: summary.order_no,
        waybill: summary.waybill,
        invoice_no: summary.invoice_no,
        sale_date: summary.sale_date,
        client_charge: summary.client_charge,
        total_invoice: summary.total_invoice,
        profit: summary.profit,
    }
}

fn sale_cmd(payload: SaleNew, toggle: VatToggle) -> Result<SaleCmd, ServerError> {
    let input = SaleInput {
        party: payload.party,
        supplier: payload.supplier,
        order_no: payload.order_no,
        waybill: payload.waybill,
        invoice_no: payload.invoice_no,
        sale_date: payload.sale_date,
        supplier_cost: payload.supplier_cost.map(map_amount),
        client_charge: payload.client_charge.map(map_amount),
        fuel_charge: payload.fuel_charge.map(map_amount),
        status: payload.status,
        vat_enabled: Some(toggle.vat_enabled),
    };
    tracing::debug!(schema = input.schema_version().as_str(), "sale payload received");
    Ok(SaleCmd::try_from(input)?)
}

fn recorded(id: i64, derived: engine::Derived, message: &str) -> SaleRecorded {
    let display = derived.rounded();
    SaleRecorded {
        id,
        vat: display.vat,
        total_invoice: display.total_invoice,
        profit: display.profit,
        message: message.to_string(),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Query(toggle): Query<VatToggle>,
    Json(payload): Json<SaleNew>,
) -> Result<(StatusCode, Json<SaleRecorded>), ServerError> {
    let cmd = sale_cmd(payload, toggle)?;
    let derived = state.engine.quote(&cmd);
    let id = state.engine.create_sale(cmd).await?;
    tracing::info!(sale_id = id, "sale recorded");

    Ok((
        StatusCode::CREATED,
        Json(recorded(id, derived, "Sale recorded successfully")),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SaleList>,
) -> Result<Json<SaleListResponse>, ServerError> {
    let summaries = state.engine.sale_summaries(map_order(query.order)).await?;
    let sales: Vec<SaleView> = summaries.into_iter().map(sale_view).collect();
    Ok(Json(SaleListResponse {
        count: sales.len(),
        sales,
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Sale>, ServerError> {
    Ok(Json(state.engine.sale(id).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(toggle): Query<VatToggle>,
    Json(payload): Json<SaleNew>,
) -> Result<Json<SaleRecorded>, ServerError> {
    let cmd = sale_cmd(payload, toggle)?;
    let derived = state.engine.quote(&cmd);
    state.engine.update_sale(id, cmd).await?;
    tracing::info!(sale_id = id, "sale updated");

    Ok(Json(recorded(id, derived, "Sale updated successfully")))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_sale(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn invoice(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<InvoiceDetail>, ServerError> {
    Ok(Json(state.engine.invoice_detail(id).await?))
}
