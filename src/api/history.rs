//! Assignment history and transfer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        history::SerialQuery, transfer::TransferQuery, HistoryEntry, HistoryRow, Transfer,
    },
    AppState,
};

/// Result of recording an assignment by hand
#[derive(Serialize, ToSchema)]
pub struct RecordAssignmentResponse {
    /// False when the exact entry was already present
    pub added: bool,
    pub history: Vec<HistoryEntry>,
}

/// History rows of one serial number, in insertion order
#[utoipa::path(
    get,
    path = "/equipment/{serial}/history",
    tag = "history",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Assignment history", body = Vec<HistoryRow>)
    )
)]
pub async fn get_equipment_history(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Json<Vec<HistoryRow>> {
    Json(state.services.history.rows_for_serial(&serial).await)
}

/// Append an assignment to a serial number's history
#[utoipa::path(
    post,
    path = "/equipment/{serial}/history",
    tag = "history",
    params(("serial" = String, Path, description = "Serial number")),
    request_body = HistoryEntry,
    responses(
        (status = 201, description = "Entry added", body = RecordAssignmentResponse),
        (status = 200, description = "Entry already present", body = RecordAssignmentResponse),
        (status = 400, description = "Missing employee or malformed date")
    )
)]
pub async fn record_assignment(
    State(state): State<AppState>,
    Path(serial): Path<String>,
    Json(entry): Json<HistoryEntry>,
) -> AppResult<(StatusCode, Json<RecordAssignmentResponse>)> {
    let added = state.services.history.record_assignment(&serial, entry).await?;
    let history = state.services.history.history_for(&serial).await;
    let status = if added { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(RecordAssignmentResponse { added, history })))
}

/// The whole assignment history
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "All history rows", body = Vec<HistoryRow>)
    )
)]
pub async fn list_history(State(state): State<AppState>) -> Json<Vec<HistoryRow>> {
    Json(state.services.history.all_rows().await)
}

/// Serial numbers, optionally of one equipment type
#[utoipa::path(
    get,
    path = "/history/serials",
    tag = "history",
    params(SerialQuery),
    responses(
        (status = 200, description = "Sorted serial numbers", body = Vec<String>)
    )
)]
pub async fn list_serials(
    State(state): State<AppState>,
    Query(query): Query<SerialQuery>,
) -> Json<Vec<String>> {
    Json(
        state
            .services
            .history
            .serials(query.equipment_type.as_deref())
            .await,
    )
}

/// Transfers within an inclusive date window
#[utoipa::path(
    get,
    path = "/transfers",
    tag = "history",
    params(TransferQuery),
    responses(
        (status = 200, description = "Transfers, oldest first", body = Vec<Transfer>),
        (status = 400, description = "Malformed or inverted window")
    )
)]
pub async fn list_transfers(
    State(state): State<AppState>,
    Query(query): Query<TransferQuery>,
) -> AppResult<Json<Vec<Transfer>>> {
    let transfers = state.services.history.transfers(&query).await?;
    Ok(Json(transfers))
}
