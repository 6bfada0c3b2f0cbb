//! Export tables and chart data

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{equipment::EquipmentQuery, transfer::TransferQuery, ReportTable, TypeCount},
    AppState,
};

/// Full inventory table
#[utoipa::path(
    get,
    path = "/reports/inventory",
    tag = "reports",
    responses(
        (status = 200, description = "Inventory rows", body = ReportTable)
    )
)]
pub async fn inventory_report(State(state): State<AppState>) -> Json<ReportTable> {
    Json(state.services.reports.inventory().await)
}

/// Search results table
#[utoipa::path(
    get,
    path = "/reports/search",
    tag = "reports",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Search result rows", body = ReportTable)
    )
)]
pub async fn search_report(
    State(state): State<AppState>,
    Query(query): Query<EquipmentQuery>,
) -> Json<ReportTable> {
    Json(state.services.reports.search(&query).await)
}

/// Equipment held by one employee
#[utoipa::path(
    get,
    path = "/reports/employees/{name}",
    tag = "reports",
    params(("name" = String, Path, description = "Employee name")),
    responses(
        (status = 200, description = "Employee equipment rows", body = ReportTable)
    )
)]
pub async fn employee_report(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<ReportTable> {
    Json(state.services.reports.employee_equipment(&name).await)
}

/// Full assignment history table
#[utoipa::path(
    get,
    path = "/reports/history",
    tag = "reports",
    responses(
        (status = 200, description = "History rows", body = ReportTable)
    )
)]
pub async fn history_report(State(state): State<AppState>) -> Json<ReportTable> {
    Json(state.services.reports.history().await)
}

/// Transfers within a date window
#[utoipa::path(
    get,
    path = "/reports/transfers",
    tag = "reports",
    params(TransferQuery),
    responses(
        (status = 200, description = "Transfer rows", body = ReportTable),
        (status = 400, description = "Malformed or inverted window")
    )
)]
pub async fn transfers_report(
    State(state): State<AppState>,
    Query(query): Query<TransferQuery>,
) -> AppResult<Json<ReportTable>> {
    let table = state.services.reports.transfers(&query).await?;
    Ok(Json(table))
}

/// Equipment count per type
#[utoipa::path(
    get,
    path = "/stats/equipment-types",
    tag = "reports",
    responses(
        (status = 200, description = "Counts, most common first", body = Vec<TypeCount>)
    )
)]
pub async fn equipment_type_stats(State(state): State<AppState>) -> Json<Vec<TypeCount>> {
    Json(state.services.reports.type_counts().await)
}
