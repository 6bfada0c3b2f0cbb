//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::equipment::{
        CreateEquipment, CurrentState, EquipmentQuery, EquipmentRecord, TransferRequest,
        UpdateEquipment,
    },
    AppState,
};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentRecord>)
    )
)]
pub async fn list_equipment(State(state): State<AppState>) -> Json<Vec<EquipmentRecord>> {
    Json(state.services.equipment.list().await)
}

/// Search equipment by free text and/or assignee
#[utoipa::path(
    get,
    path = "/equipment/search",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentRecord>)
    )
)]
pub async fn search_equipment(
    State(state): State<AppState>,
    Query(query): Query<EquipmentQuery>,
) -> Json<Vec<EquipmentRecord>> {
    Json(state.services.equipment.search(&query).await)
}

/// Get equipment by serial number
#[utoipa::path(
    get,
    path = "/equipment/{serial}",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentRecord),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<EquipmentRecord>> {
    let equipment = state.services.equipment.get_by_serial(&serial).await?;
    Ok(Json(equipment))
}

/// Current holder and assignment date
#[utoipa::path(
    get,
    path = "/equipment/{serial}/state",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Live assignment", body = CurrentState),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_current_state(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<CurrentState>> {
    let current = state.services.equipment.current_state(&serial).await?;
    Ok(Json(current))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentRecord),
        (status = 400, description = "Missing field, unknown type or malformed date"),
        (status = 409, description = "Serial number already exists")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentRecord>)> {
    let equipment = state.services.equipment.create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment fields
#[utoipa::path(
    put,
    path = "/equipment/{serial}",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentRecord),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(serial): Path<String>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<EquipmentRecord>> {
    let equipment = state.services.equipment.update(&serial, data).await?;
    Ok(Json(equipment))
}

/// Transfer equipment to another employee
#[utoipa::path(
    post,
    path = "/equipment/{serial}/transfer",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Equipment transferred", body = EquipmentRecord),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Already assigned to this employee")
    )
)]
pub async fn transfer_equipment(
    State(state): State<AppState>,
    Path(serial): Path<String>,
    Json(request): Json<TransferRequest>,
) -> AppResult<Json<EquipmentRecord>> {
    let equipment = state.services.equipment.transfer(&serial, request).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{serial}",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(&serial).await?;
    Ok(StatusCode::NO_CONTENT)
}
