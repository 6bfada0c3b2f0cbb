//! Equipment type catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::equipment_type::CreateEquipmentType, AppState};

/// List equipment types
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "equipment-types",
    responses(
        (status = 200, description = "Allowed equipment types", body = Vec<String>)
    )
)]
pub async fn list_equipment_types(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.equipment_types.list().await)
}

/// Add an equipment type
#[utoipa::path(
    post,
    path = "/equipment-types",
    tag = "equipment-types",
    request_body = CreateEquipmentType,
    responses(
        (status = 201, description = "Equipment type added", body = String),
        (status = 409, description = "Equipment type already exists")
    )
)]
pub async fn create_equipment_type(
    State(state): State<AppState>,
    Json(data): Json<CreateEquipmentType>,
) -> AppResult<(StatusCode, Json<String>)> {
    let name = state.services.equipment_types.create(data).await?;
    Ok((StatusCode::CREATED, Json(name)))
}

/// Delete an unused equipment type
#[utoipa::path(
    delete,
    path = "/equipment-types/{name}",
    tag = "equipment-types",
    params(("name" = String, Path, description = "Equipment type")),
    responses(
        (status = 204, description = "Equipment type deleted"),
        (status = 404, description = "Equipment type not found"),
        (status = 409, description = "Equipment type still in use")
    )
)]
pub async fn delete_equipment_type(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.services.equipment_types.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
