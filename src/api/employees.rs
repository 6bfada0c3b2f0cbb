//! Employee roster endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        employee::{CreateEmployee, RenameEmployee},
        EquipmentRecord, HistoryRow, ImportReport, RenameOutcome,
    },
    AppState,
};

/// List employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Employee names, sorted", body = Vec<String>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.employees.list().await)
}

/// Add an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee added", body = String),
        (status = 409, description = "Employee already exists")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(data): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<String>)> {
    let name = state.services.employees.create(data).await?;
    Ok((StatusCode::CREATED, Json(name)))
}

/// Rename an employee everywhere, history included
#[utoipa::path(
    put,
    path = "/employees/{name}",
    tag = "employees",
    params(("name" = String, Path, description = "Current employee name")),
    request_body = RenameEmployee,
    responses(
        (status = 200, description = "Employee renamed", body = RenameOutcome),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "New name already taken")
    )
)]
pub async fn rename_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(data): Json<RenameEmployee>,
) -> AppResult<Json<RenameOutcome>> {
    let outcome = state.services.employees.rename(&name, data).await?;
    Ok(Json(outcome))
}

/// Delete an employee that holds no equipment
#[utoipa::path(
    delete,
    path = "/employees/{name}",
    tag = "employees",
    params(("name" = String, Path, description = "Employee name")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Equipment is still assigned to the employee")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.services.employees.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add every assignee found in the inventory to the roster
#[utoipa::path(
    post,
    path = "/employees/import",
    tag = "employees",
    responses(
        (status = 200, description = "Import summary", body = ImportReport)
    )
)]
pub async fn import_employees(State(state): State<AppState>) -> AppResult<Json<ImportReport>> {
    let report = state.services.employees.import_from_inventory().await?;
    Ok(Json(report))
}

/// Equipment currently assigned to an employee
#[utoipa::path(
    get,
    path = "/employees/{name}/equipment",
    tag = "employees",
    params(("name" = String, Path, description = "Employee name")),
    responses(
        (status = 200, description = "Assigned equipment", body = Vec<EquipmentRecord>)
    )
)]
pub async fn get_employee_equipment(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<EquipmentRecord>> {
    Json(state.services.employees.equipment(&name).await)
}

/// Every recorded assignment of an employee
#[utoipa::path(
    get,
    path = "/employees/{name}/history",
    tag = "employees",
    params(("name" = String, Path, description = "Employee name")),
    responses(
        (status = 200, description = "Assignment history", body = Vec<HistoryRow>)
    )
)]
pub async fn get_employee_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<HistoryRow>> {
    Json(state.services.employees.history(&name).await)
}
