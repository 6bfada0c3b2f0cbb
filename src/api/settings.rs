//! Settings endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::settings::{SettingsResponse, UpdateSettingsRequest},
    AppState,
};

/// Get current settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(state.services.settings.get_settings().await)
}

/// Change the data directory
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = SettingsResponse),
        (status = 400, description = "Invalid directory"),
        (status = 500, description = "Directory could not be loaded")
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> AppResult<Json<SettingsResponse>> {
    let settings = state.services.settings.update_settings(request).await?;
    Ok(Json(settings))
}
