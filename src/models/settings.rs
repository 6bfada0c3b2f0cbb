//! `settings.json` and the settings API types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;

/// Contents of `settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub data_directory: PathBuf,
}

/// Current storage settings
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    /// Directory holding `ledger.json`
    #[schema(value_type = String)]
    pub data_directory: PathBuf,
    #[schema(value_type = String)]
    pub settings_file: PathBuf,
}

/// Change the data directory
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    #[schema(value_type = String)]
    pub data_directory: PathBuf,
}
