//! Settings service: where the ledger lives

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::settings::{Settings, SettingsResponse, UpdateSettingsRequest},
    repository::Ledger,
};

/// Data directory named by `settings.json`, or the configured fallback when
/// the file is missing, unreadable or names a directory that does not exist
pub async fn resolve_data_directory(storage: &StorageConfig) -> PathBuf {
    match read_settings(storage).await {
        Ok(Some(settings)) if settings.data_directory.is_dir() => settings.data_directory,
        Ok(Some(settings)) => {
            tracing::warn!(
                directory = %settings.data_directory.display(),
                fallback = %storage.data_directory.display(),
                "Data directory from settings does not exist, using fallback"
            );
            storage.data_directory.clone()
        }
        Ok(None) => storage.data_directory.clone(),
        Err(e) => {
            tracing::warn!(
                file = %storage.settings_file.display(),
                error = %e,
                "Unreadable settings file, using fallback data directory"
            );
            storage.data_directory.clone()
        }
    }
}

async fn read_settings(storage: &StorageConfig) -> AppResult<Option<Settings>> {
    match tokio::fs::read(&storage.settings_file).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_settings(storage: &StorageConfig, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = storage.settings_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(settings)?;
    tokio::fs::write(&storage.settings_file, bytes).await?;
    Ok(())
}

#[derive(Clone)]
pub struct SettingsService {
    ledger: Ledger,
    storage: StorageConfig,
    default_equipment_types: Vec<String>,
}

impl SettingsService {
    pub fn new(ledger: Ledger, storage: StorageConfig, default_equipment_types: Vec<String>) -> Self {
        Self {
            ledger,
            storage,
            default_equipment_types,
        }
    }

    /// Get current settings
    pub async fn get_settings(&self) -> SettingsResponse {
        SettingsResponse {
            data_directory: self.ledger.directory().await,
            settings_file: self.storage.settings_file.clone(),
        }
    }

    /// Move to another data directory and remember it in `settings.json`
    pub async fn update_settings(&self, request: UpdateSettingsRequest) -> AppResult<SettingsResponse> {
        if request.data_directory.as_os_str().is_empty() {
            return Err(AppError::Validation("Data directory is required".to_string()));
        }

        let previous = self.ledger.directory().await;
        self.ledger
            .switch_directory(&request.data_directory, &self.default_equipment_types)
            .await?;

        let settings = Settings {
            data_directory: request.data_directory,
        };
        if let Err(e) = write_settings(&self.storage, &settings).await {
            tracing::error!(
                file = %self.storage.settings_file.display(),
                error = %e,
                "Failed to save settings, restoring previous data directory"
            );
            self.ledger
                .switch_directory(previous, &self.default_equipment_types)
                .await?;
            return Err(e);
        }

        Ok(self.get_settings().await)
    }
}
