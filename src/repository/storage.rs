//! On-disk snapshot of the ledger and the shared in-memory handle

use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    ledger::LedgerStore,
    models::{EquipmentRecord, HistoryLedger},
};

/// Single-file snapshot holding all four tables
pub const SNAPSHOT_FILE: &str = "ledger.json";

// Per-table files written by earlier versions, imported when no snapshot exists
pub const LEGACY_INVENTORY_FILE: &str = "inventory.json";
pub const LEGACY_HISTORY_FILE: &str = "history.json";
pub const LEGACY_EMPLOYEES_FILE: &str = "sotrudniki.json";
pub const LEGACY_EQUIPMENT_TYPES_FILE: &str = "equipment_types.json";

struct LedgerState {
    directory: PathBuf,
    store: LedgerStore,
}

/// Shared, lock-protected ledger bound to a data directory.
///
/// Writers get exclusive access for the whole mutate-and-persist cycle, so
/// the file on disk always matches the in-memory store.
#[derive(Clone)]
pub struct Ledger {
    state: Arc<RwLock<LedgerState>>,
}

impl Ledger {
    /// Load the ledger stored in `directory`, creating the directory if needed
    pub async fn open(directory: impl Into<PathBuf>, default_types: &[String]) -> AppResult<Self> {
        let directory = directory.into();
        let store = load_store(&directory, default_types).await?;
        tracing::info!(
            directory = %directory.display(),
            records = store.inventory().len(),
            employees = store.employees().len(),
            "Ledger loaded"
        );
        Ok(Self {
            state: Arc::new(RwLock::new(LedgerState { directory, store })),
        })
    }

    pub async fn directory(&self) -> PathBuf {
        self.state.read().await.directory.clone()
    }

    /// Run a read-only query against the current store
    pub async fn read<T>(&self, query: impl FnOnce(&LedgerStore) -> T) -> T {
        let state = self.state.read().await;
        query(&state.store)
    }

    /// Apply a mutation and persist the result.
    ///
    /// The mutation runs on a copy; the copy replaces the live store only
    /// after it has been written to disk, so a failed mutation or a failed
    /// write leaves the previous state in place.
    pub async fn write<T>(
        &self,
        mutation: impl FnOnce(&mut LedgerStore) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut state = self.state.write().await;
        let mut draft = state.store.clone();
        let value = mutation(&mut draft)?;

        if let Err(e) = save_store(&state.directory, &draft).await {
            tracing::error!(
                directory = %state.directory.display(),
                error = %e,
                "Failed to save ledger, keeping previous state"
            );
            return Err(e);
        }

        state.store = draft;
        Ok(value)
    }

    /// Point the ledger at another data directory, loading whatever it holds
    pub async fn switch_directory(
        &self,
        directory: impl Into<PathBuf>,
        default_types: &[String],
    ) -> AppResult<()> {
        let directory = directory.into();
        let store = load_store(&directory, default_types).await?;

        let mut state = self.state.write().await;
        tracing::info!(
            from = %state.directory.display(),
            to = %directory.display(),
            records = store.inventory().len(),
            "Switched data directory"
        );
        state.directory = directory;
        state.store = store;
        Ok(())
    }
}

/// Read the snapshot, falling back to the legacy per-table files
pub async fn load_store(directory: &Path, default_types: &[String]) -> AppResult<LedgerStore> {
    tokio::fs::create_dir_all(directory).await?;

    if let Some(store) = read_json::<LedgerStore>(&directory.join(SNAPSHOT_FILE)).await? {
        return Ok(store);
    }

    let inventory = read_json::<Vec<EquipmentRecord>>(&directory.join(LEGACY_INVENTORY_FILE)).await?;
    let history = read_json::<HistoryLedger>(&directory.join(LEGACY_HISTORY_FILE)).await?;
    let employees = read_json::<Vec<String>>(&directory.join(LEGACY_EMPLOYEES_FILE)).await?;
    let equipment_types =
        read_json::<Vec<String>>(&directory.join(LEGACY_EQUIPMENT_TYPES_FILE)).await?;

    let imported = inventory.is_some() || history.is_some() || employees.is_some();
    if imported {
        tracing::info!(
            directory = %directory.display(),
            "No {} found, importing legacy data files",
            SNAPSHOT_FILE
        );
    }

    Ok(LedgerStore::from_parts(
        inventory.unwrap_or_default(),
        history.unwrap_or_default(),
        employees.unwrap_or_default(),
        equipment_types.unwrap_or_else(|| default_types.to_vec()),
    ))
}

/// Write the snapshot through a temporary file and an atomic rename
pub async fn save_store(directory: &Path, store: &LedgerStore) -> AppResult<()> {
    tokio::fs::create_dir_all(directory).await?;

    let target = directory.join(SNAPSHOT_FILE);
    let temp = directory.join(format!("{}.tmp", SNAPSHOT_FILE));
    let bytes = serde_json::to_vec_pretty(store)?;

    tokio::fs::write(&temp, &bytes).await?;
    tokio::fs::rename(&temp, &target).await?;
    tracing::debug!(path = %target.display(), bytes = bytes.len(), "Ledger saved");
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
