//! Assignment history ledger types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Placeholder shown when a serial number has no live equipment record
pub const MISSING_VALUE: &str = "-";

/// One past assignment of a serial number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub assignment: String,
    /// `DD.MM.YYYY`
    pub date: String,
}

impl HistoryEntry {
    pub fn new(assignment: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            assignment: assignment.into(),
            date: date.into(),
        }
    }
}

/// Serial number -> entries in insertion order (`history.json` layout)
pub type HistoryLedger = IndexMap<String, Vec<HistoryEntry>>;

/// History entry joined with the equipment type of its serial number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HistoryRow {
    /// `-` when the serial number no longer exists in the inventory
    pub equipment_type: String,
    pub serial_number: String,
    pub assignment: String,
    pub date: String,
}

/// Serial number lookup for the history view
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SerialQuery {
    /// Only serial numbers of this equipment type
    pub equipment_type: Option<String>,
}
