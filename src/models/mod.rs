//! Data models for the inventory ledger

pub mod employee;
pub mod equipment;
pub mod equipment_type;
pub mod history;
pub mod report;
pub mod settings;
pub mod transfer;

// Re-export commonly used types
pub use employee::{ImportReport, RenameOutcome};
pub use equipment::{CurrentState, EquipmentRecord};
pub use history::{HistoryEntry, HistoryLedger, HistoryRow};
pub use report::{ReportTable, TypeCount};
pub use transfer::Transfer;
