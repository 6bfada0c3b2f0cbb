//! Assignment history and transfers

use chrono::NaiveDate;

use super::Ledger;
use crate::{
    error::AppResult,
    models::{HistoryEntry, HistoryRow, Transfer},
};

#[derive(Clone)]
pub struct HistoryRepository {
    ledger: Ledger,
}

impl HistoryRepository {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Entries of one serial number in insertion order
    pub async fn for_serial(&self, serial: &str) -> Vec<HistoryEntry> {
        self.ledger.read(|store| store.history_for(serial).to_vec()).await
    }

    pub async fn rows_for_serial(&self, serial: &str) -> Vec<HistoryRow> {
        self.ledger.read(|store| store.history_rows(serial)).await
    }

    pub async fn all_rows(&self) -> Vec<HistoryRow> {
        self.ledger.read(|store| store.all_history_rows()).await
    }

    pub async fn rows_for_employee(&self, employee: &str) -> Vec<HistoryRow> {
        self.ledger
            .read(|store| store.assignments_for_employee(employee))
            .await
    }

    /// Serial numbers for the history picker
    pub async fn serials(&self, equipment_type: Option<&str>) -> Vec<String> {
        self.ledger.read(|store| store.serials(equipment_type)).await
    }

    /// Append an assignment unless the exact pair is already recorded
    pub async fn record_assignment(&self, serial: &str, employee: &str, date: &str) -> AppResult<bool> {
        let added = self
            .ledger
            .write(|store| store.record_assignment(serial, employee, date))
            .await?;
        if added {
            tracing::info!(serial = %serial, employee = %employee, date = %date, "Assignment recorded");
        }
        Ok(added)
    }

    pub async fn transfers_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Transfer> {
        self.ledger
            .read(|store| store.transfers_in_range(start, end))
            .await
    }
}
