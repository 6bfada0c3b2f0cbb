//! Assignment history and transfer service

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    ledger::{date::parse_date, store::checked_date},
    models::{transfer::TransferQuery, HistoryEntry, HistoryRow, Transfer},
    repository::Repository,
};

/// Parse one end of a date window
fn window_date(value: &str, which: &str) -> AppResult<NaiveDate> {
    parse_date(value).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid {} date '{}', expected DD.MM.YYYY",
            which,
            value.trim()
        ))
    })
}

#[derive(Clone)]
pub struct HistoryService {
    repository: Repository,
}

impl HistoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// History of one serial number, in insertion order
    pub async fn history_for(&self, serial: &str) -> Vec<HistoryEntry> {
        self.repository.history.for_serial(serial).await
    }

    pub async fn rows_for_serial(&self, serial: &str) -> Vec<HistoryRow> {
        self.repository.history.rows_for_serial(serial).await
    }

    pub async fn all_rows(&self) -> Vec<HistoryRow> {
        self.repository.history.all_rows().await
    }

    pub async fn serials(&self, equipment_type: Option<&str>) -> Vec<String> {
        let equipment_type = equipment_type.map(str::trim).filter(|t| !t.is_empty());
        self.repository.history.serials(equipment_type).await
    }

    /// Record an assignment by hand; the date must be `DD.MM.YYYY`
    pub async fn record_assignment(&self, serial: &str, entry: HistoryEntry) -> AppResult<bool> {
        let date = checked_date(&entry.date)?;
        self.repository
            .history
            .record_assignment(serial, &entry.assignment, &date)
            .await
    }

    /// Transfers dated within the inclusive window
    pub async fn transfers(&self, query: &TransferQuery) -> AppResult<Vec<Transfer>> {
        let (start, end) = Self::window(query)?;
        Ok(self.repository.history.transfers_in_range(start, end).await)
    }

    fn window(query: &TransferQuery) -> AppResult<(NaiveDate, NaiveDate)> {
        let start = window_date(&query.start, "start")?;
        let end = window_date(&query.end, "end")?;
        if start > end {
            return Err(AppError::Validation(format!(
                "Start date {} is after end date {}",
                query.start.trim(),
                query.end.trim()
            )));
        }
        Ok((start, end))
    }
}
