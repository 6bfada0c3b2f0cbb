//! Export rows and chart data.
//!
//! Tables are plain headers plus rows of text; rendering them to PDF or a
//! spreadsheet is left to the client.

use crate::{
    error::AppResult,
    models::{
        equipment::EquipmentQuery, transfer::TransferQuery, EquipmentRecord, HistoryRow,
        ReportTable, Transfer, TypeCount,
    },
    repository::Repository,
    services::history::HistoryService,
};

const COMMENT_PREVIEW_CHARS: usize = 50;

const INVENTORY_HEADERS: [&str; 6] = [
    "Equipment type",
    "Model",
    "Serial number",
    "Assignment",
    "Date",
    "Comments",
];
const HISTORY_HEADERS: [&str; 4] = ["Equipment type", "Serial number", "Employee", "Assignment date"];
const TRANSFER_HEADERS: [&str; 5] = ["Date", "Equipment type", "Serial number", "From", "To"];

/// First 50 characters followed by `...` when the comment is longer
pub fn truncate_comment(comment: &str) -> String {
    if comment.chars().count() > COMMENT_PREVIEW_CHARS {
        let preview: String = comment.chars().take(COMMENT_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    } else {
        comment.to_string()
    }
}

fn inventory_table(title: &str, records: &[EquipmentRecord]) -> ReportTable {
    let mut table = ReportTable::new(title, &INVENTORY_HEADERS);
    for record in records {
        table.push_row(vec![
            record.equipment_type.clone(),
            record.model.clone(),
            record.serial_number.clone(),
            record.assignment.clone().unwrap_or_default(),
            record.date.clone().unwrap_or_default(),
            truncate_comment(&record.comments),
        ]);
    }
    table
}

fn history_table(title: &str, rows: Vec<HistoryRow>) -> ReportTable {
    let mut table = ReportTable::new(title, &HISTORY_HEADERS);
    for row in rows {
        table.push_row(vec![row.equipment_type, row.serial_number, row.assignment, row.date]);
    }
    table
}

fn transfer_table(title: &str, transfers: Vec<Transfer>) -> ReportTable {
    let mut table = ReportTable::new(title, &TRANSFER_HEADERS);
    for transfer in transfers {
        table.push_row(vec![
            transfer.date,
            transfer.equipment_type,
            transfer.serial_number,
            transfer.from_employee,
            transfer.to_employee,
        ]);
    }
    table
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
    history: HistoryService,
}

impl ReportsService {
    pub fn new(repository: Repository, history: HistoryService) -> Self {
        Self { repository, history }
    }

    pub async fn inventory(&self) -> ReportTable {
        let records = self.repository.equipment.list().await;
        inventory_table("Inventory", &records)
    }

    pub async fn search(&self, query: &EquipmentQuery) -> ReportTable {
        let records = self
            .repository
            .equipment
            .search(
                query.q.as_deref().unwrap_or_default(),
                query.employee.as_deref(),
            )
            .await;
        inventory_table("Search results", &records)
    }

    pub async fn employee_equipment(&self, employee: &str) -> ReportTable {
        let records = self.repository.equipment.list_for_employee(employee).await;
        inventory_table(&format!("Equipment assigned to {}", employee), &records)
    }

    pub async fn history(&self) -> ReportTable {
        history_table("Assignment history", self.repository.history.all_rows().await)
    }

    pub async fn transfers(&self, query: &TransferQuery) -> AppResult<ReportTable> {
        let transfers = self.history.transfers(query).await?;
        let title = format!("Transfers {} - {}", query.start.trim(), query.end.trim());
        Ok(transfer_table(&title, transfers))
    }

    /// Record count per equipment type, most common first
    pub async fn type_counts(&self) -> Vec<TypeCount> {
        self.repository.equipment.count_by_type().await
    }
}
