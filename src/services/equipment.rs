//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    ledger::date::{format_date, now_timestamp, parse_date, today},
    models::equipment::{
        CreateEquipment, CurrentState, EquipmentQuery, EquipmentRecord, TransferRequest,
        UpdateEquipment,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<EquipmentRecord> {
        self.repository.equipment.list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.equipment.count().await
    }

    pub async fn get_by_serial(&self, serial: &str) -> AppResult<EquipmentRecord> {
        self.repository.equipment.get_by_serial(serial).await
    }

    pub async fn current_state(&self, serial: &str) -> AppResult<CurrentState> {
        self.repository.equipment.current_state(serial).await
    }

    /// Add equipment; an assignee without a date is assigned today
    pub async fn create(&self, data: CreateEquipment) -> AppResult<EquipmentRecord> {
        data.validate()?;

        let assignment = data
            .assignment
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        let date = match data.date.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()) {
            Some(date) => Some(date),
            None if assignment.is_some() => Some(format_date(today())),
            None => None,
        };

        let record = EquipmentRecord {
            equipment_type: data.equipment_type,
            model: data.model.unwrap_or_default(),
            serial_number: data.serial_number,
            assignment,
            date,
            comments: data.comments.unwrap_or_default(),
            created_datetime: Some(now_timestamp()),
        };
        self.repository.equipment.create(record).await
    }

    pub async fn update(&self, serial: &str, changes: UpdateEquipment) -> AppResult<EquipmentRecord> {
        self.repository.equipment.update(serial, changes, today()).await
    }

    /// Hand equipment over to another employee, today unless a date is given
    pub async fn transfer(&self, serial: &str, request: TransferRequest) -> AppResult<EquipmentRecord> {
        request.validate()?;
        let date = match request.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) => parse_date(date).ok_or_else(|| {
                AppError::Validation(format!("Invalid date '{}', expected DD.MM.YYYY", date))
            })?,
            None => today(),
        };
        self.repository
            .equipment
            .transfer(serial, &request.employee, date)
            .await
    }

    pub async fn delete(&self, serial: &str) -> AppResult<EquipmentRecord> {
        self.repository.equipment.delete(serial).await
    }

    pub async fn search(&self, query: &EquipmentQuery) -> Vec<EquipmentRecord> {
        self.repository
            .equipment
            .search(
                query.q.as_deref().unwrap_or_default(),
                query.employee.as_deref(),
            )
            .await
    }
}
