//! Employee roster service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        employee::{CreateEmployee, RenameEmployee},
        EquipmentRecord, HistoryRow, ImportReport, RenameOutcome,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EmployeesService {
    repository: Repository,
}

impl EmployeesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<String> {
        self.repository.employees.list().await
    }

    pub async fn create(&self, data: CreateEmployee) -> AppResult<String> {
        data.validate()?;
        self.repository.employees.create(&data.name).await
    }

    /// Refused while any equipment is assigned to the employee
    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.repository.employees.delete(name).await
    }

    pub async fn rename(&self, name: &str, data: RenameEmployee) -> AppResult<RenameOutcome> {
        data.validate()?;
        self.repository.employees.rename(name, &data.new_name).await
    }

    pub async fn import_from_inventory(&self) -> AppResult<ImportReport> {
        self.repository.employees.import_from_inventory().await
    }

    /// Equipment the employee holds right now
    pub async fn equipment(&self, name: &str) -> Vec<EquipmentRecord> {
        self.repository.equipment.list_for_employee(name).await
    }

    /// Everything the employee has ever been assigned
    pub async fn history(&self, name: &str) -> Vec<HistoryRow> {
        self.repository.history.rows_for_employee(name).await
    }
}
