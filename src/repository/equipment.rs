//! Equipment records in the ledger

use chrono::NaiveDate;

use super::Ledger;
use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{CurrentState, UpdateEquipment},
        EquipmentRecord, TypeCount,
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    ledger: Ledger,
}

impl EquipmentRepository {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// List all equipment in storage order
    pub async fn list(&self) -> Vec<EquipmentRecord> {
        self.ledger.read(|store| store.inventory().to_vec()).await
    }

    pub async fn count(&self) -> usize {
        self.ledger.read(|store| store.inventory().len()).await
    }

    /// Get equipment by serial number
    pub async fn get_by_serial(&self, serial: &str) -> AppResult<EquipmentRecord> {
        self.ledger
            .read(|store| store.equipment(serial).cloned())
            .await
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", serial)))
    }

    /// Live assignment of one item
    pub async fn current_state(&self, serial: &str) -> AppResult<CurrentState> {
        self.get_by_serial(serial)
            .await
            .map(|record| CurrentState::from(&record))
    }

    pub async fn create(&self, record: EquipmentRecord) -> AppResult<EquipmentRecord> {
        let created = self.ledger.write(|store| store.add_equipment(record)).await?;
        tracing::info!(
            serial = %created.serial_number,
            equipment_type = %created.equipment_type,
            assignment = created.assignee().unwrap_or_default(),
            "Equipment created"
        );
        Ok(created)
    }

    pub async fn update(
        &self,
        serial: &str,
        changes: UpdateEquipment,
        today: NaiveDate,
    ) -> AppResult<EquipmentRecord> {
        let updated = self
            .ledger
            .write(|store| store.update_equipment(serial, changes, today))
            .await?;
        tracing::info!(serial = %serial, now = %updated.serial_number, "Equipment updated");
        Ok(updated)
    }

    pub async fn transfer(&self, serial: &str, employee: &str, date: NaiveDate) -> AppResult<EquipmentRecord> {
        let updated = self
            .ledger
            .write(|store| store.transfer(serial, employee, date))
            .await?;
        tracing::info!(
            serial = %serial,
            employee = %employee,
            date = updated.date.as_deref().unwrap_or_default(),
            "Equipment transferred"
        );
        Ok(updated)
    }

    pub async fn delete(&self, serial: &str) -> AppResult<EquipmentRecord> {
        let removed = self.ledger.write(|store| store.delete_equipment(serial)).await?;
        tracing::info!(serial = %serial, "Equipment deleted");
        Ok(removed)
    }

    /// Free-text search, optionally restricted to one assignee
    pub async fn search(&self, query: &str, employee: Option<&str>) -> Vec<EquipmentRecord> {
        self.ledger
            .read(|store| store.search(query, employee).into_iter().cloned().collect())
            .await
    }

    /// Equipment currently held by an employee
    pub async fn list_for_employee(&self, employee: &str) -> Vec<EquipmentRecord> {
        self.ledger
            .read(|store| {
                store
                    .equipment_for_employee(employee)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Record count per equipment type (chart data)
    pub async fn count_by_type(&self) -> Vec<TypeCount> {
        self.ledger.read(|store| store.type_counts()).await
    }
}
