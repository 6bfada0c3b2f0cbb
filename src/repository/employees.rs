//! Employee roster in the ledger

use super::Ledger;
use crate::{
    error::AppResult,
    models::{ImportReport, RenameOutcome},
};

#[derive(Clone)]
pub struct EmployeesRepository {
    ledger: Ledger,
}

impl EmployeesRepository {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Roster names, sorted
    pub async fn list(&self) -> Vec<String> {
        let mut names = self.ledger.read(|store| store.employees().to_vec()).await;
        names.sort();
        names
    }

    pub async fn create(&self, name: &str) -> AppResult<String> {
        let name = self.ledger.write(|store| store.add_employee(name)).await?;
        tracing::info!(employee = %name, "Employee added");
        Ok(name)
    }

    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.ledger.write(|store| store.delete_employee(name)).await?;
        tracing::info!(employee = %name, "Employee deleted");
        Ok(())
    }

    pub async fn rename(&self, old: &str, new: &str) -> AppResult<RenameOutcome> {
        let outcome = self
            .ledger
            .write(|store| store.rename_employee(old, new))
            .await?;
        tracing::info!(
            from = %old,
            to = %new,
            records = outcome.records,
            history_entries = outcome.history_entries,
            "Employee renamed"
        );
        Ok(outcome)
    }

    pub async fn import_from_inventory(&self) -> AppResult<ImportReport> {
        let report = self
            .ledger
            .write(|store| Ok(store.import_employees_from_inventory()))
            .await?;
        tracing::info!(added = report.added, total = report.total, "Employees imported from inventory");
        Ok(report)
    }
}
