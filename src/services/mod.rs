//! Business logic services

pub mod employees;
pub mod equipment;
pub mod equipment_types;
pub mod history;
pub mod reports;
pub mod settings;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub employees: employees::EmployeesService,
    pub equipment_types: equipment_types::EquipmentTypesService,
    pub history: history::HistoryService,
    pub reports: reports::ReportsService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let history = history::HistoryService::new(repository.clone());
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            employees: employees::EmployeesService::new(repository.clone()),
            equipment_types: equipment_types::EquipmentTypesService::new(repository.clone()),
            reports: reports::ReportsService::new(repository.clone(), history.clone()),
            history,
            settings: settings::SettingsService::new(
                repository.ledger,
                config.storage.clone(),
                config.ledger.default_equipment_types.clone(),
            ),
        }
    }
}
