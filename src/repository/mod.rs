//! Repository layer over the file-backed ledger

pub mod employees;
pub mod equipment;
pub mod equipment_types;
pub mod history;
pub mod storage;

pub use storage::Ledger;

/// Main repository struct holding the shared ledger handle
#[derive(Clone)]
pub struct Repository {
    pub ledger: Ledger,
    pub equipment: equipment::EquipmentRepository,
    pub employees: employees::EmployeesRepository,
    pub equipment_types: equipment_types::EquipmentTypesRepository,
    pub history: history::HistoryRepository,
}

impl Repository {
    /// Create a new repository over the given ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(ledger.clone()),
            employees: employees::EmployeesRepository::new(ledger.clone()),
            equipment_types: equipment_types::EquipmentTypesRepository::new(ledger.clone()),
            history: history::HistoryRepository::new(ledger.clone()),
            ledger,
        }
    }
}
