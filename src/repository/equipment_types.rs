//! Equipment type catalog in the ledger

use super::Ledger;
use crate::error::AppResult;

#[derive(Clone)]
pub struct EquipmentTypesRepository {
    ledger: Ledger,
}

impl EquipmentTypesRepository {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub async fn list(&self) -> Vec<String> {
        self.ledger.read(|store| store.equipment_types().to_vec()).await
    }

    pub async fn create(&self, name: &str) -> AppResult<String> {
        let name = self.ledger.write(|store| store.add_equipment_type(name)).await?;
        tracing::info!(equipment_type = %name, "Equipment type added");
        Ok(name)
    }

    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.ledger
            .write(|store| store.delete_equipment_type(name))
            .await?;
        tracing::info!(equipment_type = %name, "Equipment type deleted");
        Ok(())
    }
}
