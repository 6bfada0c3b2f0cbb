//! Equipment type catalog service

use validator::Validate;

use crate::{error::AppResult, models::equipment_type::CreateEquipmentType, repository::Repository};

#[derive(Clone)]
pub struct EquipmentTypesService {
    repository: Repository,
}

impl EquipmentTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<String> {
        self.repository.equipment_types.list().await
    }

    pub async fn create(&self, data: CreateEquipmentType) -> AppResult<String> {
        data.validate()?;
        self.repository.equipment_types.create(&data.name).await
    }

    /// Refused while any equipment record uses the type
    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.repository.equipment_types.delete(name).await
    }
}
