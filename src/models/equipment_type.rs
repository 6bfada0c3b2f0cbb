//! Equipment type catalog request types

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Add equipment type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentType {
    #[validate(length(min = 1, message = "Equipment type name is required"))]
    pub name: String,
}
