//! Employee roster request and response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Add employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "Employee name is required"))]
    pub name: String,
}

/// Rename employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RenameEmployee {
    #[validate(length(min = 1, message = "New employee name is required"))]
    pub new_name: String,
}

/// What a rename touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct RenameOutcome {
    /// Equipment records whose assignment was updated
    pub records: usize,
    /// History entries whose assignment was updated
    pub history_entries: usize,
}

/// Result of importing assignees from the inventory into the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImportReport {
    pub added: usize,
    pub total: usize,
}
