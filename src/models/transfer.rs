//! Transfer (change of assignment) model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A detected change of assignment between two consecutive points of a
/// serial number's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Transfer {
    pub serial_number: String,
    pub equipment_type: String,
    pub from_employee: String,
    pub to_employee: String,
    /// `DD.MM.YYYY`
    pub date: String,
}

/// Inclusive date window, both ends `DD.MM.YYYY`
#[derive(Debug, Deserialize, IntoParams)]
pub struct TransferQuery {
    pub start: String,
    pub end: String,
}
