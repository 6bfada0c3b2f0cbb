//! Equipment record model and request types

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ledger::date::parse_date;

/// One physical asset, keyed by its serial number.
///
/// Optional text fields are stored as `""` on disk, matching the
/// `inventory.json` layout, and surface as `None` in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentRecord {
    /// Must belong to the equipment type catalog
    #[serde(default)]
    pub equipment_type: String,
    #[serde(default)]
    pub model: String,
    /// Unique across all records
    #[serde(default)]
    pub serial_number: String,
    /// Currently responsible employee
    #[serde(
        default,
        serialize_with = "none_as_empty",
        deserialize_with = "empty_as_none"
    )]
    pub assignment: Option<String>,
    /// Date of the current assignment, `DD.MM.YYYY`. Kept verbatim so
    /// malformed legacy values survive a load/save cycle.
    #[serde(
        default,
        serialize_with = "none_as_empty",
        deserialize_with = "empty_as_none"
    )]
    pub date: Option<String>,
    #[serde(default)]
    pub comments: String,
    /// Set once on insert, `YYYY-MM-DD HH:MM:SS`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub created_datetime: Option<String>,
}

impl EquipmentRecord {
    pub fn assignee(&self) -> Option<&str> {
        self.assignment.as_deref()
    }

    /// Parsed assignment date, `None` when missing or malformed
    pub fn assignment_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    pub fn is_assigned_to(&self, employee: &str) -> bool {
        self.assignee() == Some(employee)
    }

    /// Every field as text, in column order, used by free-text search
    pub fn field_values(&self) -> [&str; 7] {
        [
            self.equipment_type.as_str(),
            self.model.as_str(),
            self.serial_number.as_str(),
            self.assignment.as_deref().unwrap_or_default(),
            self.date.as_deref().unwrap_or_default(),
            self.comments.as_str(),
            self.created_datetime.as_deref().unwrap_or_default(),
        ]
    }
}

/// Live assignment of one item, read from the equipment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CurrentState {
    pub serial_number: String,
    pub assignment: Option<String>,
    pub date: Option<String>,
}

impl From<&EquipmentRecord> for CurrentState {
    fn from(record: &EquipmentRecord) -> Self {
        Self {
            serial_number: record.serial_number.clone(),
            assignment: record.assignment.clone(),
            date: record.date.clone(),
        }
    }
}

/// Create equipment request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment type is required"))]
    pub equipment_type: String,
    pub model: Option<String>,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub assignment: Option<String>,
    /// `DD.MM.YYYY`; defaults to today when an assignee is given
    pub date: Option<String>,
    pub comments: Option<String>,
}

/// Update equipment request (cell edit).
///
/// Changing `assignment` is recorded in the history ledger like a transfer.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub equipment_type: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub assignment: Option<String>,
    pub date: Option<String>,
    pub comments: Option<String>,
}

/// Transfer equipment to another employee
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TransferRequest {
    #[validate(length(min = 1, message = "Employee is required"))]
    pub employee: String,
    /// `DD.MM.YYYY`, today when omitted
    pub date: Option<String>,
}

/// Free-text search over equipment records
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EquipmentQuery {
    /// Case-insensitive substring matched against every field
    pub q: Option<String>,
    /// Restrict to records currently assigned to this employee
    pub employee: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}
