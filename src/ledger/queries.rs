//! Read-only views over the ledger

use super::store::LedgerStore;
use crate::models::{history::MISSING_VALUE, EquipmentRecord, HistoryRow, TypeCount};

/// Chart label for records without an equipment type
pub const UNSPECIFIED_TYPE: &str = "Не указано";

impl LedgerStore {
    /// Equipment type of a serial number, `-` when the record is gone
    pub fn equipment_type_of(&self, serial: &str) -> &str {
        self.equipment(serial)
            .map(|r| r.equipment_type.as_str())
            .unwrap_or(MISSING_VALUE)
    }

    /// Records matching a case-insensitive substring on any field, optionally
    /// restricted to one assignee. No query and no employee matches nothing.
    pub fn search(&self, query: &str, employee: Option<&str>) -> Vec<&EquipmentRecord> {
        let query = query.trim().to_lowercase();
        let employee = employee.map(str::trim).filter(|e| !e.is_empty());
        if query.is_empty() && employee.is_none() {
            return Vec::new();
        }

        self.inventory()
            .iter()
            .filter(|record| {
                record
                    .field_values()
                    .iter()
                    .any(|value| !value.is_empty() && value.to_lowercase().contains(&query))
            })
            .filter(|record| employee.map_or(true, |e| record.is_assigned_to(e)))
            .collect()
    }

    /// Records currently assigned to `employee`
    pub fn equipment_for_employee(&self, employee: &str) -> Vec<&EquipmentRecord> {
        self.inventory()
            .iter()
            .filter(|r| r.is_assigned_to(employee))
            .collect()
    }

    /// Sorted, distinct serial numbers, optionally of one equipment type
    pub fn serials(&self, equipment_type: Option<&str>) -> Vec<String> {
        let mut serials: Vec<String> = self
            .inventory()
            .iter()
            .filter(|r| equipment_type.map_or(true, |t| r.equipment_type == t))
            .map(|r| r.serial_number.clone())
            .filter(|s| !s.is_empty())
            .collect();
        serials.sort();
        serials.dedup();
        serials
    }

    /// History of one serial number joined with its equipment type
    pub fn history_rows(&self, serial: &str) -> Vec<HistoryRow> {
        let equipment_type = self.equipment_type_of(serial);
        self.history_for(serial)
            .iter()
            .map(|entry| HistoryRow {
                equipment_type: equipment_type.to_string(),
                serial_number: serial.to_string(),
                assignment: entry.assignment.clone(),
                date: entry.date.clone(),
            })
            .collect()
    }

    /// The whole history ledger as rows, serial numbers in ledger order
    pub fn all_history_rows(&self) -> Vec<HistoryRow> {
        self.history()
            .keys()
            .flat_map(|serial| self.history_rows(serial))
            .collect()
    }

    /// Every history entry naming `employee`, across all serial numbers
    pub fn assignments_for_employee(&self, employee: &str) -> Vec<HistoryRow> {
        self.all_history_rows()
            .into_iter()
            .filter(|row| row.assignment == employee)
            .collect()
    }

    /// Record count per equipment type, most common first
    pub fn type_counts(&self) -> Vec<TypeCount> {
        let mut counts: Vec<TypeCount> = Vec::new();
        for record in self.inventory() {
            let equipment_type = match record.equipment_type.trim() {
                "" => UNSPECIFIED_TYPE,
                t => t,
            };
            match counts.iter_mut().find(|c| c.equipment_type == equipment_type) {
                Some(count) => count.count += 1,
                None => counts.push(TypeCount {
                    equipment_type: equipment_type.to_string(),
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.equipment_type.cmp(&b.equipment_type))
        });
        counts
    }
}
