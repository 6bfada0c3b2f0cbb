//! In-memory ledger tables and their mutators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::{format_date, parse_date};
use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::UpdateEquipment, EquipmentRecord, HistoryEntry, HistoryLedger, ImportReport,
        RenameOutcome,
    },
};

/// The whole dataset: live inventory, assignment history, employee roster
/// and equipment type catalog.
///
/// Serialized as-is, this is the `ledger.json` snapshot; each section keeps
/// the layout of the matching legacy file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStore {
    #[serde(default)]
    inventory: Vec<EquipmentRecord>,
    #[serde(default)]
    history: HistoryLedger,
    #[serde(default)]
    employees: Vec<String>,
    #[serde(default)]
    equipment_types: Vec<String>,
}

/// Trimmed value, rejecting blanks
fn required(value: &str, what: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", what)));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Trimmed `DD.MM.YYYY` value, rejecting anything that does not parse
pub fn checked_date(value: &str) -> AppResult<String> {
    let value = value.trim();
    match parse_date(value) {
        Some(_) => Ok(value.to_string()),
        None => Err(AppError::Validation(format!(
            "Invalid date '{}', expected DD.MM.YYYY",
            value
        ))),
    }
}

impl LedgerStore {
    /// Empty store with a seeded equipment type catalog
    pub fn new(equipment_types: Vec<String>) -> Self {
        Self {
            equipment_types,
            ..Self::default()
        }
    }

    pub fn from_parts(
        inventory: Vec<EquipmentRecord>,
        history: HistoryLedger,
        employees: Vec<String>,
        equipment_types: Vec<String>,
    ) -> Self {
        Self {
            inventory,
            history,
            employees,
            equipment_types,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn inventory(&self) -> &[EquipmentRecord] {
        &self.inventory
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn employees(&self) -> &[String] {
        &self.employees
    }

    pub fn equipment_types(&self) -> &[String] {
        &self.equipment_types
    }

    pub fn equipment(&self, serial: &str) -> Option<&EquipmentRecord> {
        self.inventory.iter().find(|r| r.serial_number == serial)
    }

    /// Past assignments of one serial number, in insertion order
    pub fn history_for(&self, serial: &str) -> &[HistoryEntry] {
        self.history.get(serial).map(Vec::as_slice).unwrap_or_default()
    }

    fn position(&self, serial: &str) -> AppResult<usize> {
        self.inventory
            .iter()
            .position(|r| r.serial_number == serial)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", serial)))
    }

    fn ensure_known_type(&self, equipment_type: &str) -> AppResult<()> {
        if self.equipment_types.iter().any(|t| t == equipment_type) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Unknown equipment type '{}'",
                equipment_type
            )))
        }
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Append `(employee, date)` to a serial number's history unless the
    /// exact pair is already there. Returns whether an entry was added.
    ///
    /// The date is stored verbatim; malformed dates are tolerated here and
    /// left out of chronological views.
    pub fn record_assignment(&mut self, serial: &str, employee: &str, date: &str) -> AppResult<bool> {
        let serial = required(serial, "Serial number")?;
        let employee = required(employee, "Employee")?;
        let entry = HistoryEntry::new(employee, date.trim());

        let entries = self.history.entry(serial).or_default();
        if entries.contains(&entry) {
            return Ok(false);
        }
        entries.push(entry);
        Ok(true)
    }

    /// Make sure the live assignment of `record` is in the history before it
    /// gets overwritten
    fn backfill(&mut self, record: &EquipmentRecord) -> AppResult<()> {
        if let (Some(employee), Some(date)) = (record.assignee(), record.date.as_deref()) {
            if parse_date(date).is_some() {
                self.record_assignment(&record.serial_number, employee, date)?;
            }
        }
        Ok(())
    }

    fn rekey_history(&mut self, old: &str, new: &str) {
        if let Some(entries) = self.history.shift_remove(old) {
            self.history.insert(new.to_string(), entries);
        }
    }

    /// A new assignment may not predate the one it replaces
    fn ensure_not_backdated(record: &EquipmentRecord, date: NaiveDate) -> AppResult<()> {
        match record.assignment_date() {
            Some(current) if record.assignee().is_some() && date < current => {
                Err(AppError::BusinessRule(format!(
                    "Equipment {} is assigned since {}, cannot reassign it on {}",
                    record.serial_number,
                    format_date(current),
                    format_date(date)
                )))
            }
            _ => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // Equipment
    // -----------------------------------------------------------------------

    /// Insert a new record. Type and serial number are mandatory, the type
    /// must be in the catalog and the serial number must be unused.
    pub fn add_equipment(&mut self, mut record: EquipmentRecord) -> AppResult<EquipmentRecord> {
        record.equipment_type = required(&record.equipment_type, "Equipment type")?;
        record.serial_number = required(&record.serial_number, "Serial number")?;
        self.ensure_known_type(&record.equipment_type)?;
        if self.equipment(&record.serial_number).is_some() {
            return Err(AppError::Conflict(format!(
                "Equipment with serial number {} already exists",
                record.serial_number
            )));
        }

        record.model = record.model.trim().to_string();
        record.comments = record.comments.trim().to_string();
        record.assignment = record.assignment.as_deref().and_then(optional);
        record.date = match record.date.as_deref().and_then(optional) {
            Some(date) => Some(checked_date(&date)?),
            None => None,
        };

        self.inventory.push(record.clone());
        if let (Some(employee), Some(date)) = (record.assignee(), record.date.as_deref()) {
            self.record_assignment(&record.serial_number, employee, date)?;
        }
        Ok(record)
    }

    /// Apply a cell edit. A new assignee is recorded in the history, dated
    /// with the edited date or `today`.
    pub fn update_equipment(
        &mut self,
        serial: &str,
        changes: UpdateEquipment,
        today: NaiveDate,
    ) -> AppResult<EquipmentRecord> {
        let index = self.position(serial)?;
        let previous = self.inventory[index].clone();
        let mut record = previous.clone();

        if let Some(new_serial) = changes.serial_number.as_deref() {
            let new_serial = required(new_serial, "Serial number")?;
            if new_serial != record.serial_number {
                if self.equipment(&new_serial).is_some() {
                    return Err(AppError::Conflict(format!(
                        "Equipment with serial number {} already exists",
                        new_serial
                    )));
                }
                if !self.history_for(&new_serial).is_empty() {
                    return Err(AppError::Conflict(format!(
                        "Serial number {} still has the history of a deleted unit",
                        new_serial
                    )));
                }
                record.serial_number = new_serial;
            }
        }
        if let Some(equipment_type) = changes.equipment_type.as_deref() {
            let equipment_type = required(equipment_type, "Equipment type")?;
            self.ensure_known_type(&equipment_type)?;
            record.equipment_type = equipment_type;
        }
        if let Some(model) = changes.model.as_deref() {
            record.model = model.trim().to_string();
        }
        if let Some(comments) = changes.comments.as_deref() {
            record.comments = comments.trim().to_string();
        }

        // Some(None) clears the date
        let date_change = match changes.date.as_deref() {
            Some(date) => match optional(date) {
                Some(date) => Some(Some(checked_date(&date)?)),
                None => Some(None),
            },
            None => None,
        };

        let mut reassigned = None;
        let new_assignee = changes.assignment.as_deref().map(optional);
        match new_assignee {
            Some(assignee) if assignee != record.assignment => match assignee {
                Some(employee) => {
                    let date = date_change
                        .clone()
                        .flatten()
                        .unwrap_or_else(|| format_date(today));
                    if let Some(parsed) = parse_date(&date) {
                        Self::ensure_not_backdated(&previous, parsed)?;
                    }
                    record.assignment = Some(employee.clone());
                    record.date = Some(date.clone());
                    reassigned = Some((employee, date));
                }
                None => {
                    record.assignment = None;
                    if let Some(date) = date_change {
                        record.date = date;
                    }
                }
            },
            _ => {
                if let Some(date) = date_change {
                    record.date = date;
                }
            }
        }

        if record.serial_number != previous.serial_number {
            self.rekey_history(&previous.serial_number, &record.serial_number);
        }
        if let Some((employee, date)) = reassigned {
            let mut before = previous;
            before.serial_number = record.serial_number.clone();
            self.backfill(&before)?;
            self.record_assignment(&record.serial_number, &employee, &date)?;
        }

        self.inventory[index] = record.clone();
        Ok(record)
    }

    /// Hand equipment over to `employee` on `date`: the live record and the
    /// history change together.
    pub fn transfer(&mut self, serial: &str, employee: &str, date: NaiveDate) -> AppResult<EquipmentRecord> {
        let employee = required(employee, "Employee")?;
        let index = self.position(serial)?;
        let previous = self.inventory[index].clone();
        if previous.is_assigned_to(&employee) {
            return Err(AppError::BusinessRule(format!(
                "Equipment {} is already assigned to {}",
                serial, employee
            )));
        }
        Self::ensure_not_backdated(&previous, date)?;

        self.backfill(&previous)?;
        let date = format_date(date);
        self.record_assignment(&previous.serial_number, &employee, &date)?;

        let record = &mut self.inventory[index];
        record.assignment = Some(employee);
        record.date = Some(date);
        Ok(record.clone())
    }

    /// Remove a record. Its history stays in the ledger.
    pub fn delete_equipment(&mut self, serial: &str) -> AppResult<EquipmentRecord> {
        let index = self.position(serial)?;
        Ok(self.inventory.remove(index))
    }

    // -----------------------------------------------------------------------
    // Employee roster
    // -----------------------------------------------------------------------

    pub fn add_employee(&mut self, name: &str) -> AppResult<String> {
        let name = required(name, "Employee name")?;
        if self.employees.contains(&name) {
            return Err(AppError::Conflict(format!("Employee '{}' already exists", name)));
        }
        self.employees.push(name.clone());
        Ok(name)
    }

    /// Remove an employee. Only a live assignment blocks deletion; history
    /// entries naming the employee do not.
    pub fn delete_employee(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        let index = self
            .employees
            .iter()
            .position(|e| e == name)
            .ok_or_else(|| AppError::NotFound(format!("Employee '{}' not found", name)))?;

        let in_use = self.inventory.iter().filter(|r| r.is_assigned_to(name)).count();
        if in_use > 0 {
            return Err(AppError::Integrity(format!(
                "Employee '{}' is assigned to {} equipment record(s)",
                name, in_use
            )));
        }

        self.employees.remove(index);
        Ok(())
    }

    /// Rename an employee in the roster, every live assignment and every
    /// history entry
    pub fn rename_employee(&mut self, old: &str, new: &str) -> AppResult<RenameOutcome> {
        let old = old.trim();
        let new = required(new, "New employee name")?;
        let index = self
            .employees
            .iter()
            .position(|e| e == old)
            .ok_or_else(|| AppError::NotFound(format!("Employee '{}' not found", old)))?;
        if new == old {
            return Err(AppError::Validation("New name equals the current name".to_string()));
        }
        if self.employees.contains(&new) {
            return Err(AppError::Conflict(format!("Employee '{}' already exists", new)));
        }

        self.employees[index] = new.clone();

        let mut outcome = RenameOutcome::default();
        for record in self.inventory.iter_mut().filter(|r| r.is_assigned_to(old)) {
            record.assignment = Some(new.clone());
            outcome.records += 1;
        }
        for entries in self.history.values_mut() {
            let mut touched = false;
            for entry in entries.iter_mut().filter(|e| e.assignment == old) {
                entry.assignment = new.clone();
                outcome.history_entries += 1;
                touched = true;
            }
            if touched {
                dedup_entries(entries);
            }
        }
        Ok(outcome)
    }

    /// Add every distinct live assignee missing from the roster
    pub fn import_employees_from_inventory(&mut self) -> ImportReport {
        let mut added = 0;
        for record in &self.inventory {
            if let Some(employee) = record.assignee() {
                if !self.employees.iter().any(|e| e == employee) {
                    self.employees.push(employee.to_string());
                    added += 1;
                }
            }
        }
        ImportReport {
            added,
            total: self.employees.len(),
        }
    }

    // -----------------------------------------------------------------------
    // Equipment type catalog
    // -----------------------------------------------------------------------

    pub fn add_equipment_type(&mut self, name: &str) -> AppResult<String> {
        let name = required(name, "Equipment type name")?;
        if self.equipment_types.contains(&name) {
            return Err(AppError::Conflict(format!(
                "Equipment type '{}' already exists",
                name
            )));
        }
        self.equipment_types.push(name.clone());
        Ok(name)
    }

    pub fn delete_equipment_type(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        let index = self
            .equipment_types
            .iter()
            .position(|t| t == name)
            .ok_or_else(|| AppError::NotFound(format!("Equipment type '{}' not found", name)))?;

        let in_use = self
            .inventory
            .iter()
            .filter(|r| r.equipment_type == name)
            .count();
        if in_use > 0 {
            return Err(AppError::Integrity(format!(
                "Equipment type '{}' is used by {} equipment record(s)",
                name, in_use
            )));
        }

        self.equipment_types.remove(index);
        Ok(())
    }
}

/// Drop repeated `(assignment, date)` pairs, keeping first occurrences
fn dedup_entries(entries: &mut Vec<HistoryEntry>) {
    let mut seen: Vec<HistoryEntry> = Vec::with_capacity(entries.len());
    entries.retain(|entry| {
        if seen.contains(entry) {
            false
        } else {
            seen.push(entry.clone());
            true
        }
    });
}
