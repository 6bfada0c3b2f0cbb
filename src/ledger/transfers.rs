//! Transfer detection over the unified assignment timeline

use chrono::NaiveDate;

use super::{date::parse_date, store::LedgerStore};
use crate::models::{history::MISSING_VALUE, HistoryEntry, Transfer};

/// One dated point of a serial number's timeline
struct TimelinePoint<'a> {
    employee: &'a str,
    date_text: &'a str,
    date: NaiveDate,
}

impl LedgerStore {
    /// Serial numbers known to either the inventory or the history, inventory
    /// order first
    fn known_serials(&self) -> Vec<&str> {
        let mut serials: Vec<&str> = self
            .inventory()
            .iter()
            .map(|r| r.serial_number.as_str())
            .collect();
        for serial in self.history().keys() {
            if !serials.contains(&serial.as_str()) {
                serials.push(serial);
            }
        }
        serials
    }

    /// History entries plus the live assignment, de-duplicated by
    /// `(employee, calendar day)` and sorted by date. Undated or malformed
    /// points are left out.
    fn timeline(&self, serial: &str) -> Vec<TimelinePoint<'_>> {
        let live = self.equipment(serial).and_then(|record| {
            let employee = record.assignee()?;
            let date_text = record.date.as_deref()?;
            Some((employee, date_text))
        });

        let candidates = self
            .history_for(serial)
            .iter()
            .map(|entry: &HistoryEntry| (entry.assignment.as_str(), entry.date.as_str()))
            .chain(live);

        let mut points: Vec<TimelinePoint<'_>> = Vec::new();
        for (employee, date_text) in candidates {
            let employee = employee.trim();
            let Some(date) = parse_date(date_text) else {
                continue;
            };
            if employee.is_empty()
                || points
                    .iter()
                    .any(|p| p.employee == employee && p.date == date)
            {
                continue;
            }
            points.push(TimelinePoint {
                employee,
                date_text: date_text.trim(),
                date,
            });
        }

        // Stable: same-day points keep insertion order
        points.sort_by_key(|p| p.date);
        points
    }

    /// Every change of assignment dated within `[start, end]`, oldest first
    pub fn transfers_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Transfer> {
        let mut transfers: Vec<(NaiveDate, Transfer)> = Vec::new();
        if start > end {
            return Vec::new();
        }

        for serial in self.known_serials() {
            let equipment_type = self
                .equipment(serial)
                .map(|r| r.equipment_type.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or(MISSING_VALUE);

            let timeline = self.timeline(serial);
            for pair in timeline.windows(2) {
                let (previous, current) = (&pair[0], &pair[1]);
                if previous.employee == current.employee {
                    continue;
                }
                if current.date < start || current.date > end {
                    continue;
                }
                transfers.push((
                    current.date,
                    Transfer {
                        serial_number: serial.to_string(),
                        equipment_type: equipment_type.to_string(),
                        from_employee: previous.employee.to_string(),
                        to_employee: current.employee.to_string(),
                        date: current.date_text.to_string(),
                    },
                ));
            }
        }

        transfers.sort_by_key(|(date, _)| *date);
        transfers.into_iter().map(|(_, transfer)| transfer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::store::tests::{date, record, store};
    use crate::models::HistoryLedger;

    #[test]
    fn test_transfer_detected_in_window() {
        let mut store = store();
        store
            .add_equipment(record("Монитор", "SN1", "Ivanov", "01.01.2024"))
            .unwrap();
        store.transfer("SN1", "Petrov", date("15.06.2024")).unwrap();

        let transfers = store.transfers_in_range(date("01.01.2024"), date("31.12.2024"));
        assert_eq!(
            transfers,
            vec![Transfer {
                serial_number: "SN1".to_string(),
                equipment_type: "Монитор".to_string(),
                from_employee: "Ivanov".to_string(),
                to_employee: "Petrov".to_string(),
                date: "15.06.2024".to_string(),
            }]
        );
    }

    #[test]
    fn test_window_before_first_assignment_is_empty() {
        let mut store = store();
        store
            .add_equipment(record("Монитор", "SN1", "Ivanov", "01.01.2024"))
            .unwrap();
        store.transfer("SN1", "Petrov", date("15.06.2024")).unwrap();

        assert!(store
            .transfers_in_range(date("01.01.2023"), date("31.12.2023"))
            .is_empty());
        assert!(store
            .transfers_in_range(date("31.12.2024"), date("01.01.2024"))
            .is_empty());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let mut store = store();
        store
            .add_equipment(record("Монитор", "SN1", "Ivanov", "01.01.2024"))
            .unwrap();
        store.transfer("SN1", "Petrov", date("15.06.2024")).unwrap();

        let day = date("15.06.2024");
        assert_eq!(store.transfers_in_range(day, day).len(), 1);
        assert!(store
            .transfers_in_range(date("16.06.2024"), date("31.12.2024"))
            .is_empty());
    }

    #[test]
    fn test_live_record_is_folded_into_timeline() {
        // Legacy data: live record never made it into the history file
        let mut history = HistoryLedger::new();
        history.insert(
            "SN1".to_string(),
            vec![HistoryEntry::new("Petrov", "15.06.2024")],
        );
        let store = LedgerStore::from_parts(
            vec![record("Монитор", "SN1", "Ivanov", "01.01.2024")],
            history,
            Vec::new(),
            vec!["Монитор".to_string()],
        );

        let transfers = store.transfers_in_range(date("01.01.2024"), date("31.12.2024"));
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from_employee, "Ivanov");
        assert_eq!(transfers[0].to_employee, "Petrov");
    }

    #[test]
    fn test_malformed_dates_are_excluded() {
        let mut history = HistoryLedger::new();
        history.insert(
            "SN1".to_string(),
            vec![
                HistoryEntry::new("Ivanov", "01.01.2024"),
                HistoryEntry::new("Sidorov", "someday"),
                HistoryEntry::new("Petrov", "15.06.2024"),
            ],
        );
        let store = LedgerStore::from_parts(
            vec![record("Монитор", "SN1", "Petrov", "not a date")],
            history,
            Vec::new(),
            vec!["Монитор".to_string()],
        );

        let transfers = store.transfers_in_range(date("01.01.2000"), date("31.12.2099"));
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from_employee, "Ivanov");
        assert_eq!(transfers[0].to_employee, "Petrov");
    }

    #[test]
    fn test_padded_live_date_matches_history_entry() {
        let mut history = HistoryLedger::new();
        history.insert(
            "SN1".to_string(),
            vec![
                HistoryEntry::new("Ivanov", "01.01.2024"),
                HistoryEntry::new("Petrov", "01.01.2024"),
            ],
        );
        // Legacy files may carry padded dates, which the record keeps verbatim
        let mut live = record("Монитор", "SN1", "Ivanov", "");
        live.date = Some(" 01.01.2024".to_string());
        let store = LedgerStore::from_parts(
            vec![live],
            history,
            Vec::new(),
            vec!["Монитор".to_string()],
        );

        let transfers = store.transfers_in_range(date("01.01.2024"), date("31.12.2024"));
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from_employee, "Ivanov");
        assert_eq!(transfers[0].to_employee, "Petrov");
        assert_eq!(transfers[0].date, "01.01.2024");
    }

    #[test]
    fn test_orphaned_history_uses_placeholder_type() {
        let mut store = store();
        store
            .add_equipment(record("Мышь", "M1", "Ivanov", "01.01.2024"))
            .unwrap();
        store.transfer("M1", "Petrov", date("01.03.2024")).unwrap();
        store.delete_equipment("M1").unwrap();

        let transfers = store.transfers_in_range(date("01.01.2024"), date("31.12.2024"));
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].equipment_type, "-");
    }

    #[test]
    fn test_transfers_sorted_by_date_and_stable() {
        let mut store = store();
        store
            .add_equipment(record("Монитор", "A", "Ivanov", "01.01.2024"))
            .unwrap();
        store
            .add_equipment(record("Мышь", "B", "Petrov", "01.01.2024"))
            .unwrap();
        store.transfer("A", "Petrov", date("10.05.2024")).unwrap();
        store.transfer("B", "Ivanov", date("02.02.2024")).unwrap();
        store.transfer("A", "Ivanov", date("01.09.2024")).unwrap();

        let first = store.transfers_in_range(date("01.01.2024"), date("31.12.2024"));
        let dates: Vec<&str> = first.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["02.02.2024", "10.05.2024", "01.09.2024"]);
        assert_eq!(
            first,
            store.transfers_in_range(date("01.01.2024"), date("31.12.2024"))
        );
    }

    #[test]
    fn test_wider_window_only_adds_transfers() {
        let mut store = store();
        store
            .add_equipment(record("Монитор", "A", "Ivanov", "01.01.2024"))
            .unwrap();
        store.transfer("A", "Petrov", date("10.03.2024")).unwrap();
        store.transfer("A", "Ivanov", date("10.07.2024")).unwrap();
        store.transfer("A", "Petrov", date("10.11.2024")).unwrap();

        let narrow = store.transfers_in_range(date("01.06.2024"), date("31.08.2024"));
        let wide = store.transfers_in_range(date("01.01.2024"), date("31.12.2024"));
        assert_eq!(narrow.len(), 1);
        assert_eq!(wide.len(), 3);
        assert!(narrow.iter().all(|t| wide.contains(t)));
    }

    #[test]
    fn test_repeated_holder_is_not_a_transfer() {
        let mut history = HistoryLedger::new();
        history.insert(
            "SN1".to_string(),
            vec![
                HistoryEntry::new("Ivanov", "01.01.2024"),
                HistoryEntry::new("Ivanov", "01.02.2024"),
            ],
        );
        let store = LedgerStore::from_parts(Vec::new(), history, Vec::new(), Vec::new());
        assert!(store
            .transfers_in_range(date("01.01.2024"), date("31.12.2024"))
            .is_empty());
    }
}
