//! `DD.MM.YYYY` date handling

use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a `DD.MM.YYYY` date. Anything else yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local creation timestamp stamped on new equipment records
pub fn now_timestamp() -> String {
    Local::now().format(DATETIME_FORMAT).to_string()
}
