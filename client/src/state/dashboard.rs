//! Dashboard page state: the selected date and the last loaded aggregates.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::{Datelike, NaiveDate};

use crate::net::types::DashboardData;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// Filter date, `YYYY-MM-DD`.
    pub date: String,
    pub data: Option<DashboardData>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl DashboardState {
    pub fn new(date: String) -> Self {
        Self { date, ..Self::default() }
    }

    /// State for today's date in the browser's local time zone.
    pub fn for_today() -> Self {
        Self::new(today())
    }

    /// Issue a fetch and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Change the filter date. Returns a fetch sequence when the date changed.
    pub fn set_date(&mut self, date: String) -> Option<u64> {
        if date == self.date {
            return None;
        }
        self.date = date;
        Some(self.begin_fetch())
    }

    /// Returns `false` when `seq` is stale.
    pub fn apply_success(&mut self, seq: u64, data: DashboardData) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.data = Some(data);
        true
    }

    /// Returns `false` when `seq` is stale.
    pub fn apply_failure(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }
}

/// Today as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `2023-11-01` -> `1 November 2023`. Unparseable input is returned as-is.
pub fn display_date(raw: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
        return raw.to_owned();
    };
    let month = MONTHS_ID[date.month0() as usize];
    format!("{} {month} {}", date.day(), date.year())
}
