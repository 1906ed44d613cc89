//! Roster search and status filtering.

use crate::models::{AttendanceRecord, AttendanceStatus};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    ClockedIn,
    OnBreak,
    Complete,
}

impl StatusFilter {
    pub fn accepts(&self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ClockedIn => status == AttendanceStatus::ClockedIn,
            StatusFilter::OnBreak => status == AttendanceStatus::OnBreak,
            StatusFilter::Complete => status == AttendanceStatus::Complete,
        }
    }
}

/// Current search text and status filter of the roster view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl RosterFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Name contains the search text (case-insensitive) and the status passes.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle) && self.status.accepts(record.status)
    }

    /// Visible records, source order preserved.
    pub fn apply<'a>(&self, records: &'a [AttendanceRecord]) -> Vec<&'a AttendanceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
