use super::status::AttendanceStatus;
use serde::{Deserialize, Serialize};

/// One staff member's attendance for the current day, as sent by
/// `/api/attendance/today`. Times are display strings and are never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time_in: Option<String>,
    #[serde(default)]
    pub time_out: Option<String>,
    #[serde(default)]
    pub break_start: Option<String>,
    #[serde(default)]
    pub break_end: Option<String>,
    /// Hours spent on break.
    #[serde(default)]
    pub break_duration: Option<f64>,
    #[serde(default)]
    pub hours_worked: Option<f64>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub late: Option<bool>,
    #[serde(default)]
    pub undertime: Option<bool>,
}

impl AttendanceRecord {
    pub fn is_late(&self) -> bool {
        self.late.unwrap_or(false)
    }

    pub fn is_undertime(&self) -> bool {
        self.undertime.unwrap_or(false)
    }
}
