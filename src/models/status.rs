use serde::{Deserialize, Serialize};

/// Attendance status reported by the API for a staff member's day.
///
/// Anything the API sends that is not one of the three known values
/// (including a missing or null field) is read as `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum AttendanceStatus {
    ClockedIn,
    OnBreak,
    #[default]
    Complete,
}

impl AttendanceStatus {
    pub fn from_api_str(s: &str) -> Self {
        match s {
            "clocked_in" => Self::ClockedIn,
            "on_break" => Self::OnBreak,
            _ => Self::Complete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::ClockedIn => "clocked_in",
            AttendanceStatus::OnBreak => "on_break",
            AttendanceStatus::Complete => "complete",
        }
    }

    /// Short label shown on roster cards.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::ClockedIn => "Working",
            AttendanceStatus::OnBreak => "On Break",
            AttendanceStatus::Complete => "Done",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, AttendanceStatus::Complete)
    }
}

impl From<Option<String>> for AttendanceStatus {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(Self::from_api_str)
            .unwrap_or_default()
    }
}
