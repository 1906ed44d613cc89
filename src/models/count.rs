use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentStaff {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsentStaff {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Consecutive days absent, as counted by the API. `1` means today is the
    /// first day of absence.
    #[serde(default)]
    pub consecutive_absences: Option<u32>,
}

/// Present/absent roster split for the day (`/api/attendance/count`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceCount {
    #[serde(default)]
    pub date: String,
    pub total_staff: u32,
    pub present_count: u32,
    pub absent_count: u32,
    #[serde(default)]
    pub present: Vec<PresentStaff>,
    #[serde(default)]
    pub absent: Vec<AbsentStaff>,
}
