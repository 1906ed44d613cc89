use serde::{Deserialize, Serialize};

/// Daily snapshot returned flat by `/api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_attendance: u32,
    pub total_tasks: u32,
    pub total_hours: f64,
    pub week_hours: f64,
    pub currently_working: u32,
    pub on_break: u32,
}
