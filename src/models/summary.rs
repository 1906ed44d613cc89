use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week: String,
    pub week_start: String,
    pub week_end: String,
    pub unique_staff: u32,
    pub days_worked: u32,
    pub total_hours: f64,
    pub avg_hours_per_day: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub month_name: String,
    pub unique_staff: u32,
    pub days_worked: u32,
    pub total_hours: f64,
    pub avg_hours_per_day: f64,
    pub total_break_hours: f64,
    #[serde(default)]
    pub absent_days: Option<u32>,
    #[serde(default)]
    pub late_count: Option<u32>,
}

/// Per-day rollup from `/api/attendance/summary/daily`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub staff_count: u32,
    pub total_hours: f64,
    pub completed: u32,
    pub still_working: u32,
}

/// Per-staff week-to-date totals from `/api/attendance/week`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffWeekSummary {
    pub name: String,
    pub total_hours: f64,
    pub days_worked: u32,
}
