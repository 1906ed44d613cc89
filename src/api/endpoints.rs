//! Paths of the attendance API, relative to the configured base URL.

pub const ATTENDANCE_TODAY: &str = "/api/attendance/today";
pub const ATTENDANCE_COUNT: &str = "/api/attendance/count";
pub const SUMMARY_DAILY: &str = "/api/attendance/summary/daily";
pub const SUMMARY_WEEKLY: &str = "/api/attendance/summary/weekly";
pub const SUMMARY_MONTHLY: &str = "/api/attendance/summary/monthly";
pub const STAFF_WEEK: &str = "/api/attendance/week";
pub const TASKS_TODAY: &str = "/api/tasks/today";
pub const STATS: &str = "/api/stats";
