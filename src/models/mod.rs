//! Value records received from the attendance API.
//!
//! Entities join on staff `name` only; the API exposes no stable staff id, so
//! two staff members sharing a name are indistinguishable here.

pub mod attendance;
pub mod count;
pub mod stats;
pub mod status;
pub mod summary;
pub mod task;

pub use attendance::AttendanceRecord;
pub use count::{AbsentStaff, AttendanceCount, PresentStaff};
pub use stats::Stats;
pub use status::AttendanceStatus;
pub use summary::{DailySummary, MonthlySummary, StaffWeekSummary, WeeklySummary};
pub use task::Task;
