//! The full set of entities from the last successful poll.

use crate::api::AttendanceSource;
use crate::errors::ApiResult;
use crate::models::{AttendanceCount, AttendanceRecord, MonthlySummary, Stats, Task, WeeklySummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub fetched_at: DateTime<Utc>,
    pub attendance: Vec<AttendanceRecord>,
    pub count: AttendanceCount,
    pub weekly: Vec<WeeklySummary>,
    pub monthly: Vec<MonthlySummary>,
    pub tasks: Vec<Task>,
    pub stats: Stats,
}

impl Snapshot {
    /// Fetches the six resources concurrently. The first failure fails the
    /// whole fetch and nothing from the other requests is kept.
    pub async fn fetch<S>(source: &S) -> ApiResult<Self>
    where
        S: AttendanceSource + ?Sized,
    {
        let (attendance, stats, tasks, count, weekly, monthly) = tokio::try_join!(
            source.today_attendance(),
            source.stats(),
            source.today_tasks(),
            source.attendance_count(),
            source.weekly_summary(),
            source.monthly_summary(),
        )?;

        debug!(
            records = attendance.len(),
            tasks = tasks.len(),
            absent = count.absent.len(),
            "snapshot fetched"
        );

        Ok(Self {
            fetched_at: Utc::now(),
            attendance,
            count,
            weekly,
            monthly,
            tasks,
            stats,
        })
    }
}
