//! The seam between the refresh logic and wherever the data comes from.

use super::client::ApiClient;
use crate::errors::ApiResult;
use crate::models::{AttendanceCount, AttendanceRecord, MonthlySummary, Stats, Task, WeeklySummary};
use async_trait::async_trait;

/// The six resources polled on every refresh.
#[async_trait]
pub trait AttendanceSource: Send + Sync {
    async fn today_attendance(&self) -> ApiResult<Vec<AttendanceRecord>>;
    async fn attendance_count(&self) -> ApiResult<AttendanceCount>;
    async fn weekly_summary(&self) -> ApiResult<Vec<WeeklySummary>>;
    async fn monthly_summary(&self) -> ApiResult<Vec<MonthlySummary>>;
    async fn today_tasks(&self) -> ApiResult<Vec<Task>>;
    async fn stats(&self) -> ApiResult<Stats>;
}

#[async_trait]
impl AttendanceSource for ApiClient {
    async fn today_attendance(&self) -> ApiResult<Vec<AttendanceRecord>> {
        self.fetch_today_attendance().await
    }

    async fn attendance_count(&self) -> ApiResult<AttendanceCount> {
        self.fetch_attendance_count().await
    }

    async fn weekly_summary(&self) -> ApiResult<Vec<WeeklySummary>> {
        self.fetch_weekly_summary().await
    }

    async fn monthly_summary(&self) -> ApiResult<Vec<MonthlySummary>> {
        self.fetch_monthly_summary().await
    }

    async fn today_tasks(&self) -> ApiResult<Vec<Task>> {
        self.fetch_today_tasks().await
    }

    async fn stats(&self) -> ApiResult<Stats> {
        self.fetch_stats().await
    }
}
