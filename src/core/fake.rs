//! In-memory `AttendanceSource` for unit tests.

use crate::api::AttendanceSource;
use crate::errors::{ApiError, ApiResult};
use crate::models::*;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{self, Instant};

pub struct FakeSource {
    /// Instants at which any endpoint was hit; one per refresh under paused time.
    hits: Mutex<BTreeSet<Instant>>,
    failure: Mutex<Option<ApiError>>,
    /// Latency of every request.
    delay: Option<Duration>,
    pub attendance: Vec<AttendanceRecord>,
    pub count: AttendanceCount,
    pub tasks: Vec<Task>,
    pub weekly: Vec<WeeklySummary>,
}

impl FakeSource {
    pub fn with_sample() -> Self {
        let attendance = vec![
            AttendanceRecord {
                name: "Ana Cruz".into(),
                time_in: Some("08:02 AM".into()),
                hours_worked: Some(3.25),
                status: AttendanceStatus::ClockedIn,
                late: Some(true),
                ..Default::default()
            },
            AttendanceRecord {
                name: "Ben Ramos".into(),
                time_in: Some("09:00 AM".into()),
                break_start: Some("12:00 PM".into()),
                status: AttendanceStatus::OnBreak,
                ..Default::default()
            },
            AttendanceRecord {
                name: "Cara Lim".into(),
                time_in: Some("07:58 AM".into()),
                time_out: Some("03:00 PM".into()),
                hours_worked: Some(6.5),
                status: AttendanceStatus::Complete,
                undertime: Some(true),
                ..Default::default()
            },
        ];
        let count = AttendanceCount {
            date: "2026-10-19".into(),
            total_staff: 4,
            present_count: 3,
            absent_count: 1,
            present: Vec::new(),
            absent: vec![AbsentStaff {
                name: "Dan Uy".into(),
                role: Some("Designer".into()),
                consecutive_absences: Some(2),
            }],
        };

        Self {
            hits: Mutex::new(BTreeSet::new()),
            failure: Mutex::new(None),
            delay: None,
            attendance,
            count,
            tasks: vec![Task {
                name: "Ana Cruz".into(),
                task: "Payroll review".into(),
                url: None,
                created_at: "2026-10-19T09:15:00+08:00".into(),
            }],
            weekly: vec![WeeklySummary {
                week: "2026-W42".into(),
                week_start: "2026-10-12".into(),
                week_end: "2026-10-18".into(),
                unique_staff: 4,
                days_worked: 18,
                total_hours: 140.0,
                avg_hours_per_day: 7.78,
            }],
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_with_unreachable(&self) {
        *self.failure.lock().unwrap() = Some(ApiError::Unreachable("http://fake".into()));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of refreshes attempted. Only meaningful with paused time, where
    /// every request of one refresh sees the same instant.
    pub fn calls(&self) -> usize {
        self.hits.lock().unwrap().len()
    }

    async fn check(&self) -> ApiResult<()> {
        if let Some(d) = self.delay {
            time::sleep(d).await;
        }
        self.hits.lock().unwrap().insert(Instant::now());
        match self.failure.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AttendanceSource for FakeSource {
    async fn today_attendance(&self) -> ApiResult<Vec<AttendanceRecord>> {
        self.check().await?;
        Ok(self.attendance.clone())
    }

    async fn attendance_count(&self) -> ApiResult<AttendanceCount> {
        self.check().await?;
        Ok(self.count.clone())
    }

    async fn weekly_summary(&self) -> ApiResult<Vec<WeeklySummary>> {
        self.check().await?;
        Ok(self.weekly.clone())
    }

    async fn monthly_summary(&self) -> ApiResult<Vec<MonthlySummary>> {
        self.check().await?;
        Ok(Vec::new())
    }

    async fn today_tasks(&self) -> ApiResult<Vec<Task>> {
        self.check().await?;
        Ok(self.tasks.clone())
    }

    async fn stats(&self) -> ApiResult<Stats> {
        self.check().await?;
        Ok(Stats {
            currently_working: 1,
            on_break: 1,
            week_hours: 38.5,
            ..Default::default()
        })
    }
}
