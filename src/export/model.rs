// src/export/model.rs

use crate::core::snapshot::Snapshot;
use crate::models::{AbsentStaff, AttendanceRecord, Task, WeeklySummary};
use crate::utils::formatting::{fixed1, format_hours, or_dash, yes_no};
use crate::utils::time::{format_task_time, report_date};
use chrono::TimeZone;
use std::fmt::Display;

/// A single spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Value as it reads on screen; used for column sizing.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// A named grid: `rows[0]` is the header row.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    fn new(name: &'static str, headers: &[&str]) -> Self {
        Self {
            name,
            rows: vec![headers.iter().map(|h| Cell::text(*h)).collect()],
        }
    }

    pub fn header(&self) -> &[Cell] {
        &self.rows[0]
    }

    pub fn data_rows(&self) -> &[Vec<Cell>] {
        &self.rows[1..]
    }
}

pub const ATTENDANCE_SHEET: &str = "Attendance";
pub const ABSENT_SHEET: &str = "Absent Today";
pub const TASK_SHEET: &str = "Task Report";
pub const WEEKLY_SHEET: &str = "Weekly Summary";

/// Absent staff without a streak counter are exported as a first-day absence.
const DEFAULT_ABSENT_DAYS: u32 = 1;

pub fn attendance_sheet(records: &[AttendanceRecord]) -> Sheet {
    let mut sheet = Sheet::new(
        ATTENDANCE_SHEET,
        &[
            "Member",
            "Time In",
            "Time Out",
            "Break Start",
            "Break End",
            "Break Duration",
            "Total Hours",
            "Status",
            "Late",
            "Undertime",
        ],
    );

    for r in records {
        sheet.rows.push(vec![
            Cell::text(&r.name),
            Cell::text(or_dash(r.time_in.as_deref())),
            Cell::text(or_dash(r.time_out.as_deref())),
            Cell::text(or_dash(r.break_start.as_deref())),
            Cell::text(or_dash(r.break_end.as_deref())),
            Cell::text(format_hours(r.break_duration)),
            Cell::text(format_hours(r.hours_worked)),
            Cell::text(r.status.as_str().to_uppercase()),
            Cell::text(yes_no(r.is_late())),
            Cell::text(yes_no(r.is_undertime())),
        ]);
    }
    sheet
}

pub fn absent_sheet(absent: &[AbsentStaff]) -> Sheet {
    let mut sheet = Sheet::new(
        ABSENT_SHEET,
        &["Absent Staff", "Role", "Consecutive Absent Days"],
    );

    for s in absent {
        sheet.rows.push(vec![
            Cell::text(&s.name),
            Cell::text(or_dash(s.role.as_deref())),
            Cell::Number(s.consecutive_absences.unwrap_or(DEFAULT_ABSENT_DAYS) as f64),
        ]);
    }
    sheet
}

pub fn task_sheet<Tz>(tasks: &[Task], tz: &Tz) -> Sheet
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut sheet = Sheet::new(TASK_SHEET, &["Staff", "Task Detail", "Time", "Link"]);

    for t in tasks {
        sheet.rows.push(vec![
            Cell::text(&t.name),
            Cell::text(&t.task),
            Cell::text(format_task_time(&t.created_at, tz)),
            Cell::text(or_dash(t.url.as_deref())),
        ]);
    }
    sheet
}

pub fn weekly_sheet(weeks: &[WeeklySummary]) -> Sheet {
    let mut sheet = Sheet::new(
        WEEKLY_SHEET,
        &[
            "Week",
            "Period",
            "Staff",
            "Days Worked",
            "Total Hours",
            "Avg hrs/day",
        ],
    );

    for w in weeks {
        sheet.rows.push(vec![
            Cell::text(&w.week),
            Cell::text(format!("{} – {}", w.week_start, w.week_end)),
            Cell::Number(w.unique_staff as f64),
            Cell::Number(w.days_worked as f64),
            Cell::text(fixed1(w.total_hours)),
            Cell::text(fixed1(w.avg_hours_per_day)),
        ]);
    }
    sheet
}

/// The four report sheets, in workbook order.
pub fn build_report<Tz>(snapshot: &Snapshot, tz: &Tz) -> Vec<Sheet>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    vec![
        attendance_sheet(&snapshot.attendance),
        absent_sheet(&snapshot.count.absent),
        task_sheet(&snapshot.tasks, tz),
        weekly_sheet(&snapshot.weekly),
    ]
}

/// `Attendance_Report_<YYYY-MM-DD>.<ext>`, dated by the snapshot.
pub fn report_file_name(snapshot: &Snapshot, ext: &str) -> String {
    format!(
        "Attendance_Report_{}.{}",
        report_date(&snapshot.fetched_at),
        ext
    )
}
