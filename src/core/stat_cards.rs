//! Headline figures shown above the roster.

use super::calculator::attendance_rate;
use crate::models::{AttendanceCount, Stats};

/// Attendance rate at or above which the "present" card trends up.
pub const HEALTHY_RATE: u32 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "─",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub sub: Option<String>,
    pub trend: Trend,
    pub trend_label: String,
}

pub fn build_stat_cards(count: &AttendanceCount, stats: &Stats, task_count: usize) -> Vec<StatCard> {
    let rate = attendance_rate(count.present_count, count.total_staff);
    let of_staff = Some(format!("of {} staff", count.total_staff));
    let all_in = count.absent_count == 0;

    vec![
        StatCard {
            label: "Present Today",
            value: count.present_count.to_string(),
            sub: of_staff.clone(),
            trend: if rate >= HEALTHY_RATE { Trend::Up } else { Trend::Down },
            trend_label: format!("{rate}% rate"),
        },
        StatCard {
            label: "Absent Today",
            value: count.absent_count.to_string(),
            sub: of_staff,
            trend: if all_in { Trend::Up } else { Trend::Down },
            trend_label: if all_in { "All in!" } else { "Check in" }.to_string(),
        },
        StatCard {
            label: "Working Now",
            value: stats.currently_working.to_string(),
            sub: None,
            trend: Trend::Up,
            trend_label: "Active".to_string(),
        },
        StatCard {
            label: "On Break",
            value: stats.on_break.to_string(),
            sub: None,
            trend: Trend::Neutral,
            trend_label: "Resting".to_string(),
        },
        StatCard {
            label: "Weekly Hours",
            value: format!("{}h", stats.week_hours),
            sub: None,
            trend: Trend::Up,
            trend_label: "This week".to_string(),
        },
        StatCard {
            label: "Today's Tasks",
            value: task_count.to_string(),
            sub: None,
            trend: if task_count > 0 { Trend::Up } else { Trend::Neutral },
            trend_label: format!("{task_count} logged"),
        },
    ]
}
