/// ANSI color helper utilities for terminal output.
use crate::core::stat_cards::Trend;
use crate::models::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Working → green, on break → yellow, done → grey.
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::ClockedIn => GREEN,
        AttendanceStatus::OnBreak => YELLOW,
        AttendanceStatus::Complete => GREY,
    }
}

pub fn color_for_trend(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => GREEN,
        Trend::Down => RED,
        Trend::Neutral => GREY,
    }
}
