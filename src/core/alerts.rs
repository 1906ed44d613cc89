//! Management alerts: absence streaks, late arrivals, undertime.

use crate::models::{AbsentStaff, AttendanceRecord};

/// Consecutive absences at which an absent staff member is flagged.
pub const STREAK_THRESHOLD: u32 = 2;

/// Three independent alert lists. A staff member can show up in more than
/// one of them; each list is a separate tag on the banner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alerts<'a> {
    pub streaks: Vec<&'a AbsentStaff>,
    pub late: Vec<&'a AttendanceRecord>,
    pub undertime: Vec<&'a AttendanceRecord>,
}

impl<'a> Alerts<'a> {
    pub fn collect(records: &'a [AttendanceRecord], absent: &'a [AbsentStaff]) -> Self {
        Self {
            streaks: absence_streaks(absent),
            late: records.iter().filter(|r| r.is_late()).collect(),
            // Undertime only counts once the day is closed.
            undertime: records
                .iter()
                .filter(|r| r.is_undertime() && r.status.is_complete())
                .collect(),
        }
    }

    pub fn has_alerts(&self) -> bool {
        !self.streaks.is_empty() || !self.late.is_empty() || !self.undertime.is_empty()
    }
}

/// Absent staff whose streak reached [`STREAK_THRESHOLD`], in source order.
/// A missing counter is not a streak.
pub fn absence_streaks(absent: &[AbsentStaff]) -> Vec<&AbsentStaff> {
    absent
        .iter()
        .filter(|s| is_streak(s))
        .collect()
}

pub fn is_streak(staff: &AbsentStaff) -> bool {
    staff.consecutive_absences.unwrap_or(0) >= STREAK_THRESHOLD
}
