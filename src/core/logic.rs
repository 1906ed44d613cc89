use crate::core::alerts::Alerts;
use crate::core::calculator::attendance_rate;
use crate::core::filter::RosterFilter;
use crate::core::snapshot::Snapshot;
use crate::core::stat_cards::{StatCard, build_stat_cards};
use crate::models::AttendanceRecord;

/// Everything derived from a snapshot for one render.
#[derive(Debug)]
pub struct DashboardView<'a> {
    pub snapshot: &'a Snapshot,
    pub attendance_rate: u32,
    pub alerts: Alerts<'a>,
    pub cards: Vec<StatCard>,
    pub visible: Vec<&'a AttendanceRecord>,
    pub target_hours: f64,
}

pub struct Core;

impl Core {
    pub fn build_view<'a>(
        snapshot: &'a Snapshot,
        filter: &RosterFilter,
        target_hours: f64,
    ) -> DashboardView<'a> {
        DashboardView {
            snapshot,
            attendance_rate: attendance_rate(
                snapshot.count.present_count,
                snapshot.count.total_staff,
            ),
            alerts: Alerts::collect(&snapshot.attendance, &snapshot.count.absent),
            cards: build_stat_cards(&snapshot.count, &snapshot.stats, snapshot.tasks.len()),
            visible: filter.apply(&snapshot.attendance),
            target_hours,
        }
    }
}
