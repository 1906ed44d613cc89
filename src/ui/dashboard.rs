//! Terminal rendering of the dashboard. Every function returns the text so
//! that callers decide where it goes.

use crate::core::alerts::Alerts;
use crate::core::calculator::progress_percent;
use crate::core::dashboard::Dashboard;
use crate::core::logic::DashboardView;
use crate::core::stat_cards::StatCard;
use crate::models::{
    AttendanceCount, AttendanceRecord, DailySummary, MonthlySummary, StaffWeekSummary, Task,
    WeeklySummary,
};
use crate::ui::messages::{header, refresh_notice};
use crate::utils::colors::{
    GREY, MAGENTA, RED, YELLOW, color_for_status, color_for_trend, paint,
};
use crate::utils::formatting::{bold, dim, fixed1, format_hours, or_dash};
use crate::utils::table::Table;
use crate::utils::time::{format_clock, format_long_date, format_task_time};
use chrono::{Local, TimeZone};
use std::fmt::Display;

const BAR_WIDTH: usize = 10;
const TASK_WRAP: usize = 72;

/// Full frame: header, notices, cards, alerts, roster, tasks, summaries.
pub fn render_dashboard(dash: &Dashboard) -> String {
    let state = dash.state();
    let mut out = String::new();

    out.push_str(&render_header(dash));
    out.push('\n');

    if let Some(err) = &state.error {
        out.push_str(&refresh_notice(err));
        out.push('\n');
    }

    let Some(view) = dash.view() else {
        out.push_str(&dim(if state.loading {
            "Loading attendance data..."
        } else {
            "No data yet."
        }));
        out.push('\n');
        return out;
    };

    out.push('\n');
    out.push_str(&render_cards(&view.cards));
    out.push('\n');

    if view.alerts.has_alerts() {
        out.push_str(&render_alerts(&view.alerts));
        out.push('\n');
    }

    out.push_str(&render_roster_split(&view.snapshot.count, view.attendance_rate));
    out.push('\n');
    out.push_str(&render_roster(&view, &state.filter.search));
    out.push('\n');
    out.push_str(&render_tasks(&view.snapshot.tasks, &Local));
    out.push('\n');
    out.push_str(&render_weekly(&view.snapshot.weekly));
    out.push('\n');
    out.push_str(&render_monthly(&view.snapshot.monthly));

    out
}

fn render_header(dash: &Dashboard) -> String {
    let state = dash.state();
    let mut line = format!(
        "{}  {}  {}",
        bold("Attendance Dashboard"),
        format_long_date(&state.live_time),
        bold(&format_clock(&state.live_time)),
    );
    if let Some(s) = &state.snapshot {
        let updated = s.fetched_at.with_timezone(&Local);
        line.push_str(&dim(&format!("  (updated {})", format_clock(&updated))));
    }
    if state.loading {
        line.push_str(&dim("  refreshing..."));
    }
    line
}

pub fn render_cards(cards: &[StatCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let sub = card
            .sub
            .as_deref()
            .map(|s| format!(" {}", dim(s)))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:<14} {:>6}{}  {}\n",
            card.label,
            card.value,
            sub,
            paint(
                color_for_trend(card.trend),
                &format!("{} {}", card.trend.arrow(), card.trend_label)
            ),
        ));
    }
    out
}

pub fn render_alerts(alerts: &Alerts<'_>) -> String {
    let mut out = header("Alerts");
    out.push('\n');

    for s in &alerts.streaks {
        out.push_str(&paint(
            RED,
            &format!(
                "  {} — {}d absent streak\n",
                s.name,
                s.consecutive_absences.unwrap_or(0)
            ),
        ));
    }
    for r in &alerts.late {
        out.push_str(&paint(YELLOW, &format!("  {} — late\n", r.name)));
    }
    for r in &alerts.undertime {
        out.push_str(&paint(MAGENTA, &format!("  {} — undertime\n", r.name)));
    }
    out
}

fn render_roster_split(count: &AttendanceCount, rate: u32) -> String {
    let mut out = header(format!(
        "Attendance Count  {}/{} present ({rate}%)",
        count.present_count, count.total_staff
    ));
    out.push('\n');

    let present: Vec<String> = count
        .present
        .iter()
        .map(|p| format!("{} ({})", p.name, or_dash(p.role.as_deref())))
        .collect();
    let absent: Vec<String> = count
        .absent
        .iter()
        .map(|a| match a.consecutive_absences {
            Some(n) if n >= 2 => format!("{} ({}, {n}d streak)", a.name, or_dash(a.role.as_deref())),
            _ => format!("{} ({})", a.name, or_dash(a.role.as_deref())),
        })
        .collect();

    out.push_str(&format!(
        "  Present: {}\n",
        if present.is_empty() { dim("nobody yet") } else { present.join(", ") }
    ));
    out.push_str(&format!(
        "  Absent:  {}\n",
        if absent.is_empty() { dim("nobody") } else { absent.join(", ") }
    ));
    out
}

/// Text progress bar, e.g. `"█████░░░░░  50%"`.
pub fn progress_bar(hours: Option<f64>, target: f64) -> String {
    let pct = progress_percent(hours, target);
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        pct.round() as u32
    )
}

fn flags(r: &AttendanceRecord) -> String {
    let mut tags = Vec::new();
    if r.is_late() {
        tags.push("LATE");
    }
    if r.is_undertime() && r.status.is_complete() {
        tags.push("UNDERTIME");
    }
    tags.join(" ")
}

pub fn render_roster(view: &DashboardView<'_>, search: &str) -> String {
    let mut out = header(format!(
        "Today's Attendance  {} of {}",
        view.visible.len(),
        view.snapshot.attendance.len()
    ));
    out.push('\n');

    if view.visible.is_empty() {
        let msg = if search.is_empty() {
            "No attendance records for today.".to_string()
        } else {
            format!("No staff matching \"{search}\".")
        };
        out.push_str(&dim(&msg));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(&[
        "Member", "Status", "In", "Out", "Break", "Hours", "Progress", "Flags",
    ]);
    for r in &view.visible {
        table.add_row(vec![
            r.name.clone(),
            r.status.label().to_string(),
            or_dash(r.time_in.as_deref()),
            or_dash(r.time_out.as_deref()),
            format_hours(r.break_duration),
            format_hours(r.hours_worked),
            format!(
                "{} / {}h",
                progress_bar(r.hours_worked, view.target_hours),
                view.target_hours
            ),
            flags(r),
        ]);
    }

    // Status color applied per line; the table itself stays plain for alignment.
    let rendered = table.render();
    for (i, line) in rendered.lines().enumerate() {
        match i.checked_sub(2).and_then(|idx| view.visible.get(idx)) {
            Some(r) => out.push_str(&paint(color_for_status(r.status), line)),
            None => out.push_str(line),
        }
        out.push('\n');
    }
    out
}

pub fn render_tasks<Tz>(tasks: &[Task], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = header(format!("Today's Tasks  {} logged", tasks.len()));
    out.push('\n');

    if tasks.is_empty() {
        out.push_str(&dim("No tasks logged yet today. Check back later"));
        out.push('\n');
        return out;
    }

    for t in tasks {
        out.push_str(&format!(
            "  {}  {}\n",
            bold(&t.name),
            paint(GREY, &format_task_time(&t.created_at, tz))
        ));
        for line in textwrap::wrap(&t.task, TASK_WRAP) {
            out.push_str(&format!("    {line}\n"));
        }
        if let Some(url) = t.url.as_deref().filter(|u| !u.is_empty()) {
            out.push_str(&format!("    {}\n", dim(url)));
        }
    }
    out
}

pub fn render_weekly(rows: &[WeeklySummary]) -> String {
    let mut out = header("Weekly Summary");
    out.push('\n');
    if rows.is_empty() {
        out.push_str(&dim("No weekly summary data available."));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(&[
        "Week", "Period", "Staff", "Days Worked", "Total Hours", "Avg hrs/day",
    ]);
    for w in rows {
        table.add_row(vec![
            w.week.clone(),
            format!("{} – {}", w.week_start, w.week_end),
            w.unique_staff.to_string(),
            w.days_worked.to_string(),
            format_hours(Some(w.total_hours)),
            format_hours(Some(w.avg_hours_per_day)),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn render_monthly(rows: &[MonthlySummary]) -> String {
    let mut out = header("Monthly Summary");
    out.push('\n');
    if rows.is_empty() {
        out.push_str(&dim("No monthly summary data available."));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(&[
        "Month", "Staff", "Days Worked", "Total Hours", "Avg hrs/day", "Break Hours", "Absent",
        "Late",
    ]);
    for m in rows {
        table.add_row(vec![
            m.month_name.clone(),
            m.unique_staff.to_string(),
            m.days_worked.to_string(),
            format_hours(Some(m.total_hours)),
            format_hours(Some(m.avg_hours_per_day)),
            format_hours(Some(m.total_break_hours)),
            m.absent_days.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
            m.late_count.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn render_daily(rows: &[DailySummary]) -> String {
    let mut out = header("Daily Summary");
    out.push('\n');
    if rows.is_empty() {
        out.push_str(&dim("No daily summary data available."));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(&["Date", "Staff", "Total Hours", "Completed", "Still Working"]);
    for d in rows {
        table.add_row(vec![
            d.date.clone(),
            d.staff_count.to_string(),
            format_hours(Some(d.total_hours)),
            d.completed.to_string(),
            d.still_working.to_string(),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn render_staff_week(rows: &[StaffWeekSummary]) -> String {
    let mut out = header("This Week by Staff");
    out.push('\n');
    if rows.is_empty() {
        out.push_str(&dim("No hours logged this week."));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(&["Member", "Days Worked", "Total Hours", "Total (h)"]);
    for s in rows {
        table.add_row(vec![
            s.name.clone(),
            s.days_worked.to_string(),
            format_hours(Some(s.total_hours)),
            fixed1(s.total_hours),
        ]);
    }
    out.push_str(&table.render());
    out
}
