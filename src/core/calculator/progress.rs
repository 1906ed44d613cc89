/// Daily reference against which progress is measured.
pub const TARGET_HOURS: f64 = 8.0;

/// Share of `target` covered by `hours`, in percent, clamped to `[0, 100]`.
/// Absent hours count as zero.
pub fn progress_percent(hours: Option<f64>, target: f64) -> f64 {
    let h = hours.unwrap_or(0.0);
    if target <= 0.0 || h.is_nan() || h <= 0.0 {
        return 0.0;
    }
    (h / target * 100.0).min(100.0)
}
