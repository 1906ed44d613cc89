/// Attendance rate in whole percent; 0 when nobody is on the roster.
pub fn attendance_rate(present: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (present as f64 / total as f64 * 100.0).round() as u32
}
