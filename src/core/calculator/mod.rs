pub mod progress;
pub mod rate;

pub use progress::{TARGET_HOURS, progress_percent};
pub use rate::attendance_rate;
