pub mod dashboard;
pub mod messages;
pub mod preview;
