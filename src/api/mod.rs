//! Data access layer for the attendance API.

pub mod client;
pub mod endpoints;
pub mod source;

pub use client::ApiClient;
pub use source::AttendanceSource;
