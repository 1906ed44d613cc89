//! Unified application error type.
//! All modules (api, core, export, cli) return AppError so that the error
//! handling stays consistent; fetch failures keep their own ApiError so the
//! dashboard can turn them into a user-facing notice.

use std::io;
use thiserror::Error;

/// Failures of a single request against the attendance API.
///
/// The `Display` text of each variant is what the dashboard shows to the user,
/// so keep it short and actionable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    // ---------------------------
    // Transport
    // ---------------------------
    #[error("Request timed out. Check the API server.")]
    Timeout,

    #[error("Cannot reach API server at {0}. Retrying...")]
    Unreachable(String),

    // ---------------------------
    // Non-2xx responses
    // ---------------------------
    #[error("404: endpoint not found ({url})")]
    NotFound { url: String },

    #[error("500: internal server error")]
    Server,

    #[error("HTTP {code} from {url}")]
    Status { code: u16, url: String },

    // ---------------------------
    // Payload
    // ---------------------------
    #[error("Unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote data source
    // ---------------------------
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
