//! HTTP access to the attendance API.
//!
//! One method per endpoint. List endpoints wrap their payload in a
//! `{ "data": [...] }` envelope; count and stats are returned flat.

use super::endpoints;
use crate::errors::{ApiError, ApiResult, AppError, AppResult};
use crate::models::{
    AttendanceCount, AttendanceRecord, DailySummary, MonthlySummary, StaffWeekSummary, Stats,
    Task, WeeklySummary,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::Api(ApiError::InvalidUrl(base_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, &url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url,
            reason: e.to_string(),
        })
    }

    /// GET `path` and unwrap its `{ data: T }` envelope.
    async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let envelope: Envelope<T> = self.get_json(path).await?;
        Ok(envelope.data)
    }

    fn transport_error(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                reason: err.to_string(),
            }
        } else {
            ApiError::Unreachable(self.base_url.clone())
        }
    }

    pub async fn fetch_today_attendance(&self) -> ApiResult<Vec<AttendanceRecord>> {
        self.get_enveloped(endpoints::ATTENDANCE_TODAY).await
    }

    pub async fn fetch_attendance_count(&self) -> ApiResult<AttendanceCount> {
        self.get_json(endpoints::ATTENDANCE_COUNT).await
    }

    pub async fn fetch_daily_summary(&self) -> ApiResult<Vec<DailySummary>> {
        self.get_enveloped(endpoints::SUMMARY_DAILY).await
    }

    pub async fn fetch_weekly_summary(&self) -> ApiResult<Vec<WeeklySummary>> {
        self.get_enveloped(endpoints::SUMMARY_WEEKLY).await
    }

    pub async fn fetch_monthly_summary(&self) -> ApiResult<Vec<MonthlySummary>> {
        self.get_enveloped(endpoints::SUMMARY_MONTHLY).await
    }

    pub async fn fetch_staff_week(&self) -> ApiResult<Vec<StaffWeekSummary>> {
        self.get_enveloped(endpoints::STAFF_WEEK).await
    }

    pub async fn fetch_today_tasks(&self) -> ApiResult<Vec<Task>> {
        self.get_enveloped(endpoints::TASKS_TODAY).await
    }

    pub async fn fetch_stats(&self) -> ApiResult<Stats> {
        self.get_json(endpoints::STATS).await
    }
}

/// Maps a non-2xx status to the error shown to the user.
fn status_error(status: StatusCode, url: &str) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound {
            url: url.to_string(),
        },
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::Server,
        other => ApiError::Status {
            code: other.as_u16(),
            url: url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let c = ApiClient::new(" http://localhost:8000/ ", Duration::from_secs(1)).unwrap();
        assert_eq!(c.base_url(), "http://localhost:8000");
        assert_eq!(
            c.url(endpoints::STATS),
            "http://localhost:8000/api/stats"
        );
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let err = ApiClient::new("localhost:8000", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn status_codes_map_to_specific_errors() {
        let url = "http://x/api/stats";
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, url),
            ApiError::NotFound { url: url.into() }
        );
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, url),
            ApiError::Server
        );
        assert_eq!(
            status_error(StatusCode::BAD_GATEWAY, url),
            ApiError::Status {
                code: 502,
                url: url.into()
            }
        );
    }

    #[test]
    fn envelope_unwraps_data() {
        let body = r#"{"data":[{"name":"Ana","status":"on_break","hours_worked":3.5}]}"#;
        let env: Envelope<Vec<AttendanceRecord>> = serde_json::from_str(body).unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].name, "Ana");
        assert_eq!(env.data[0].hours_worked, Some(3.5));
    }
}
