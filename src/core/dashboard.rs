//! Dashboard controller: owns the application state and applies refreshes.

use crate::api::AttendanceSource;
use crate::core::filter::RosterFilter;
use crate::core::logic::{Core, DashboardView};
use crate::core::snapshot::Snapshot;
use crate::errors::ApiResult;
use chrono::{DateTime, Local};
use tracing::{info, warn};

/// Single owner of everything the dashboard displays.
///
/// Fields are only ever replaced whole; a snapshot is never patched.
#[derive(Clone, Debug)]
pub struct AppState {
    pub snapshot: Option<Snapshot>,
    /// Notice from the last failed refresh, cleared by the next good one.
    pub error: Option<String>,
    pub loading: bool,
    pub live_time: DateTime<Local>,
    pub filter: RosterFilter,
}

pub struct Dashboard {
    state: AppState,
    target_hours: f64,
}

impl Dashboard {
    pub fn new(filter: RosterFilter, target_hours: f64) -> Self {
        Self {
            state: AppState {
                snapshot: None,
                error: None,
                loading: false,
                live_time: Local::now(),
                filter,
            },
            target_hours,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Fetches a new snapshot and swaps it in.
    ///
    /// On failure the previous snapshot stays in place and `error` carries the
    /// message for the user; the error is also returned for callers that stop
    /// on it.
    pub async fn refresh<S>(&mut self, source: &S) -> ApiResult<()>
    where
        S: AttendanceSource + ?Sized,
    {
        self.begin_refresh();
        let result = Snapshot::fetch(source).await;
        self.apply_refresh(result)
    }

    /// Marks a fetch as in flight.
    pub fn begin_refresh(&mut self) {
        self.state.loading = true;
    }

    /// Clears the in-flight mark without touching the data, e.g. when a fetch
    /// is dropped on shutdown.
    pub fn cancel_refresh(&mut self) {
        self.state.loading = false;
    }

    /// Applies the outcome of a fetch started with [`Dashboard::begin_refresh`].
    pub fn apply_refresh(&mut self, result: ApiResult<Snapshot>) -> ApiResult<()> {
        self.state.loading = false;

        match result {
            Ok(snapshot) => {
                info!(records = snapshot.attendance.len(), "refresh applied");
                self.state.snapshot = Some(snapshot);
                self.state.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "refresh failed, keeping previous snapshot");
                self.state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn tick_clock(&mut self, now: DateTime<Local>) {
        self.state.live_time = now;
    }

    pub fn set_filter(&mut self, filter: RosterFilter) {
        self.state.filter = filter;
    }

    /// Derived values for the current snapshot, if there is one yet.
    pub fn view(&self) -> Option<DashboardView<'_>> {
        self.state
            .snapshot
            .as_ref()
            .map(|s| Core::build_view(s, &self.state.filter, self.target_hours))
    }
}
