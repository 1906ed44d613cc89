//! Periodic refresh and clock timers for `watch` mode.

use crate::api::AttendanceSource;
use crate::core::dashboard::Dashboard;
use crate::core::snapshot::Snapshot;
use crate::errors::ApiResult;
use chrono::Local;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSettings {
    pub refresh_every: Duration,
    pub clock_every: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            refresh_every: Duration::from_secs(30),
            clock_every: Duration::from_secs(1),
        }
    }
}

type Fetch<'s> = Pin<Box<dyn Future<Output = ApiResult<Snapshot>> + 's>>;

/// Starts a refresh on every data tick and redraws on every tick until
/// `shutdown` resolves. The first data tick fires immediately.
///
/// A refresh runs as an in-flight future polled alongside the clock and the
/// shutdown signal, so the clock keeps ticking while a slow request is
/// pending. Data ticks that fall due meanwhile are deferred, never stacked.
/// Both timers and any pending fetch are dropped on every way out.
pub async fn run_watch<'s, S, R, F>(
    dashboard: &mut Dashboard,
    source: &'s S,
    settings: PollSettings,
    mut render: R,
    shutdown: F,
) where
    S: AttendanceSource + ?Sized,
    R: FnMut(&Dashboard),
    F: Future<Output = ()>,
{
    let mut data_timer = time::interval(settings.refresh_every);
    data_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut clock_timer = time::interval(settings.clock_every);
    clock_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut pending: Option<Fetch<'s>> = None;

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                debug!(in_flight = pending.is_some(), "watch loop stopping");
                break;
            }
            result = in_flight(&mut pending), if pending.is_some() => {
                pending = None;
                if let Err(e) = dashboard.apply_refresh(result) {
                    debug!(error = %e, "next attempt on the next tick");
                }
                render(dashboard);
            }
            _ = data_timer.tick(), if pending.is_none() => {
                dashboard.begin_refresh();
                render(dashboard);
                pending = Some(Box::pin(Snapshot::fetch(source)));
            }
            _ = clock_timer.tick() => {
                dashboard.tick_clock(Local::now());
                render(dashboard);
            }
        }
    }

    if pending.is_some() {
        dashboard.cancel_refresh();
    }
}

async fn in_flight(pending: &mut Option<Fetch<'_>>) -> ApiResult<Snapshot> {
    match pending {
        Some(fetch) => fetch.await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::TARGET_HOURS;
    use crate::core::fake::FakeSource;
    use crate::core::filter::RosterFilter;

    #[tokio::test(start_paused = true)]
    async fn refreshes_once_per_interval_until_shutdown() {
        let source = FakeSource::with_sample();
        let mut dash = Dashboard::new(RosterFilter::default(), TARGET_HOURS);
        let mut renders = 0usize;

        run_watch(
            &mut dash,
            &source,
            PollSettings::default(),
            |_| renders += 1,
            time::sleep(Duration::from_secs(65)),
        )
        .await;

        // t = 0, 30, 60
        assert_eq!(source.calls(), 3);
        assert!(renders > 3);
        assert!(dash.state().snapshot.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn failures_keep_polling_at_the_same_interval() {
        let source = FakeSource::with_sample();
        source.fail_with_unreachable();
        let mut dash = Dashboard::new(RosterFilter::default(), TARGET_HOURS);

        run_watch(
            &mut dash,
            &source,
            PollSettings::default(),
            |_| {},
            time::sleep(Duration::from_secs(95)),
        )
        .await;

        assert_eq!(source.calls(), 4);
        assert!(dash.state().snapshot.is_none());
        assert!(dash.state().error.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn clock_and_shutdown_stay_live_during_slow_refresh() {
        let source = FakeSource::with_sample().with_delay(Duration::from_secs(10));
        let mut dash = Dashboard::new(RosterFilter::default(), TARGET_HOURS);
        let mut renders = 0usize;
        let mut loading_seen = false;

        let started = time::Instant::now();
        run_watch(
            &mut dash,
            &source,
            PollSettings::default(),
            |d| {
                renders += 1;
                loading_seen |= d.state().loading;
            },
            time::sleep(Duration::from_secs(3)),
        )
        .await;

        assert!(started.elapsed() < Duration::from_secs(4));
        // clock at t = 0, 1, 2 plus the "refreshing" frame
        assert!(renders >= 4, "renders = {renders}");
        assert!(loading_seen);
        assert!(!dash.state().loading);
        assert!(dash.state().snapshot.is_none());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_refresh_is_applied_when_it_lands() {
        let source = FakeSource::with_sample().with_delay(Duration::from_secs(10));
        let mut dash = Dashboard::new(RosterFilter::default(), TARGET_HOURS);

        run_watch(
            &mut dash,
            &source,
            PollSettings::default(),
            |_| {},
            time::sleep(Duration::from_secs(15)),
        )
        .await;

        assert_eq!(source.calls(), 1);
        assert!(!dash.state().loading);
        assert!(dash.state().snapshot.is_some());
    }
}
