use crate::cli::commands::client;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::filter::RosterFilter;
use crate::core::poller::{PollSettings, run_watch};
use crate::errors::AppResult;
use crate::ui::dashboard::render_dashboard;
use std::io::{self, Write};
use tracing::info;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { search, status } = cmd {
        let client = client(cfg)?;
        let filter = RosterFilter::new(search.clone().unwrap_or_default(), *status);
        let mut dash = Dashboard::new(filter, cfg.target_hours);

        let settings = PollSettings {
            refresh_every: cfg.refresh_interval(),
            clock_every: cfg.clock_interval(),
        };
        info!(url = client.base_url(), ?settings, "watching");

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
        };

        run_watch(
            &mut dash,
            &client,
            settings,
            |d| {
                let mut out = io::stdout().lock();
                let _ = write!(out, "{CLEAR_SCREEN}{}", render_dashboard(d));
                let _ = out.flush();
            },
            shutdown,
        )
        .await;

        println!();
    }
    Ok(())
}
