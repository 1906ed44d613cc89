use crate::cli::commands::client;
use crate::cli::parser::{Commands, SummaryPeriod};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::dashboard::{render_daily, render_monthly, render_staff_week, render_weekly};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let client = client(cfg)?;

        let out = match period {
            SummaryPeriod::Daily => render_daily(&client.fetch_daily_summary().await?),
            SummaryPeriod::Weekly => render_weekly(&client.fetch_weekly_summary().await?),
            SummaryPeriod::Monthly => render_monthly(&client.fetch_monthly_summary().await?),
            SummaryPeriod::Staff => render_staff_week(&client.fetch_staff_week().await?),
        };
        print!("{out}");
    }
    Ok(())
}
