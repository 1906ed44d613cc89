use crate::cli::commands::client;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::filter::RosterFilter;
use crate::errors::AppResult;
use crate::ui::dashboard::render_dashboard;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { search, status } = cmd {
        let client = client(cfg)?;
        let filter = RosterFilter::new(search.clone().unwrap_or_default(), *status);
        let mut dash = Dashboard::new(filter, cfg.target_hours);

        dash.refresh(&client).await?;
        print!("{}", render_dashboard(&dash));
    }
    Ok(())
}
