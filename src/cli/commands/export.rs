use crate::cli::commands::client;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::snapshot::Snapshot;
use crate::errors::AppResult;
use crate::export::model::build_report;
use crate::export::{ExportLogic, OutputTarget};
use crate::ui::preview::render_preview;
use chrono::Local;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        dir,
        force,
        preview,
    } = cmd
    {
        let snapshot = Snapshot::fetch(&client(cfg)?).await?;

        if *preview {
            print!("{}", render_preview(&build_report(&snapshot, &Local)));
            return Ok(());
        }

        let target = match (file, dir) {
            (Some(f), _) => OutputTarget::File(f.clone()),
            (None, Some(d)) => OutputTarget::Dir(d.clone()),
            (None, None) => OutputTarget::Dir(cfg.export_dir.clone()),
        };

        ExportLogic::export(&snapshot, *format, &target, *force)?;
    }
    Ok(())
}
