// src/export/logic.rs

use crate::core::snapshot::Snapshot;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json::export_json;
use crate::export::model::{build_report, report_file_name};
use crate::export::xlsx::export_xlsx;
use crate::utils::path::{expand_tilde, has_extension, output_path};
use chrono::Local;
use std::path::PathBuf;
use tracing::warn;

/// Where the report goes: an explicit file, or a directory that receives the
/// dated default file name.
#[derive(Clone, Debug)]
pub enum OutputTarget {
    File(String),
    Dir(String),
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Exports the snapshot already in memory; nothing is re-fetched.
    /// Returns the path written.
    pub fn export(
        snapshot: &Snapshot,
        format: ExportFormat,
        target: &OutputTarget,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = Self::resolve_path(snapshot, format, target);

        ensure_parent_dir(&path)?;
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(&build_report(snapshot, &Local), &path)?,
            ExportFormat::Json => export_json(snapshot, &path)?,
        }

        Ok(path)
    }

    pub fn resolve_path(snapshot: &Snapshot, format: ExportFormat, target: &OutputTarget) -> PathBuf {
        match target {
            OutputTarget::File(f) => {
                let path = expand_tilde(f);
                if path.extension().is_none() {
                    path.with_extension(format.extension())
                } else {
                    if !has_extension(&path, format.extension()) {
                        warn!(path = %path.display(), "file extension does not match the export format");
                    }
                    path
                }
            }
            OutputTarget::Dir(d) => output_path(d, &report_file_name(snapshot, format.extension())),
        }
    }
}
