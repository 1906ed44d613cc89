//! Path utilities: expand ~, resolve report output locations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Joins a file name onto an output directory, expanding `~` first.
pub fn output_path(dir: &str, file_name: &str) -> PathBuf {
    expand_tilde(dir).join(file_name)
}

pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_joins_file_name() {
        let p = output_path("/tmp/reports", "Attendance_Report_2026-10-19.xlsx");
        assert_eq!(
            p,
            PathBuf::from("/tmp/reports/Attendance_Report_2026-10-19.xlsx")
        );
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_extension(Path::new("a/b.XLSX"), "xlsx"));
        assert!(!has_extension(Path::new("a/b.json"), "xlsx"));
    }
}
