use crate::core::calculator::TARGET_HOURS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public deployment of the attendance API.
pub const DEFAULT_API_URL: &str = "https://db-attendance-and-task-tracking.vercel.app";

/// Every key a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 6] = [
    "api_base_url",
    "request_timeout_secs",
    "refresh_interval_secs",
    "clock_interval_secs",
    "target_hours",
    "export_dir",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub refresh_interval_secs: u64,
    pub clock_interval_secs: u64,
    pub target_hours: f64,
    pub export_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 10,
            refresh_interval_secs: 30,
            clock_interval_secs: 1,
            target_hours: TARGET_HOURS,
            export_dir: ".".to_string(),
        }
    }
}

impl Config {
    /// `~/.attendash`, or `./.attendash` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".attendash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendash.conf")
    }

    /// Load configuration from `path` (or the default location), falling back
    /// to defaults when the file does not exist. Missing keys take defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.refresh_interval_secs == 0 || self.clock_interval_secs == 0 {
            return Err(AppError::Config(
                "refresh_interval_secs and clock_interval_secs must be greater than 0".into(),
            ));
        }
        if self.target_hours.is_nan() || self.target_hours <= 0.0 {
            return Err(AppError::Config("target_hours must be positive".into()));
        }
        Ok(())
    }

    /// Write this configuration as YAML, creating the directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Keys from [`CONFIG_KEYS`] that the file at `path` does not set.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_secs(self.clock_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load(Some(&dir.path().join("nope.conf"))).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.refresh_interval(), Duration::from_secs(30));
        assert_eq!(cfg.clock_interval(), Duration::from_secs(1));
    }

    #[test]
    fn partial_file_fills_defaults_and_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendash.conf");
        fs::write(&path, "api_base_url: http://localhost:8000\ntarget_hours: 7.5\n").unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
        assert_eq!(cfg.target_hours, 7.5);
        assert_eq!(cfg.request_timeout_secs, 10);

        let missing = Config::missing_keys(&path).unwrap();
        assert_eq!(
            missing,
            vec![
                "request_timeout_secs",
                "refresh_interval_secs",
                "clock_interval_secs",
                "export_dir"
            ]
        );
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub/attendash.conf");
        let cfg = Config {
            export_dir: "~/reports".into(),
            refresh_interval_secs: 60,
            ..Config::default()
        };
        cfg.save(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), cfg);
        assert!(Config::missing_keys(&path).unwrap().is_empty());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendash.conf");
        fs::write(&path, "refresh_interval_secs: 0\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendash.conf");
        fs::write(&path, "target_hours: [not a number\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(AppError::ConfigParse(_))
        ));
    }
}
