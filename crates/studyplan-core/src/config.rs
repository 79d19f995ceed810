//! TOML-based planner configuration.
//!
//! Stores the working window and plan layout:
//! - `[hours]`: morning slot, noon cutoff, afternoon slot, end of day
//! - `[plan]`: buffer between tasks, stagger between goals
//!
//! Configuration is stored at `~/.config/studyplan/config.toml`. A missing
//! file means defaults; nothing is written until [`Config::save`] is called.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::scheduler::SchedulerConfig;

/// Returns `~/.config/studyplan[-dev]/` based on STUDYPLAN_ENV.
///
/// Set STUDYPLAN_ENV=dev to use development data directory.
pub fn data_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    match std::env::var("STUDYPLAN_ENV").as_deref() {
        Ok("dev") => base_dir.join("studyplan-dev"),
        _ => base_dir.join("studyplan"),
    }
}

/// Working window, in local hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursConfig {
    #[serde(default = "default_morning_start")]
    pub morning_start: u32,
    #[serde(default = "default_noon_cutoff")]
    pub noon_cutoff: u32,
    #[serde(default = "default_afternoon_start")]
    pub afternoon_start: u32,
    #[serde(default = "default_day_end")]
    pub day_end: u32,
}

/// Plan layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_buffer_hours")]
    pub buffer_hours: u32,
    #[serde(default = "default_stagger_days")]
    pub stagger_days: u32,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hours: HoursConfig,
    #[serde(default)]
    pub plan: PlanConfig,
}

fn default_morning_start() -> u32 {
    SchedulerConfig::default().morning_start
}
fn default_noon_cutoff() -> u32 {
    SchedulerConfig::default().noon_cutoff
}
fn default_afternoon_start() -> u32 {
    SchedulerConfig::default().afternoon_start
}
fn default_day_end() -> u32 {
    SchedulerConfig::default().day_end
}
fn default_buffer_hours() -> u32 {
    SchedulerConfig::default().buffer_hours
}
fn default_stagger_days() -> u32 {
    SchedulerConfig::default().stagger_days
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            morning_start: default_morning_start(),
            noon_cutoff: default_noon_cutoff(),
            afternoon_start: default_afternoon_start(),
            day_end: default_day_end(),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            buffer_hours: default_buffer_hours(),
            stagger_days: default_stagger_days(),
        }
    }
}

impl Config {
    /// Every key accepted by [`Config::get`] and [`Config::set`].
    pub const KEYS: [&'static str; 6] = [
        "hours.morning_start",
        "hours.noon_cutoff",
        "hours.afternoon_start",
        "hours.day_end",
        "plan.buffer_hours",
        "plan.stagger_days",
    ];

    /// Default location, `<data_dir>/config.toml`.
    pub fn default_path() -> PathBuf {
        data_dir().join("config.toml")
    }

    /// Load from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if it describes an invalid working window.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let cfg: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        cfg.scheduler_config().validate()?;
        Ok(cfg)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Persist to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path())
    }

    fn field(&self, key: &str) -> Option<u32> {
        let value = match key {
            "hours.morning_start" => self.hours.morning_start,
            "hours.noon_cutoff" => self.hours.noon_cutoff,
            "hours.afternoon_start" => self.hours.afternoon_start,
            "hours.day_end" => self.hours.day_end,
            "plan.buffer_hours" => self.plan.buffer_hours,
            "plan.stagger_days" => self.plan.stagger_days,
            _ => return None,
        };
        Some(value)
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut u32> {
        let slot = match key {
            "hours.morning_start" => &mut self.hours.morning_start,
            "hours.noon_cutoff" => &mut self.hours.noon_cutoff,
            "hours.afternoon_start" => &mut self.hours.afternoon_start,
            "hours.day_end" => &mut self.hours.day_end,
            "plan.buffer_hours" => &mut self.plan.buffer_hours,
            "plan.stagger_days" => &mut self.plan.stagger_days,
            _ => return None,
        };
        Some(slot)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.field(key).map(|v| v.to_string())
    }

    /// Set a config value by key. The result must still form a valid window;
    /// on error `self` is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parsed: u32 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot parse '{value}' as a non-negative integer"),
        })?;

        let mut updated = self.clone();
        let slot = updated
            .field_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        *slot = parsed;
        updated.scheduler_config().validate()?;

        *self = updated;
        Ok(())
    }

    /// Scheduler settings described by this config.
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            morning_start: self.hours.morning_start,
            noon_cutoff: self.hours.noon_cutoff,
            afternoon_start: self.hours.afternoon_start,
            day_end: self.hours.day_end,
            buffer_hours: self.plan.buffer_hours,
            stagger_days: self.plan.stagger_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn defaults_match_scheduler_defaults() {
        assert_eq!(Config::default().scheduler_config(), SchedulerConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[hours]\nday_end = 20\n").unwrap();
        assert_eq!(cfg.hours.day_end, 20);
        assert_eq!(cfg.hours.morning_start, 9);
        assert_eq!(cfg.plan.stagger_days, 2);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("hours.morning_start").as_deref(), Some("9"));
        assert_eq!(cfg.get("plan.buffer_hours").as_deref(), Some("1"));
        assert!(cfg.get("hours.missing_key").is_none());
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = Config::default();
        for key in Config::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn set_updates_value() {
        let mut cfg = Config::default();
        cfg.set("plan.stagger_days", "3").unwrap();
        assert_eq!(cfg.plan.stagger_days, 3);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("ui.dark_mode", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("hours.day_end", "late").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_rejects_broken_window() {
        let mut cfg = Config::default();
        let result = cfg.set("hours.afternoon_start", "19");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg.hours.afternoon_start, 14);
    }

    #[test]
    fn set_rejects_out_of_range_plan_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("plan.stagger_days", "4000000000"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("plan.buffer_hours", "24"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());

        cfg.set("plan.stagger_days", "365").unwrap();
        let plan = crate::plan::PlanGenerator::with_config(cfg.scheduler_config())
            .generate(&["a", "b", "c"], Some(crate::plan::parse_start_date("2024-01-01T08:00:00Z").unwrap()))
            .unwrap();
        assert_eq!(plan.len(), 15);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.set("hours.day_end", "19").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_rejects_garbage_and_bad_windows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "hours = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));

        std::fs::write(&path, "[hours]\nmorning_start = 13\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
