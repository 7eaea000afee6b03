//! TOML-based application configuration.
//!
//! Stores tunables that shape engine behavior:
//! - Rollover check cadence
//! - Points awarded per action
//! - Habits seeded on first run
//! - Default focus session length
//!
//! Configuration is stored at `~/.config/momentum/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Rollover watcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolloverConfig {
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,
}

/// Points awarded for each kind of user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_per_activity")]
    pub per_activity: u64,
    #[serde(default = "default_per_habit")]
    pub per_habit: u64,
    #[serde(default = "default_per_timer_session")]
    pub per_timer_session: u64,
}

/// First-run seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_habits")]
    pub habits: Vec<String>,
}

/// Focus timer defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/momentum/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rollover: RolloverConfig,
    #[serde(default)]
    pub points: PointsConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

fn default_check_interval_secs() -> u64 {
    60
}
fn default_per_activity() -> u64 {
    10
}
fn default_per_habit() -> u64 {
    5
}
fn default_per_timer_session() -> u64 {
    25
}
fn default_focus_minutes() -> u32 {
    25
}
fn default_seed_habits() -> Vec<String> {
    ["Drink water", "Move for 20 minutes", "Read 10 pages", "Plan tomorrow"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for RolloverConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: default_check_interval_secs(),
        }
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            per_activity: default_per_activity(),
            per_habit: default_per_habit(),
            per_timer_session: default_per_timer_session(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            habits: default_seed_habits(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
        }
    }
}

impl RolloverConfig {
    /// Check cadence clamped to 1..=60 seconds.
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.check_interval_secs.clamp(1, 60))
    }
}

impl Config {
    fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    fn assign(root: &mut serde_json::Value, key: &str, value: &str) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut parent = root;
        if let Some(path) = parent_path {
            for part in path.split('.') {
                parent = parent.get_mut(part).ok_or_else(unknown)?;
            }
        }
        let obj = parent.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => serde_json::Value::Number(
                value
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a non-negative integer")))?
                    .into(),
            ),
            serde_json::Value::Array(_) => {
                let items: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                serde_json::to_value(items).map_err(|e| invalid(e.to_string()))?
            }
            serde_json::Value::Object(_) => return Err(invalid("cannot assign a whole section".into())),
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::lookup(&json, key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value in memory by key. Returns error if key is unknown
    /// or the value does not fit the existing type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::assign(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
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
        assert_eq!(parsed.rollover.check_interval_secs, 60);
        assert_eq!(parsed.points.per_activity, 10);
        assert_eq!(parsed.seed.habits.len(), 4);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let parsed: Config = toml::from_str("[points]\nper_habit = 7\n").unwrap();
        assert_eq!(parsed.points.per_habit, 7);
        assert_eq!(parsed.points.per_activity, 10);
        assert_eq!(parsed.timer.focus_minutes, 25);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("points.per_timer_session").as_deref(), Some("25"));
        assert_eq!(cfg.get("rollover.check_interval_secs").as_deref(), Some("60"));
        assert!(cfg.get("points.missing").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_number() {
        let mut cfg = Config::default();
        cfg.set("points.per_activity", "3").unwrap();
        assert_eq!(cfg.points.per_activity, 3);
    }

    #[test]
    fn set_updates_list_from_commas() {
        let mut cfg = Config::default();
        cfg.set("seed.habits", "Stretch, Journal,,").unwrap();
        assert_eq!(cfg.seed.habits, vec!["Stretch", "Journal"]);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("points.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.set("points", "1"), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        let result = cfg.set("timer.focus_minutes", "soon");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg.timer.focus_minutes, 25);
    }

    #[test]
    fn interval_is_clamped_to_a_minute() {
        let mut cfg = Config::default();
        cfg.rollover.check_interval_secs = 3600;
        assert_eq!(cfg.rollover.interval().as_secs(), 60);
        cfg.rollover.check_interval_secs = 0;
        assert_eq!(cfg.rollover.interval().as_secs(), 1);
    }

    #[test]
    fn load_from_writes_defaults_when_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.points.per_habit, 5);

        let mut changed = cfg.clone();
        changed.set("points.per_habit", "9").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().points.per_habit, 9);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "points = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
