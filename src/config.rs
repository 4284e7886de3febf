use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub model: ModelConfig,
    pub notify: NotifyConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub console_level: String,
    pub file_level: String,
    pub log_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f64,
    pub history_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotifyConfig {
    pub api_base: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: app_dir()
                .join("meal_history.db")
                .to_string_lossy()
                .into_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".into(),
            file_level: "debug".into(),
            log_dir: app_dir().join("logs").to_string_lossy().into_owned(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".into(),
            model: "deepseek-r1:7b".into(),
            api_key: "ollama".into(),
            temperature: 0.7,
            history_days: 3,
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.twilio.com".into(),
        }
    }
}

/// Messaging credentials, read from the environment only.
#[derive(Debug, Clone, Default)]
pub struct NotifyCredentials {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
}

impl NotifyCredentials {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            account_sid: var("TWILIO_ACCOUNT_SID"),
            auth_token: var("TWILIO_AUTH_TOKEN"),
            from_number: var("TWILIO_FROM_NUMBER"),
            to_number: var("MY_PHONE_NUMBER"),
        }
    }

    /// Names of the environment variables that were not set.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("TWILIO_ACCOUNT_SID", &self.account_sid),
            ("TWILIO_AUTH_TOKEN", &self.auth_token),
            ("TWILIO_FROM_NUMBER", &self.from_number),
            ("MY_PHONE_NUMBER", &self.to_number),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Directory holding the executable; the database and logs live next to it.
/// Falls back to `~/.mealplan/` when the executable path is unavailable.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(default_config_dir)
}

/// Returns `~/.mealplan/`
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mealplan")
}

/// Returns the default config file path: `~/.mealplan/config.toml`
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

impl PlannerConfig {
    /// Load config from a TOML file (defaults if it does not exist), then
    /// apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            PlannerConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (MEALPLAN_DB, MEALPLAN_LOG_LEVEL,
    /// MEALPLAN_MODEL_URL, MEALPLAN_MODEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MEALPLAN_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("MEALPLAN_LOG_LEVEL") {
            self.logging.console_level = val;
        }
        if let Ok(val) = std::env::var("MEALPLAN_MODEL_URL") {
            self.model.base_url = val;
        }
        if let Ok(val) = std::env::var("MEALPLAN_MODEL") {
            self.model.model = val;
        }
    }

    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    pub fn resolved_log_dir(&self) -> PathBuf {
        expand_tilde(&self.logging.log_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
