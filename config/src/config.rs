// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{instrument, warn, Level};

/// Environment variable consulted when the file carries no token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub telegram: TelegramSection,
  pub log: LogSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramSection {
  pub token: Option<String>,
  pub api_url: Option<String>,
  pub timeout_secs: u64,
  pub retry_attempts: u32,
  pub retry_delay_ms: u64,
}

impl Default for TelegramSection {
  fn default() -> Self {
    Self {
      token: None,
      api_url: None,
      timeout_secs: 10,
      retry_attempts: 3,
      retry_delay_ms: 1000,
    }
  }
}

impl TelegramSection {
  /// The configured token, else the one in `TELEGRAM_BOT_TOKEN`.
  pub fn token(&self) -> Option<String> {
    self
      .token
      .clone()
      .filter(|token| !token.is_empty())
      .or_else(|| std::env::var(TOKEN_ENV).ok())
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  pub fn retry_delay(&self) -> Duration {
    Duration::from_millis(self.retry_delay_ms)
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSection {
  pub level: String,
}

impl Default for LogSection {
  fn default() -> Self {
    Self {
      level: "info".into(),
    }
  }
}

impl LogSection {
  pub fn level(&self) -> Level {
    self.level.parse().unwrap_or_else(|_| {
      warn!("Unknown log level {:?}, falling back to info", self.level);
      Level::INFO
    })
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = Self::from_toml(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Like [`Config::from_file`], but a missing file yields the defaults.
  pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      tracing::debug!("No configuration at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::from_file(path)
  }

  pub fn from_toml(content: &str) -> anyhow::Result<Self> {
    toml::from_str(content).context("Invalid configuration")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.telegram.retry_attempts, 3);
    assert_eq!(config.telegram.timeout(), Duration::from_secs(10));
    assert_eq!(config.telegram.retry_delay(), Duration::from_millis(1000));
    assert_eq!(config.log.level(), Level::INFO);
  }

  #[test]
  fn sections_override_defaults() {
    let config = Config::from_toml(
      r#"
        [telegram]
        token = "123:abc"
        api_url = "http://localhost:8081"
        retry_attempts = 0

        [log]
        level = "debug"
      "#,
    )
    .unwrap();
    assert_eq!(config.telegram.token().as_deref(), Some("123:abc"));
    assert_eq!(config.telegram.api_url.as_deref(), Some("http://localhost:8081"));
    assert_eq!(config.telegram.retry_attempts, 0);
    assert_eq!(config.telegram.timeout_secs, 10);
    assert_eq!(config.log.level(), Level::DEBUG);
  }

  #[test]
  fn unknown_level_falls_back_to_info() {
    let log = LogSection {
      level: "chatty".into(),
    };
    assert_eq!(log.level(), Level::INFO);
  }

  #[test]
  fn malformed_toml_is_an_error() {
    assert!(Config::from_toml("[telegram]\nretry_attempts = \"many\"").is_err());
  }

  #[test]
  fn missing_file_falls_back() {
    let path = std::env::temp_dir().join("botctl-config-that-does-not-exist.toml");
    assert!(Config::from_file(&path).is_err());
    assert_eq!(Config::load_or_default(&path).unwrap().telegram.retry_attempts, 3);
  }

  #[test]
  fn reads_from_disk() {
    let path = std::env::temp_dir().join(format!("botctl-config-{}.toml", std::process::id()));
    fs::write(&path, "[telegram]\ntimeout_secs = 5\n").unwrap();
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.telegram.timeout(), Duration::from_secs(5));
  }
}
