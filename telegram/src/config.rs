// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org/bot";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
pub(crate) const RETRY_DELAY_MS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct TelegramConfig {
  pub(crate) token: String,
  pub(crate) api_url: String,
  pub(crate) timeout: Duration,
  pub(crate) retry_attempts: u32,
  pub(crate) retry_delay: Duration,
}

impl TelegramConfig {
  pub fn new(token: impl Into<String>) -> Self {
    Self {
      token: token.into(),
      ..Self::default()
    }
  }

  /// `{api_url}{token}/{method}`
  pub(crate) fn method_url(&self, method: &str) -> String {
    format!("{}{}/{}", self.api_url, self.token, method)
  }

  pub fn retry_attempts(&self) -> u32 {
    self.retry_attempts
  }

  pub fn retry_delay(&self) -> Duration {
    self.retry_delay
  }
}

impl Default for TelegramConfig {
  fn default() -> Self {
    Self {
      token: String::new(),
      api_url: TELEGRAM_API_BASE.to_owned(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      retry_attempts: DEFAULT_RETRY_ATTEMPTS,
      retry_delay: Duration::from_millis(RETRY_DELAY_MS),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn method_url_joins_token_and_method() {
    let config = TelegramConfig::new("123:abc");
    assert_eq!(
      config.method_url("getMe"),
      "https://api.telegram.org/bot123:abc/getMe"
    );
    assert_eq!(config.retry_attempts(), 3);
  }
}
