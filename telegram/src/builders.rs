// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::{HttpTransport, TelegramClient, Transport},
  config::TelegramConfig,
  types::{InlineKeyboardButton, InlineKeyboardMarkup},
};
use error::Error;
use std::time::Duration;

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  /// Base URL the token and method name are appended to.
  pub fn api_url(mut self, url: impl Into<String>) -> Self {
    self.config.api_url = url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn retry_attempts(mut self, attempts: u32) -> Self {
    self.config.retry_attempts = attempts;
    self
  }

  pub fn retry_delay(mut self, delay: Duration) -> Self {
    self.config.retry_delay = delay;
    self
  }

  fn validate(&self) -> Result<(), Error> {
    if self.config.token.is_empty() {
      return Err(Error::ConfigError("Bot token cannot be empty".into()));
    }
    if self.config.api_url.is_empty() {
      return Err(Error::ConfigError("API URL cannot be empty".into()));
    }
    Ok(())
  }

  pub fn build(self) -> Result<TelegramClient, Error> {
    self.validate()?;
    let transport = HttpTransport::new(&self.config)?;
    Ok(TelegramClient::with_transport(self.config, transport))
  }

  /// Builds a client that sends through `transport` instead of HTTP.
  pub fn build_with<T: Transport>(self, transport: T) -> Result<TelegramClient<T>, Error> {
    self.validate()?;
    Ok(TelegramClient::with_transport(self.config, transport))
  }
}

/// Inline keyboard, one row per call.
#[derive(Debug, Default)]
pub struct KeyboardBuilder {
  rows: Vec<Vec<InlineKeyboardButton>>,
}

impl KeyboardBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// A row of `(text, url)` link buttons.
  pub fn button(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let row = buttons
      .into_iter()
      .map(|(text, url)| InlineKeyboardButton::url(text, url))
      .collect();
    self.rows.push(row);
    self
  }

  /// A row of `(text, callback_data)` buttons.
  pub fn callback(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let row = buttons
      .into_iter()
      .map(|(text, data)| InlineKeyboardButton::callback(text, data))
      .collect();
    self.rows.push(row);
    self
  }

  pub fn build(self) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(self.rows)
  }
}
