// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod bot_command;
mod chat;
mod chat_member;
mod forum;
mod inline_query;
mod input_media;
mod markup;
mod message;
mod passport;
mod payments;
mod sticker;
mod user;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use self::{
  bot_command::*, chat::*, chat_member::*, forum::*, inline_query::*, input_media::*, markup::*,
  message::*, passport::*, payments::*, sticker::*, user::*,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
  Markdown,
  MarkdownV2,
  #[serde(rename = "HTML")]
  Html,
}

/// Integer chat id or `@channelusername`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ChatId {
  Id(i64),
  Username(String),
}

impl From<i64> for ChatId {
  fn from(id: i64) -> Self {
    Self::Id(id)
  }
}

impl From<i32> for ChatId {
  fn from(id: i32) -> Self {
    Self::Id(i64::from(id))
  }
}

impl From<&str> for ChatId {
  fn from(username: &str) -> Self {
    Self::Username(username.to_owned())
  }
}

impl From<String> for ChatId {
  fn from(username: String) -> Self {
    Self::Username(username)
  }
}

impl fmt::Display for ChatId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Id(id) => write!(f, "{id}"),
      Self::Username(username) => f.write_str(username),
    }
  }
}
