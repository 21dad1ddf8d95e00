// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::schema::{schema, Kind, Schema};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineKeyboardButton {
    pub text: String => required Kind::String,
    pub url: Option<String> => optional Kind::String,
    pub callback_data: Option<String> => optional Kind::String,
    pub switch_inline_query: Option<String> => optional Kind::String,
    pub switch_inline_query_current_chat: Option<String> => optional Kind::String,
  }
}

impl InlineKeyboardButton {
  pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      url: Some(url.into()),
      callback_data: None,
      switch_inline_query: None,
      switch_inline_query_current_chat: None,
    }
  }

  pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      url: None,
      callback_data: Some(data.into()),
      switch_inline_query: None,
      switch_inline_query_current_chat: None,
    }
  }
}

const BUTTON_ROW: Kind = Kind::Entities(InlineKeyboardButton::shape);
const BUTTON_ROWS: Kind = Kind::Array(&BUTTON_ROW);

schema! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>> => required BUTTON_ROWS,
  }
}

impl InlineKeyboardMarkup {
  pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
    Self {
      inline_keyboard: rows,
    }
  }
}
