// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  encoder::Request,
  schema::{schema, Kind},
  types::InlineQueryResult,
  union::Union,
};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct AnswerInlineQuery {
    pub inline_query_id: String => required Kind::String,
    pub results: Vec<InlineQueryResult> => required Kind::Unions(InlineQueryResult::family),
    /// Seconds the result may be cached on the server.
    pub cache_time: Option<i32> => optional Kind::Int32,
    pub is_personal: Option<bool> => optional Kind::Bool,
    pub next_offset: Option<String> => optional Kind::String,
  }
}

impl AnswerInlineQuery {
  pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
    Self {
      inline_query_id: inline_query_id.into(),
      results,
      cache_time: None,
      is_personal: None,
      next_offset: None,
    }
  }

  pub fn cache_time(mut self, seconds: i32) -> Self {
    self.cache_time = Some(seconds);
    self
  }

  pub fn personal(mut self) -> Self {
    self.is_personal = Some(true);
    self
  }

  pub fn next_offset(mut self, offset: impl Into<String>) -> Self {
    self.next_offset = Some(offset.into());
    self
  }
}

impl Request for AnswerInlineQuery {
  const METHOD: &'static str = "answerInlineQuery";
  type Response = bool;
}
