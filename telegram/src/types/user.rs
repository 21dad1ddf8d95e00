// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::schema::{schema, Kind};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct User {
    pub id: i64 => required Kind::Integer,
    pub is_bot: bool => required Kind::Bool,
    pub first_name: String => required Kind::String,
    pub last_name: Option<String> => optional Kind::String,
    pub username: Option<String> => optional Kind::String,
    pub language_code: Option<String> => optional Kind::String,
    pub is_premium: Option<bool> => optional Kind::Bool,
    pub added_to_attachment_menu: Option<bool> => optional Kind::Bool,
    pub can_join_groups: Option<bool> => optional Kind::Bool,
    pub can_read_all_group_messages: Option<bool> => optional Kind::Bool,
    pub supports_inline_queries: Option<bool> => optional Kind::Bool,
  }
}

impl User {
  pub fn new(id: i64, first_name: impl Into<String>) -> Self {
    Self {
      id,
      is_bot: false,
      first_name: first_name.into(),
      last_name: None,
      username: None,
      language_code: None,
      is_premium: None,
      added_to_attachment_menu: None,
      can_join_groups: None,
      can_read_all_group_messages: None,
      supports_inline_queries: None,
    }
  }

  pub fn full_name(&self) -> String {
    match &self.last_name {
      Some(last_name) => format!("{} {}", self.first_name, last_name),
      None => self.first_name.clone(),
    }
  }
}
