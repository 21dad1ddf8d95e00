// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  codec::Color,
  schema::{schema, Kind},
};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ForumTopic {
    pub message_thread_id: i32 => required Kind::Int32,
    pub name: String => required Kind::String,
    pub icon_color: Color => required Kind::Color,
    pub icon_custom_emoji_id: Option<String> => optional Kind::String,
  }
}

schema! {
  /// Service message: a topic was created.
  #[derive(Debug, Clone, PartialEq)]
  pub struct ForumTopicCreated {
    pub name: String => required Kind::String,
    pub icon_color: Color => required Kind::Color,
    pub icon_custom_emoji_id: Option<String> => optional Kind::String,
  }
}

schema! {
  /// Service message: a topic was closed. Carries no fields.
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct ForumTopicClosed {}
}
