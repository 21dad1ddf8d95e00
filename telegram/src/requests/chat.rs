// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  codec::{BanUntil, Color},
  encoder::Request,
  schema::{schema, Kind},
  types::{ChatId, ChatInviteLink, ChatMember, ChatPermissions, ForumTopic},
};
use chrono::{DateTime, Utc};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct GetChatMember {
    pub chat_id: ChatId => required Kind::ChatId,
    pub user_id: i64 => required Kind::Integer,
  }
}

impl GetChatMember {
  pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
    Self {
      chat_id: chat_id.into(),
      user_id,
    }
  }
}

impl Request for GetChatMember {
  const METHOD: &'static str = "getChatMember";
  type Response = ChatMember;
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct BanChatMember {
    pub chat_id: ChatId => required Kind::ChatId,
    pub user_id: i64 => required Kind::Integer,
    /// Omitted, like `0`, means the ban never expires.
    #[serde(default, with = "crate::codec::ban_until")]
    pub until_date: Option<BanUntil> => optional Kind::BanUntil,
    pub revoke_messages: Option<bool> => optional Kind::Bool,
  }
}

impl BanChatMember {
  pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
    Self {
      chat_id: chat_id.into(),
      user_id,
      until_date: None,
      revoke_messages: None,
    }
  }

  pub fn until(mut self, until: BanUntil) -> Self {
    self.until_date = Some(until);
    self
  }

  pub fn revoke_messages(mut self) -> Self {
    self.revoke_messages = Some(true);
    self
  }
}

impl Request for BanChatMember {
  const METHOD: &'static str = "banChatMember";
  type Response = bool;
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct SetChatPermissions {
    pub chat_id: ChatId => required Kind::ChatId,
    pub permissions: ChatPermissions => required Kind::Entity(ChatPermissions::shape),
    pub use_independent_chat_permissions: Option<bool> => optional Kind::Bool,
  }
}

impl SetChatPermissions {
  pub fn new(chat_id: impl Into<ChatId>, permissions: ChatPermissions) -> Self {
    Self {
      chat_id: chat_id.into(),
      permissions,
      use_independent_chat_permissions: None,
    }
  }

  pub fn independent(mut self) -> Self {
    self.use_independent_chat_permissions = Some(true);
    self
  }
}

impl Request for SetChatPermissions {
  const METHOD: &'static str = "setChatPermissions";
  type Response = bool;
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct CreateChatInviteLink {
    pub chat_id: ChatId => required Kind::ChatId,
    pub name: Option<String> => optional Kind::String,
    #[serde(default, with = "crate::codec::unix_time_option")]
    pub expire_date: Option<DateTime<Utc>> => optional Kind::Timestamp,
    pub member_limit: Option<i32> => optional Kind::Int32,
    pub creates_join_request: Option<bool> => optional Kind::Bool,
  }
}

impl CreateChatInviteLink {
  pub fn new(chat_id: impl Into<ChatId>) -> Self {
    Self {
      chat_id: chat_id.into(),
      name: None,
      expire_date: None,
      member_limit: None,
      creates_join_request: None,
    }
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn expire_date(mut self, at: DateTime<Utc>) -> Self {
    self.expire_date = Some(at);
    self
  }

  pub fn member_limit(mut self, limit: i32) -> Self {
    self.member_limit = Some(limit);
    self
  }

  pub fn join_request(mut self) -> Self {
    self.creates_join_request = Some(true);
    self
  }
}

impl Request for CreateChatInviteLink {
  const METHOD: &'static str = "createChatInviteLink";
  type Response = ChatInviteLink;
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct CreateForumTopic {
    pub chat_id: ChatId => required Kind::ChatId,
    pub name: String => required Kind::String,
    pub icon_color: Option<Color> => optional Kind::Color,
    pub icon_custom_emoji_id: Option<String> => optional Kind::String,
  }
}

impl CreateForumTopic {
  pub fn new(chat_id: impl Into<ChatId>, name: impl Into<String>) -> Self {
    Self {
      chat_id: chat_id.into(),
      name: name.into(),
      icon_color: None,
      icon_custom_emoji_id: None,
    }
  }

  pub fn icon_color(mut self, color: Color) -> Self {
    self.icon_color = Some(color);
    self
  }

  pub fn icon_custom_emoji_id(mut self, id: impl Into<String>) -> Self {
    self.icon_custom_emoji_id = Some(id.into());
    self
  }
}

impl Request for CreateForumTopic {
  const METHOD: &'static str = "createForumTopic";
  type Response = ForumTopic;
}
