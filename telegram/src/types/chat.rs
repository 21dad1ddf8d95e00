// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::User;
use crate::schema::{schema, Kind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
  Private,
  Group,
  Supergroup,
  Channel,
  Sender,
  /// Any chat type added to the API later.
  #[serde(other)]
  Unknown,
}

const USER_IDS: Kind = Kind::Array(&Kind::Integer);

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct Chat {
    pub id: i64 => required Kind::Integer,
    pub kind as "type": ChatType => required Kind::String,
    pub title: Option<String> => optional Kind::String,
    pub username: Option<String> => optional Kind::String,
    pub first_name: Option<String> => optional Kind::String,
    pub last_name: Option<String> => optional Kind::String,
    pub is_forum: Option<bool> => optional Kind::Bool,
  }
}

impl Chat {
  pub fn private(id: i64, first_name: impl Into<String>) -> Self {
    Self {
      id,
      kind: ChatType::Private,
      title: None,
      username: None,
      first_name: Some(first_name.into()),
      last_name: None,
      is_forum: None,
    }
  }
}

schema! {
  /// What non-administrators may do in a chat.
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct ChatPermissions {
    pub can_send_messages: Option<bool> => optional Kind::Bool,
    pub can_send_audios: Option<bool> => optional Kind::Bool,
    pub can_send_documents: Option<bool> => optional Kind::Bool,
    pub can_send_photos: Option<bool> => optional Kind::Bool,
    pub can_send_videos: Option<bool> => optional Kind::Bool,
    pub can_send_video_notes: Option<bool> => optional Kind::Bool,
    pub can_send_voice_notes: Option<bool> => optional Kind::Bool,
    pub can_send_polls: Option<bool> => optional Kind::Bool,
    pub can_send_other_messages: Option<bool> => optional Kind::Bool,
    pub can_add_web_page_previews: Option<bool> => optional Kind::Bool,
    pub can_change_info: Option<bool> => optional Kind::Bool,
    pub can_invite_users: Option<bool> => optional Kind::Bool,
    pub can_pin_messages: Option<bool> => optional Kind::Bool,
    pub can_manage_topics: Option<bool> => optional Kind::Bool,
  }
}

impl ChatPermissions {
  pub fn read_only() -> Self {
    Self {
      can_send_messages: Some(false),
      can_send_audios: Some(false),
      can_send_documents: Some(false),
      can_send_photos: Some(false),
      can_send_videos: Some(false),
      can_send_video_notes: Some(false),
      can_send_voice_notes: Some(false),
      can_send_polls: Some(false),
      can_send_other_messages: Some(false),
      can_add_web_page_previews: Some(false),
      ..Self::default()
    }
  }
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct ChatAdministratorRights {
    pub is_anonymous: bool => required Kind::Bool,
    pub can_manage_chat: bool => required Kind::Bool,
    pub can_delete_messages: bool => required Kind::Bool,
    pub can_manage_video_chats: bool => required Kind::Bool,
    pub can_restrict_members: bool => required Kind::Bool,
    pub can_promote_members: bool => required Kind::Bool,
    pub can_change_info: bool => required Kind::Bool,
    pub can_invite_users: bool => required Kind::Bool,
    pub can_post_messages: Option<bool> => optional Kind::Bool,
    pub can_edit_messages: Option<bool> => optional Kind::Bool,
    pub can_pin_messages: Option<bool> => optional Kind::Bool,
    pub can_post_stories: Option<bool> => optional Kind::Bool,
    pub can_edit_stories: Option<bool> => optional Kind::Bool,
    pub can_delete_stories: Option<bool> => optional Kind::Bool,
    pub can_manage_topics: Option<bool> => optional Kind::Bool,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatInviteLink {
    pub invite_link: String => required Kind::String,
    pub creator: User => required Kind::Entity(User::shape),
    pub creates_join_request: bool => required Kind::Bool,
    pub is_primary: bool => required Kind::Bool,
    pub is_revoked: bool => required Kind::Bool,
    pub name: Option<String> => optional Kind::String,
    #[serde(default, with = "crate::codec::unix_time_option")]
    pub expire_date: Option<DateTime<Utc>> => optional Kind::Timestamp,
    pub member_limit: Option<i32> => optional Kind::Int32,
    pub pending_join_request_count: Option<i32> => optional Kind::Int32,
  }
}

schema! {
  /// A request to join a chat, sent to administrators.
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatJoinRequest {
    pub chat: Chat => required Kind::Entity(Chat::shape),
    pub from: User => required Kind::Entity(User::shape),
    /// Private chat with the requester, usable for five minutes.
    pub user_chat_id: i64 => required Kind::Integer,
    #[serde(with = "crate::codec::unix_time")]
    pub date: DateTime<Utc> => required Kind::Timestamp,
    pub bio: Option<String> => optional Kind::String,
    pub invite_link: Option<ChatInviteLink> => optional Kind::Entity(ChatInviteLink::shape),
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct UsersShared {
    pub request_id: i32 => required Kind::Int32,
    pub user_ids: Vec<i64> => required USER_IDS,
  }
}
