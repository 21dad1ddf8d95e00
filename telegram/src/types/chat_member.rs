// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::User;
use crate::{
  codec::BanUntil,
  schema::{schema, Kind},
  union::union_family,
};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatMemberOwner {
    pub user: User => required Kind::Entity(User::shape),
    pub is_anonymous: bool => required Kind::Bool,
    pub custom_title: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatMemberAdministrator {
    pub user: User => required Kind::Entity(User::shape),
    pub can_be_edited: bool => required Kind::Bool,
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
    pub custom_title: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatMemberMember {
    pub user: User => required Kind::Entity(User::shape),
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatMemberRestricted {
    pub user: User => required Kind::Entity(User::shape),
    pub is_member: bool => required Kind::Bool,
    pub can_change_info: bool => required Kind::Bool,
    pub can_invite_users: bool => required Kind::Bool,
    pub can_pin_messages: bool => required Kind::Bool,
    pub can_send_messages: bool => required Kind::Bool,
    pub can_send_audios: bool => required Kind::Bool,
    pub can_send_documents: bool => required Kind::Bool,
    pub can_send_photos: bool => required Kind::Bool,
    pub can_send_videos: bool => required Kind::Bool,
    pub can_send_video_notes: bool => required Kind::Bool,
    pub can_send_voice_notes: bool => required Kind::Bool,
    pub can_send_polls: bool => required Kind::Bool,
    pub can_send_other_messages: bool => required Kind::Bool,
    pub can_add_web_page_previews: bool => required Kind::Bool,
    /// `None` when the restriction has no end date on the wire (`0`).
    #[serde(default, with = "crate::codec::ban_until")]
    pub until_date: Option<BanUntil> => optional Kind::BanUntil,
    pub can_manage_topics: Option<bool> => optional Kind::Bool,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatMemberLeft {
    pub user: User => required Kind::Entity(User::shape),
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ChatMemberBanned {
    pub user: User => required Kind::Entity(User::shape),
    #[serde(default, with = "crate::codec::ban_until")]
    pub until_date: Option<BanUntil> => always Kind::BanUntil,
  }
}

union_family! {
  /// A chat member, by the `status` the API reports for it.
  #[derive(Debug, Clone, PartialEq)]
  pub enum ChatMember in "ChatMember", discriminator "status", base ["user"] {
    "creator" => Owner(ChatMemberOwner),
    "administrator" => Administrator(ChatMemberAdministrator),
    "member" => Member(ChatMemberMember),
    "restricted" => Restricted(ChatMemberRestricted),
    "left" => Left(ChatMemberLeft),
    "kicked" => Banned(ChatMemberBanned),
  }
  unknown => Unknown;
}

impl ChatMember {
  /// The member's user; `None` only for an unknown status without a
  /// decodable `user` object.
  pub fn user(&self) -> Option<User> {
    match self {
      Self::Owner(member) => Some(member.user.clone()),
      Self::Administrator(member) => Some(member.user.clone()),
      Self::Member(member) => Some(member.user.clone()),
      Self::Restricted(member) => Some(member.user.clone()),
      Self::Left(member) => Some(member.user.clone()),
      Self::Banned(member) => Some(member.user.clone()),
      Self::Unknown(raw) => raw
        .fields
        .get("user")
        .and_then(|user| serde_json::from_value(user.clone()).ok()),
    }
  }

  /// Whether the user currently belongs to the chat.
  pub fn is_member(&self) -> bool {
    match self {
      Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
      Self::Restricted(member) => member.is_member,
      Self::Left(_) | Self::Banned(_) | Self::Unknown(_) => false,
    }
  }
}
