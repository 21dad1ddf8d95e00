// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  Chat, ForumTopicClosed, ForumTopicCreated, InlineKeyboardMarkup, PassportFile, Sticker,
  SuccessfulPayment, User, UsersShared,
};
use crate::{
  schema::{schema, Kind, Schema},
  union::{union_family, Union},
};
use chrono::{DateTime, Utc};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct MessageEntity {
    pub kind as "type": String => required Kind::String,
    pub offset: i32 => required Kind::Int32,
    pub length: i32 => required Kind::Int32,
    pub url: Option<String> => optional Kind::String,
    pub user: Option<User> => optional Kind::Entity(User::shape),
    pub language: Option<String> => optional Kind::String,
    pub custom_emoji_id: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct PhotoSize {
    pub file_id: String => required Kind::String,
    pub file_unique_id: String => required Kind::String,
    pub width: i32 => required Kind::Int32,
    pub height: i32 => required Kind::Int32,
    pub file_size: Option<i64> => optional Kind::Integer,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct MessageOriginUser {
    #[serde(with = "crate::codec::unix_time")]
    pub date: DateTime<Utc> => required Kind::Timestamp,
    pub sender_user: User => required Kind::Entity(User::shape),
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct MessageOriginHiddenUser {
    #[serde(with = "crate::codec::unix_time")]
    pub date: DateTime<Utc> => required Kind::Timestamp,
    pub sender_user_name: String => required Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct MessageOriginChat {
    #[serde(with = "crate::codec::unix_time")]
    pub date: DateTime<Utc> => required Kind::Timestamp,
    pub sender_chat: Chat => required Kind::Entity(Chat::shape),
    pub author_signature: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct MessageOriginChannel {
    #[serde(with = "crate::codec::unix_time")]
    pub date: DateTime<Utc> => required Kind::Timestamp,
    pub chat: Chat => required Kind::Entity(Chat::shape),
    pub message_id: i32 => required Kind::Int32,
    pub author_signature: Option<String> => optional Kind::String,
  }
}

union_family! {
  /// Where a forwarded message originally came from.
  #[derive(Debug, Clone, PartialEq)]
  pub enum MessageOrigin in "MessageOrigin", discriminator "type", base ["date"] {
    "user" => User(MessageOriginUser),
    "hidden_user" => HiddenUser(MessageOriginHiddenUser),
    "chat" => Chat(MessageOriginChat),
    "channel" => Channel(MessageOriginChannel),
  }
  unknown => Unknown;
}

impl MessageOrigin {
  /// Date the original message was sent, if the origin kind carries a
  /// readable one.
  pub fn date(&self) -> Option<DateTime<Utc>> {
    match self {
      Self::User(origin) => Some(origin.date),
      Self::HiddenUser(origin) => Some(origin.date),
      Self::Chat(origin) => Some(origin.date),
      Self::Channel(origin) => Some(origin.date),
      Self::Unknown(raw) => raw
        .fields
        .get("date")
        .and_then(|date| date.as_i64())
        .and_then(crate::codec::decode_timestamp),
    }
  }
}

const PHOTO_SIZES: Kind = Kind::Entities(PhotoSize::shape);
const MESSAGE_ENTITIES: Kind = Kind::Entities(MessageEntity::shape);
const USERS: Kind = Kind::Entities(User::shape);
const PASSPORT_FILES: Kind = Kind::Entities(PassportFile::shape);

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct Message {
    pub message_id: i32 => required Kind::Int32,
    pub message_thread_id: Option<i32> => optional Kind::Int32,
    pub from: Option<User> => optional Kind::Entity(User::shape),
    pub sender_chat: Option<Chat> => optional Kind::Entity(Chat::shape),
    #[serde(with = "crate::codec::unix_time")]
    pub date: DateTime<Utc> => required Kind::Timestamp,
    pub chat: Chat => required Kind::Entity(Chat::shape),
    pub forward_origin: Option<MessageOrigin> => optional Kind::Union(MessageOrigin::family),
    pub is_topic_message: Option<bool> => optional Kind::Bool,
    pub reply_to_message: Option<Box<Message>> => optional Kind::Entity(Message::shape),
    #[serde(default, with = "crate::codec::unix_time_option")]
    pub edit_date: Option<DateTime<Utc>> => optional Kind::Timestamp,
    pub media_group_id: Option<String> => optional Kind::String,
    pub text: Option<String> => optional Kind::String,
    pub entities: Option<Vec<MessageEntity>> => optional MESSAGE_ENTITIES,
    pub caption: Option<String> => optional Kind::String,
    pub caption_entities: Option<Vec<MessageEntity>> => optional MESSAGE_ENTITIES,
    pub photo: Option<Vec<PhotoSize>> => optional PHOTO_SIZES,
    pub sticker: Option<Sticker> => optional Kind::Entity(Sticker::shape),
    pub new_chat_members: Option<Vec<User>> => optional USERS,
    pub left_chat_member: Option<User> => optional Kind::Entity(User::shape),
    pub users_shared: Option<UsersShared> => optional Kind::Entity(UsersShared::shape),
    pub forum_topic_created: Option<ForumTopicCreated> => optional Kind::Entity(ForumTopicCreated::shape),
    pub forum_topic_closed: Option<ForumTopicClosed> => optional Kind::Entity(ForumTopicClosed::shape),
    pub successful_payment: Option<SuccessfulPayment> => optional Kind::Entity(SuccessfulPayment::shape),
    pub passport_files: Option<Vec<PassportFile>> => optional PASSPORT_FILES,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
  }
}

impl Message {
  pub fn new(message_id: i32, date: DateTime<Utc>, chat: Chat) -> Self {
    Self {
      message_id,
      message_thread_id: None,
      from: None,
      sender_chat: None,
      date,
      chat,
      forward_origin: None,
      is_topic_message: None,
      reply_to_message: None,
      edit_date: None,
      media_group_id: None,
      text: None,
      entities: None,
      caption: None,
      caption_entities: None,
      photo: None,
      sticker: None,
      new_chat_members: None,
      left_chat_member: None,
      users_shared: None,
      forum_topic_created: None,
      forum_topic_closed: None,
      successful_payment: None,
      passport_files: None,
      reply_markup: None,
    }
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn is_forwarded(&self) -> bool {
    self.forward_origin.is_some()
  }
}
