// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  attachment::InputFile,
  encoder::Request,
  schema::{schema, Kind, Schema},
  types::{ChatId, InlineKeyboardMarkup, InputMedia, Message, MessageEntity, ParseMode, User},
  union::Union,
};

const MESSAGE_ENTITIES: Kind = Kind::Entities(MessageEntity::shape);

schema! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct GetMe {}
}

impl Request for GetMe {
  const METHOD: &'static str = "getMe";
  type Response = User;
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct SendMessage {
    pub chat_id: ChatId => required Kind::ChatId,
    pub message_thread_id: Option<i32> => optional Kind::Int32,
    pub text: String => required Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub entities: Option<Vec<MessageEntity>> => optional MESSAGE_ENTITIES,
    pub disable_web_page_preview: Option<bool> => optional Kind::Bool,
    pub disable_notification: Option<bool> => optional Kind::Bool,
    pub protect_content: Option<bool> => optional Kind::Bool,
    pub reply_to_message_id: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
  }
}

impl SendMessage {
  pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
    Self {
      chat_id: chat_id.into(),
      message_thread_id: None,
      text: text.into(),
      parse_mode: None,
      entities: None,
      disable_web_page_preview: None,
      disable_notification: None,
      protect_content: None,
      reply_to_message_id: None,
      reply_markup: None,
    }
  }

  pub fn thread(mut self, message_thread_id: i32) -> Self {
    self.message_thread_id = Some(message_thread_id);
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn disable_preview(mut self) -> Self {
    self.disable_web_page_preview = Some(true);
    self
  }

  pub fn silent(mut self) -> Self {
    self.disable_notification = Some(true);
    self
  }

  pub fn reply_to(mut self, message_id: i32) -> Self {
    self.reply_to_message_id = Some(message_id);
    self
  }

  pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
    self.reply_markup = Some(markup);
    self
  }
}

impl Request for SendMessage {
  const METHOD: &'static str = "sendMessage";
  type Response = Message;
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct SendSticker {
    pub chat_id: ChatId => required Kind::ChatId,
    pub message_thread_id: Option<i32> => optional Kind::Int32,
    pub sticker: InputFile => required Kind::Attachment,
    pub emoji: Option<String> => optional Kind::String,
    pub disable_notification: Option<bool> => optional Kind::Bool,
    pub reply_to_message_id: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
  }
}

impl SendSticker {
  pub fn new(chat_id: impl Into<ChatId>, sticker: impl Into<InputFile>) -> Self {
    Self {
      chat_id: chat_id.into(),
      message_thread_id: None,
      sticker: sticker.into(),
      emoji: None,
      disable_notification: None,
      reply_to_message_id: None,
      reply_markup: None,
    }
  }

  pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
    self.emoji = Some(emoji.into());
    self
  }

  pub fn silent(mut self) -> Self {
    self.disable_notification = Some(true);
    self
  }
}

impl Request for SendSticker {
  const METHOD: &'static str = "sendSticker";
  type Response = Message;

  fn attachments(&mut self) -> Vec<&mut InputFile> {
    vec![&mut self.sticker]
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct SendAnimation {
    pub chat_id: ChatId => required Kind::ChatId,
    pub message_thread_id: Option<i32> => optional Kind::Int32,
    pub animation: InputFile => required Kind::Attachment,
    pub duration: Option<i32> => optional Kind::Int32,
    pub width: Option<i32> => optional Kind::Int32,
    pub height: Option<i32> => optional Kind::Int32,
    pub thumbnail: Option<InputFile> => optional Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub caption_entities: Option<Vec<MessageEntity>> => optional MESSAGE_ENTITIES,
    pub has_spoiler: Option<bool> => optional Kind::Bool,
    pub disable_notification: Option<bool> => optional Kind::Bool,
    pub protect_content: Option<bool> => optional Kind::Bool,
    pub reply_to_message_id: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
  }
}

impl SendAnimation {
  pub fn new(chat_id: impl Into<ChatId>, animation: impl Into<InputFile>) -> Self {
    Self {
      chat_id: chat_id.into(),
      message_thread_id: None,
      animation: animation.into(),
      duration: None,
      width: None,
      height: None,
      thumbnail: None,
      caption: None,
      parse_mode: None,
      caption_entities: None,
      has_spoiler: None,
      disable_notification: None,
      protect_content: None,
      reply_to_message_id: None,
      reply_markup: None,
    }
  }

  pub fn thumbnail(mut self, thumbnail: impl Into<InputFile>) -> Self {
    self.thumbnail = Some(thumbnail.into());
    self
  }

  pub fn caption(mut self, caption: impl Into<String>) -> Self {
    self.caption = Some(caption.into());
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn spoiler(mut self) -> Self {
    self.has_spoiler = Some(true);
    self
  }
}

impl Request for SendAnimation {
  const METHOD: &'static str = "sendAnimation";
  type Response = Message;

  fn attachments(&mut self) -> Vec<&mut InputFile> {
    std::iter::once(&mut self.animation)
      .chain(self.thumbnail.as_mut())
      .collect()
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct SendDocument {
    pub chat_id: ChatId => required Kind::ChatId,
    pub message_thread_id: Option<i32> => optional Kind::Int32,
    pub document: InputFile => required Kind::Attachment,
    pub thumbnail: Option<InputFile> => optional Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub disable_content_type_detection: Option<bool> => optional Kind::Bool,
    pub disable_notification: Option<bool> => optional Kind::Bool,
    pub reply_to_message_id: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
  }
}

impl SendDocument {
  pub fn new(chat_id: impl Into<ChatId>, document: impl Into<InputFile>) -> Self {
    Self {
      chat_id: chat_id.into(),
      message_thread_id: None,
      document: document.into(),
      thumbnail: None,
      caption: None,
      parse_mode: None,
      disable_content_type_detection: None,
      disable_notification: None,
      reply_to_message_id: None,
      reply_markup: None,
    }
  }

  pub fn thumbnail(mut self, thumbnail: impl Into<InputFile>) -> Self {
    self.thumbnail = Some(thumbnail.into());
    self
  }

  pub fn caption(mut self, caption: impl Into<String>) -> Self {
    self.caption = Some(caption.into());
    self
  }

  pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
    self.reply_markup = Some(markup);
    self
  }
}

impl Request for SendDocument {
  const METHOD: &'static str = "sendDocument";
  type Response = Message;

  fn attachments(&mut self) -> Vec<&mut InputFile> {
    std::iter::once(&mut self.document)
      .chain(self.thumbnail.as_mut())
      .collect()
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct SendMediaGroup {
    pub chat_id: ChatId => required Kind::ChatId,
    pub message_thread_id: Option<i32> => optional Kind::Int32,
    pub media: Vec<InputMedia> => required Kind::Unions(InputMedia::family),
    pub disable_notification: Option<bool> => optional Kind::Bool,
    pub protect_content: Option<bool> => optional Kind::Bool,
    pub reply_to_message_id: Option<i32> => optional Kind::Int32,
  }
}

impl SendMediaGroup {
  pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
    Self {
      chat_id: chat_id.into(),
      message_thread_id: None,
      media,
      disable_notification: None,
      protect_content: None,
      reply_to_message_id: None,
    }
  }

  pub fn silent(mut self) -> Self {
    self.disable_notification = Some(true);
    self
  }
}

impl Request for SendMediaGroup {
  const METHOD: &'static str = "sendMediaGroup";
  type Response = Vec<Message>;

  fn attachments(&mut self) -> Vec<&mut InputFile> {
    self
      .media
      .iter_mut()
      .flat_map(InputMedia::attachments)
      .collect()
  }
}
