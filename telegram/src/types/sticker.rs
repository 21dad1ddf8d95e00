// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::PhotoSize;
use crate::{
  attachment::InputFile,
  schema::{schema, Kind},
};

const STRINGS: Kind = Kind::Array(&Kind::String);

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct Sticker {
    pub file_id: String => required Kind::String,
    pub file_unique_id: String => required Kind::String,
    /// `regular`, `mask` or `custom_emoji`.
    pub kind as "type": String => required Kind::String,
    pub width: i32 => required Kind::Int32,
    pub height: i32 => required Kind::Int32,
    pub is_animated: bool => required Kind::Bool,
    pub is_video: bool => required Kind::Bool,
    pub thumbnail: Option<PhotoSize> => optional Kind::Entity(PhotoSize::shape),
    pub emoji: Option<String> => optional Kind::String,
    pub set_name: Option<String> => optional Kind::String,
    pub custom_emoji_id: Option<String> => optional Kind::String,
    pub file_size: Option<i64> => optional Kind::Integer,
  }
}

schema! {
  /// A sticker to add to a set.
  #[derive(Debug, PartialEq)]
  pub struct InputSticker {
    pub sticker: InputFile => required Kind::Attachment,
    pub emoji_list: Vec<String> => required STRINGS,
    pub keywords: Option<Vec<String>> => optional STRINGS,
  }
}

impl InputSticker {
  pub fn new(sticker: impl Into<InputFile>, emoji_list: Vec<String>) -> Self {
    Self {
      sticker: sticker.into(),
      emoji_list,
      keywords: None,
    }
  }

  pub fn keywords(mut self, keywords: Vec<String>) -> Self {
    self.keywords = Some(keywords);
    self
  }

  pub(crate) fn attachments(&mut self) -> Vec<&mut InputFile> {
    vec![&mut self.sticker]
  }
}
