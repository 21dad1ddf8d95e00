// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  attachment::InputFile,
  encoder::Request,
  schema::{schema, Kind},
  types::InputSticker,
};

const KEYWORDS: Kind = Kind::Array(&Kind::String);

schema! {
  /// Replaces the search keywords of a sticker created by the bot.
  #[derive(Debug, Clone, PartialEq)]
  pub struct SetStickerKeywords {
    /// File id of the sticker.
    pub sticker: String => required Kind::String,
    pub keywords: Option<Vec<String>> => optional KEYWORDS,
  }
}

impl SetStickerKeywords {
  pub fn new(sticker: impl Into<String>) -> Self {
    Self {
      sticker: sticker.into(),
      keywords: None,
    }
  }

  pub fn keywords<I, S>(mut self, keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.keywords = Some(keywords.into_iter().map(Into::into).collect());
    self
  }
}

impl Request for SetStickerKeywords {
  const METHOD: &'static str = "setStickerKeywords";
  type Response = bool;
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct AddStickerToSet {
    pub user_id: i64 => required Kind::Integer,
    pub name: String => required Kind::String,
    pub sticker: InputSticker => required Kind::Entity(InputSticker::shape),
  }
}

impl AddStickerToSet {
  pub fn new(user_id: i64, name: impl Into<String>, sticker: InputSticker) -> Self {
    Self {
      user_id,
      name: name.into(),
      sticker,
    }
  }
}

impl Request for AddStickerToSet {
  const METHOD: &'static str = "addStickerToSet";
  type Response = bool;

  fn attachments(&mut self) -> Vec<&mut InputFile> {
    self.sticker.attachments()
  }
}
