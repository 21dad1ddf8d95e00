// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Inline query results.
//!
//! Cached results share their `type` with the URL-based ones and are built
//! from the same struct. Its source is either a URL or a file id, written as
//! `*_url` or `*_file_id`, never both.

use super::{InlineKeyboardMarkup, ParseMode};
use crate::schema::{encode_entity, schema, Kind};
use crate::union::union_family;
use serde::{Deserialize, Serialize, Serializer};

/// Declares a media source enum flattened into a result as one of two keys.
macro_rules! media_source {
  ($(#[$meta:meta])* $name:ident, $url:literal, $file_id:literal) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum $name {
      #[serde(rename = $url)]
      Url(String),
      #[serde(rename = $file_id)]
      FileId(String),
    }

    impl $name {
      pub const KEYS: &'static [&'static str] = &[$url, $file_id];

      pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
      }

      pub fn file_id(file_id: impl Into<String>) -> Self {
        Self::FileId(file_id.into())
      }

      pub fn is_cached(&self) -> bool {
        matches!(self, Self::FileId(_))
      }
    }
  };
}

media_source!(AudioSource, "audio_url", "audio_file_id");
media_source!(DocumentSource, "document_url", "document_file_id");
media_source!(GifSource, "gif_url", "gif_file_id");
media_source!(Mpeg4GifSource, "mpeg4_url", "mpeg4_file_id");
media_source!(PhotoSource, "photo_url", "photo_file_id");
media_source!(VideoSource, "video_url", "video_file_id");
media_source!(VoiceSource, "voice_url", "voice_file_id");

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InputTextMessageContent {
    pub message_text: String => required Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InputVenueMessageContent {
    pub latitude: f64 => required Kind::Float,
    pub longitude: f64 => required Kind::Float,
    pub title: String => required Kind::String,
    pub address: String => required Kind::String,
    pub foursquare_id: Option<String> => optional Kind::String,
    pub foursquare_type: Option<String> => optional Kind::String,
    pub google_place_id: Option<String> => optional Kind::String,
    pub google_place_type: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InputContactMessageContent {
    pub phone_number: String => required Kind::String,
    pub first_name: String => required Kind::String,
    pub last_name: Option<String> => optional Kind::String,
    pub vcard: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InputLocationMessageContent {
    pub latitude: f64 => required Kind::Float,
    pub longitude: f64 => required Kind::Float,
    pub horizontal_accuracy: Option<f64> => optional Kind::Float,
    pub live_period: Option<i32> => optional Kind::Int32,
  }
}

/// Content of the message sent when a result is chosen.
///
/// The wire form carries no tag; variants are told apart by their required
/// fields, venues before plain locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
  Text(InputTextMessageContent),
  Venue(InputVenueMessageContent),
  Contact(InputContactMessageContent),
  Location(InputLocationMessageContent),
}

impl Serialize for InputMessageContent {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let value = match self {
      Self::Text(content) => encode_entity(content),
      Self::Venue(content) => encode_entity(content),
      Self::Contact(content) => encode_entity(content),
      Self::Location(content) => encode_entity(content),
    }
    .map_err(<S::Error as serde::ser::Error>::custom)?;
    value.serialize(serializer)
  }
}

impl InputMessageContent {
  pub fn text(message_text: impl Into<String>) -> Self {
    Self::Text(InputTextMessageContent {
      message_text: message_text.into(),
      parse_mode: None,
    })
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultArticle {
    pub id: String => required Kind::String,
    pub title: String => required Kind::String,
    pub input_message_content: InputMessageContent => required Kind::Object,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub url: Option<String> => optional Kind::String,
    pub hide_url: Option<bool> => optional Kind::Bool,
    pub description: Option<String> => optional Kind::String,
    pub thumbnail_url: Option<String> => optional Kind::String,
    pub thumbnail_width: Option<i32> => optional Kind::Int32,
    pub thumbnail_height: Option<i32> => optional Kind::Int32,
  }
}

impl InlineQueryResultArticle {
  pub fn new(
    id: impl Into<String>,
    title: impl Into<String>,
    input_message_content: InputMessageContent,
  ) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      input_message_content,
      reply_markup: None,
      url: None,
      hide_url: None,
      description: None,
      thumbnail_url: None,
      thumbnail_width: None,
      thumbnail_height: None,
    }
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultAudio {
    pub id: String => required Kind::String,
    #[serde(flatten)]
    pub source: AudioSource => required Kind::OneOf(AudioSource::KEYS),
    pub title: Option<String> => optional Kind::String,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub performer: Option<String> => optional Kind::String,
    pub audio_duration: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

impl InlineQueryResultAudio {
  pub fn new(id: impl Into<String>, source: AudioSource) -> Self {
    Self {
      id: id.into(),
      source,
      title: None,
      caption: None,
      parse_mode: None,
      performer: None,
      audio_duration: None,
      reply_markup: None,
      input_message_content: None,
    }
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultContact {
    pub id: String => required Kind::String,
    pub phone_number: String => required Kind::String,
    pub first_name: String => required Kind::String,
    pub last_name: Option<String> => optional Kind::String,
    pub vcard: Option<String> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
    pub thumbnail_url: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultDocument {
    pub id: String => required Kind::String,
    pub title: String => required Kind::String,
    #[serde(flatten)]
    pub source: DocumentSource => required Kind::OneOf(DocumentSource::KEYS),
    pub mime_type: Option<String> => optional Kind::String,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub description: Option<String> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
    pub thumbnail_url: Option<String> => optional Kind::String,
  }
}

impl InlineQueryResultDocument {
  pub fn new(
    id: impl Into<String>,
    title: impl Into<String>,
    source: DocumentSource,
  ) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      source,
      mime_type: None,
      caption: None,
      parse_mode: None,
      description: None,
      reply_markup: None,
      input_message_content: None,
      thumbnail_url: None,
    }
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultGame {
    pub id: String => required Kind::String,
    pub game_short_name: String => required Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultGif {
    pub id: String => required Kind::String,
    #[serde(flatten)]
    pub source: GifSource => required Kind::OneOf(GifSource::KEYS),
    pub gif_width: Option<i32> => optional Kind::Int32,
    pub gif_height: Option<i32> => optional Kind::Int32,
    pub gif_duration: Option<i32> => optional Kind::Int32,
    pub thumbnail_url: Option<String> => optional Kind::String,
    pub title: Option<String> => optional Kind::String,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

impl InlineQueryResultGif {
  pub fn new(id: impl Into<String>, source: GifSource) -> Self {
    Self {
      id: id.into(),
      source,
      gif_width: None,
      gif_height: None,
      gif_duration: None,
      thumbnail_url: None,
      title: None,
      caption: None,
      parse_mode: None,
      reply_markup: None,
      input_message_content: None,
    }
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultLocation {
    pub id: String => required Kind::String,
    pub latitude: f64 => required Kind::Float,
    pub longitude: f64 => required Kind::Float,
    pub title: String => required Kind::String,
    pub horizontal_accuracy: Option<f64> => optional Kind::Float,
    pub live_period: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
    pub thumbnail_url: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultMpeg4Gif {
    pub id: String => required Kind::String,
    #[serde(flatten)]
    pub source: Mpeg4GifSource => required Kind::OneOf(Mpeg4GifSource::KEYS),
    pub mpeg4_width: Option<i32> => optional Kind::Int32,
    pub mpeg4_height: Option<i32> => optional Kind::Int32,
    pub mpeg4_duration: Option<i32> => optional Kind::Int32,
    pub thumbnail_url: Option<String> => optional Kind::String,
    pub title: Option<String> => optional Kind::String,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

impl InlineQueryResultMpeg4Gif {
  pub fn new(id: impl Into<String>, source: Mpeg4GifSource) -> Self {
    Self {
      id: id.into(),
      source,
      mpeg4_width: None,
      mpeg4_height: None,
      mpeg4_duration: None,
      thumbnail_url: None,
      title: None,
      caption: None,
      parse_mode: None,
      reply_markup: None,
      input_message_content: None,
    }
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultPhoto {
    pub id: String => required Kind::String,
    #[serde(flatten)]
    pub source: PhotoSource => required Kind::OneOf(PhotoSource::KEYS),
    pub thumbnail_url: Option<String> => optional Kind::String,
    pub photo_width: Option<i32> => optional Kind::Int32,
    pub photo_height: Option<i32> => optional Kind::Int32,
    pub title: Option<String> => optional Kind::String,
    pub description: Option<String> => optional Kind::String,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

impl InlineQueryResultPhoto {
  pub fn new(id: impl Into<String>, source: PhotoSource) -> Self {
    Self {
      id: id.into(),
      source,
      thumbnail_url: None,
      photo_width: None,
      photo_height: None,
      title: None,
      description: None,
      caption: None,
      parse_mode: None,
      reply_markup: None,
      input_message_content: None,
    }
  }
}

schema! {
  /// Always cached: stickers can only be sent by file id.
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultSticker {
    pub id: String => required Kind::String,
    pub sticker_file_id: String => required Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultVenue {
    pub id: String => required Kind::String,
    pub latitude: f64 => required Kind::Float,
    pub longitude: f64 => required Kind::Float,
    pub title: String => required Kind::String,
    pub address: String => required Kind::String,
    pub foursquare_id: Option<String> => optional Kind::String,
    pub google_place_id: Option<String> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
    pub thumbnail_url: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultVideo {
    pub id: String => required Kind::String,
    pub title: String => required Kind::String,
    #[serde(flatten)]
    pub source: VideoSource => required Kind::OneOf(VideoSource::KEYS),
    pub mime_type: Option<String> => optional Kind::String,
    pub thumbnail_url: Option<String> => optional Kind::String,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub video_width: Option<i32> => optional Kind::Int32,
    pub video_height: Option<i32> => optional Kind::Int32,
    pub video_duration: Option<i32> => optional Kind::Int32,
    pub description: Option<String> => optional Kind::String,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

impl InlineQueryResultVideo {
  pub fn new(id: impl Into<String>, title: impl Into<String>, source: VideoSource) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      source,
      mime_type: None,
      thumbnail_url: None,
      caption: None,
      parse_mode: None,
      video_width: None,
      video_height: None,
      video_duration: None,
      description: None,
      reply_markup: None,
      input_message_content: None,
    }
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct InlineQueryResultVoice {
    pub id: String => required Kind::String,
    pub title: String => required Kind::String,
    #[serde(flatten)]
    pub source: VoiceSource => required Kind::OneOf(VoiceSource::KEYS),
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub voice_duration: Option<i32> => optional Kind::Int32,
    pub reply_markup: Option<InlineKeyboardMarkup> => optional Kind::Entity(InlineKeyboardMarkup::shape),
    pub input_message_content: Option<InputMessageContent> => optional Kind::Object,
  }
}

impl InlineQueryResultVoice {
  pub fn new(id: impl Into<String>, title: impl Into<String>, source: VoiceSource) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      source,
      caption: None,
      parse_mode: None,
      voice_duration: None,
      reply_markup: None,
      input_message_content: None,
    }
  }
}

union_family! {
  #[derive(Debug, Clone, PartialEq)]
  pub enum InlineQueryResult in "InlineQueryResult", discriminator "type", base ["id"] {
    "article" => Article(InlineQueryResultArticle),
    "audio" => Audio(InlineQueryResultAudio),
    "contact" => Contact(InlineQueryResultContact),
    "document" => Document(InlineQueryResultDocument),
    "game" => Game(InlineQueryResultGame),
    "gif" => Gif(InlineQueryResultGif),
    "location" => Location(InlineQueryResultLocation),
    "mpeg4_gif" => Mpeg4Gif(InlineQueryResultMpeg4Gif),
    "photo" => Photo(InlineQueryResultPhoto),
    "sticker" => Sticker(InlineQueryResultSticker),
    "venue" => Venue(InlineQueryResultVenue),
    "video" => Video(InlineQueryResultVideo),
    "voice" => Voice(InlineQueryResultVoice),
  }
}

macro_rules! into_result {
  ($($shape:ident => $variant:ident),* $(,)?) => {
    $(
      impl From<$shape> for InlineQueryResult {
        fn from(result: $shape) -> Self {
          Self::$variant(result)
        }
      }
    )*
  };
}

into_result! {
  InlineQueryResultArticle => Article,
  InlineQueryResultAudio => Audio,
  InlineQueryResultContact => Contact,
  InlineQueryResultDocument => Document,
  InlineQueryResultGame => Game,
  InlineQueryResultGif => Gif,
  InlineQueryResultLocation => Location,
  InlineQueryResultMpeg4Gif => Mpeg4Gif,
  InlineQueryResultPhoto => Photo,
  InlineQueryResultSticker => Sticker,
  InlineQueryResultVenue => Venue,
  InlineQueryResultVideo => Video,
  InlineQueryResultVoice => Voice,
}

impl InlineQueryResult {
  pub fn cached_sticker(id: impl Into<String>, sticker_file_id: impl Into<String>) -> Self {
    Self::Sticker(InlineQueryResultSticker {
      id: id.into(),
      sticker_file_id: sticker_file_id.into(),
      reply_markup: None,
      input_message_content: None,
    })
  }

  pub fn id(&self) -> &str {
    match self {
      Self::Article(result) => &result.id,
      Self::Audio(result) => &result.id,
      Self::Contact(result) => &result.id,
      Self::Document(result) => &result.id,
      Self::Game(result) => &result.id,
      Self::Gif(result) => &result.id,
      Self::Location(result) => &result.id,
      Self::Mpeg4Gif(result) => &result.id,
      Self::Photo(result) => &result.id,
      Self::Sticker(result) => &result.id,
      Self::Venue(result) => &result.id,
      Self::Video(result) => &result.id,
      Self::Voice(result) => &result.id,
    }
  }
}
