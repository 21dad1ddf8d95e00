// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::ParseMode;
use crate::{
  attachment::InputFile,
  schema::{schema, Kind},
  union::union_family,
};

schema! {
  #[derive(Debug, PartialEq)]
  pub struct InputMediaPhoto {
    pub media: InputFile => required Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub has_spoiler: Option<bool> => optional Kind::Bool,
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct InputMediaVideo {
    pub media: InputFile => required Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub thumbnail: Option<InputFile> => optional Kind::Attachment,
    pub width: Option<i32> => optional Kind::Int32,
    pub height: Option<i32> => optional Kind::Int32,
    pub duration: Option<i32> => optional Kind::Int32,
    pub supports_streaming: Option<bool> => optional Kind::Bool,
    pub has_spoiler: Option<bool> => optional Kind::Bool,
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct InputMediaAnimation {
    pub media: InputFile => required Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub thumbnail: Option<InputFile> => optional Kind::Attachment,
    pub width: Option<i32> => optional Kind::Int32,
    pub height: Option<i32> => optional Kind::Int32,
    pub duration: Option<i32> => optional Kind::Int32,
    pub has_spoiler: Option<bool> => optional Kind::Bool,
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct InputMediaAudio {
    pub media: InputFile => required Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub thumbnail: Option<InputFile> => optional Kind::Attachment,
    pub duration: Option<i32> => optional Kind::Int32,
    pub performer: Option<String> => optional Kind::String,
    pub title: Option<String> => optional Kind::String,
  }
}

schema! {
  #[derive(Debug, PartialEq)]
  pub struct InputMediaDocument {
    pub media: InputFile => required Kind::Attachment,
    pub caption: Option<String> => optional Kind::String,
    pub parse_mode: Option<ParseMode> => optional Kind::String,
    pub thumbnail: Option<InputFile> => optional Kind::Attachment,
    pub disable_content_type_detection: Option<bool> => optional Kind::Bool,
  }
}

union_family! {
  /// An item of a media group.
  #[derive(Debug, PartialEq)]
  pub enum InputMedia in "InputMedia", discriminator "type", base ["media", "caption", "parse_mode"] {
    "photo" => Photo(InputMediaPhoto),
    "video" => Video(InputMediaVideo),
    "animation" => Animation(InputMediaAnimation),
    "audio" => Audio(InputMediaAudio),
    "document" => Document(InputMediaDocument),
  }
}

impl InputMedia {
  pub fn photo(media: impl Into<InputFile>) -> Self {
    Self::Photo(InputMediaPhoto {
      media: media.into(),
      caption: None,
      parse_mode: None,
      has_spoiler: None,
    })
  }

  pub fn document(media: impl Into<InputFile>) -> Self {
    Self::Document(InputMediaDocument {
      media: media.into(),
      caption: None,
      parse_mode: None,
      thumbnail: None,
      disable_content_type_detection: None,
    })
  }

  pub fn caption(mut self, text: impl Into<String>) -> Self {
    let caption = match &mut self {
      Self::Photo(media) => &mut media.caption,
      Self::Video(media) => &mut media.caption,
      Self::Animation(media) => &mut media.caption,
      Self::Audio(media) => &mut media.caption,
      Self::Document(media) => &mut media.caption,
    };
    *caption = Some(text.into());
    self
  }

  pub fn media(&self) -> &InputFile {
    match self {
      Self::Photo(media) => &media.media,
      Self::Video(media) => &media.media,
      Self::Animation(media) => &media.media,
      Self::Audio(media) => &media.media,
      Self::Document(media) => &media.media,
    }
  }

  /// The media file followed by the thumbnail, if any.
  pub(crate) fn attachments(&mut self) -> Vec<&mut InputFile> {
    let (media, thumbnail) = match self {
      Self::Photo(media) => (&mut media.media, None),
      Self::Video(media) => (&mut media.media, media.thumbnail.as_mut()),
      Self::Animation(media) => (&mut media.media, media.thumbnail.as_mut()),
      Self::Audio(media) => (&mut media.media, media.thumbnail.as_mut()),
      Self::Document(media) => (&mut media.media, media.thumbnail.as_mut()),
    };
    std::iter::once(media).chain(thumbnail).collect()
  }
}

impl From<InputMediaPhoto> for InputMedia {
  fn from(media: InputMediaPhoto) -> Self {
    Self::Photo(media)
  }
}

impl From<InputMediaVideo> for InputMedia {
  fn from(media: InputMediaVideo) -> Self {
    Self::Video(media)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{attachment::InputStream, decoder::decode_value, union};
  use error::DecodeError;
  use serde_json::json;

  #[test]
  fn base_fields_lead_the_object() {
    let media = InputMedia::document(InputFile::id("BQAD")).caption("report");
    assert_eq!(
      serde_json::to_string(&media).unwrap(),
      r#"{"type":"document","media":"BQAD","caption":"report"}"#
    );
  }

  #[test]
  fn thumbnail_is_an_attachment() {
    let mut media = InputMedia::Video(InputMediaVideo {
      media: InputFile::id("BAAD"),
      caption: None,
      parse_mode: Some(ParseMode::Html),
      thumbnail: Some(InputStream::from_bytes("thumb", vec![1, 2]).into()),
      width: None,
      height: None,
      duration: Some(3),
      supports_streaming: None,
      has_spoiler: None,
    });
    assert_eq!(media.attachments().len(), 2);
    assert_eq!(
      union::encode(&media).unwrap(),
      json!({"type": "video", "media": "BAAD", "parse_mode": "HTML", "thumbnail": "attach://thumb", "duration": 3})
    );
  }

  #[test]
  fn unknown_media_kind_is_rejected() {
    let err = decode_value::<InputMedia>(json!({"type": "sticker", "media": "x"})).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownDiscriminator { family: "InputMedia", .. }));
  }
}
