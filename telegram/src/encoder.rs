// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Request encoder: one JSON document, or a multipart envelope when the
//! request uploads local streams.

use crate::{
  attachment::{InputFile, InputStream},
  schema::{encode_entity, Schema, Wire},
};
use error::EncodeError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Form-field name of the JSON half of a multipart request.
pub const PAYLOAD_PART: &str = "payload";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// An API method call.
pub trait Request: Schema + Serialize {
  const METHOD: &'static str;

  type Response: Wire + DeserializeOwned;

  /// Every attachment reference the request carries, nested ones included.
  fn attachments(&mut self) -> Vec<&mut InputFile> {
    Vec::new()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
  pub name: String,
  pub file_name: Option<String>,
  pub content_type: String,
  pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multipart {
  pub parts: Vec<FormPart>,
}

impl Multipart {
  pub fn part(&self, name: &str) -> Option<&FormPart> {
    self.parts.iter().find(|part| part.name == name)
  }

  pub fn payload(&self) -> Option<&FormPart> {
    self.part(PAYLOAD_PART)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
  Json(Vec<u8>),
  Multipart(Multipart),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
  pub method: &'static str,
  pub body: Body,
}

impl EncodedRequest {
  pub fn content_type(&self) -> &'static str {
    match self.body {
      Body::Json(_) => JSON_CONTENT_TYPE,
      Body::Multipart(_) => MULTIPART_CONTENT_TYPE,
    }
  }

  pub fn is_multipart(&self) -> bool {
    matches!(self.body, Body::Multipart(_))
  }

  /// The JSON document: the whole body, or the payload part.
  pub fn json(&self) -> Result<Value, serde_json::Error> {
    let bytes = match &self.body {
      Body::Json(bytes) => bytes.as_slice(),
      Body::Multipart(multipart) => multipart
        .payload()
        .map(|part| part.data.as_slice())
        .unwrap_or(b"null"),
    };
    serde_json::from_slice(bytes)
  }
}

/// Reads every stream, or none: on failure the streams read so far get
/// their content back.
fn drain_all(streams: &mut [&mut InputStream]) -> Result<Vec<Vec<u8>>, EncodeError> {
  let mut contents = Vec::with_capacity(streams.len());
  for index in 0..streams.len() {
    match streams[index].drain() {
      Ok(data) => contents.push(data),
      Err(err) => {
        for (stream, data) in streams.iter_mut().zip(contents) {
          stream.restore(data);
        }
        return Err(err);
      }
    }
  }
  Ok(contents)
}

/// Encodes `request`, draining every local stream it carries.
///
/// On any error every stream is left as it was: nothing is drained unless
/// the payload serializes and every stream passes validation, and a failed
/// read puts back what was already read.
pub fn encode_request<R: Request>(request: &mut R) -> Result<EncodedRequest, EncodeError> {
  let payload = serde_json::to_vec(&encode_entity(&*request)?)?;

  let mut names = HashSet::from([PAYLOAD_PART.to_owned()]);
  let mut streams = Vec::new();
  for file in request.attachments() {
    let Some(stream) = file.as_stream_mut() else {
      continue;
    };
    if !names.insert(stream.name().to_owned()) {
      return Err(EncodeError::DuplicatePartName(stream.name().to_owned()));
    }
    if stream.is_consumed() {
      return Err(EncodeError::StreamAlreadyConsumed(stream.name().to_owned()));
    }
    streams.push(stream);
  }

  if streams.is_empty() {
    debug!(method = R::METHOD, "encoded as JSON");
    return Ok(EncodedRequest {
      method: R::METHOD,
      body: Body::Json(payload),
    });
  }

  let mut parts = Vec::with_capacity(streams.len() + 1);
  parts.push(FormPart {
    name: PAYLOAD_PART.to_owned(),
    file_name: None,
    content_type: JSON_CONTENT_TYPE.to_owned(),
    data: payload,
  });
  let contents = drain_all(&mut streams)?;
  for (stream, data) in streams.iter().zip(contents) {
    parts.push(FormPart {
      name: stream.name().to_owned(),
      file_name: Some(stream.resolved_file_name().to_owned()),
      content_type: stream.resolved_content_type().to_owned(),
      data,
    });
  }

  debug!(method = R::METHOD, parts = parts.len(), "encoded as multipart");
  Ok(EncodedRequest {
    method: R::METHOD,
    body: Body::Multipart(Multipart { parts }),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{schema, Kind};
  use serde_json::json;
  use std::io::{self, Read};

  schema! {
    #[derive(Debug)]
    struct UploadAvatar {
      user_id: i64 => required Kind::Integer,
      avatar: InputFile => required Kind::Attachment,
      note: Option<String> => optional Kind::String,
    }
  }

  impl Request for UploadAvatar {
    const METHOD: &'static str = "uploadAvatar";
    type Response = bool;

    fn attachments(&mut self) -> Vec<&mut InputFile> {
      vec![&mut self.avatar]
    }
  }

  #[test]
  fn file_id_stays_json() {
    let mut request = UploadAvatar {
      user_id: 1,
      avatar: InputFile::id("AgAD"),
      note: None,
    };
    let encoded = encode_request(&mut request).unwrap();
    assert_eq!(encoded.method, "uploadAvatar");
    assert_eq!(encoded.content_type(), "application/json");
    assert_eq!(
      encoded.body,
      Body::Json(br#"{"user_id":1,"avatar":"AgAD"}"#.to_vec())
    );
  }

  #[test]
  fn stream_goes_multipart() {
    let mut request = UploadAvatar {
      user_id: 1,
      avatar: InputStream::from_bytes("avatar", b"\x89PNG".to_vec())
        .file_name("me.png")
        .into(),
      note: Some("hi".into()),
    };
    let encoded = encode_request(&mut request).unwrap();
    assert!(encoded.is_multipart());
    assert_eq!(
      encoded.json().unwrap(),
      json!({"user_id": 1, "avatar": "attach://avatar", "note": "hi"})
    );

    let Body::Multipart(multipart) = &encoded.body else {
      panic!("expected multipart");
    };
    let part = multipart.part("avatar").unwrap();
    assert_eq!(part.data, b"\x89PNG");
    assert_eq!(part.content_type, "image/png");
    assert_eq!(part.file_name.as_deref(), Some("me.png"));

    let err = encode_request(&mut request).unwrap_err();
    assert!(matches!(err, EncodeError::StreamAlreadyConsumed(name) if name == "avatar"));
  }

  #[test]
  fn part_name_cannot_shadow_payload() {
    let mut request = UploadAvatar {
      user_id: 1,
      avatar: InputStream::from_bytes(PAYLOAD_PART, vec![1]).into(),
      note: None,
    };
    let err = encode_request(&mut request).unwrap_err();
    assert!(matches!(err, EncodeError::DuplicatePartName(name) if name == "payload"));
    match &request.avatar {
      InputFile::Stream(stream) => assert!(!stream.is_consumed()),
      other => panic!("unexpected {other:?}"),
    }
  }

  /// Yields `ab`, fails once, then reports end of input.
  struct Flaky {
    calls: usize,
  }

  impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      self.calls += 1;
      match self.calls {
        1 => {
          buf[..2].copy_from_slice(b"ab");
          Ok(2)
        }
        2 => Err(io::Error::new(io::ErrorKind::Other, "disk went away")),
        _ => Ok(0),
      }
    }
  }

  schema! {
    #[derive(Debug)]
    struct UploadPair {
      avatar: InputFile => required Kind::Attachment,
      banner: InputFile => required Kind::Attachment,
    }
  }

  impl Request for UploadPair {
    const METHOD: &'static str = "uploadPair";
    type Response = bool;

    fn attachments(&mut self) -> Vec<&mut InputFile> {
      vec![&mut self.avatar, &mut self.banner]
    }
  }

  #[test]
  fn failed_read_leaves_every_stream_intact() {
    let mut request = UploadPair {
      avatar: InputStream::from_bytes("avatar", b"\x89PNG".to_vec()).into(),
      banner: InputStream::new("banner", Flaky { calls: 0 }).into(),
    };

    let err = encode_request(&mut request).unwrap_err();
    assert!(matches!(err, EncodeError::Io(_)));
    for file in request.attachments() {
      assert!(!file.as_stream_mut().unwrap().is_consumed());
    }

    let encoded = encode_request(&mut request).unwrap();
    let Body::Multipart(multipart) = &encoded.body else {
      panic!("expected multipart");
    };
    assert_eq!(multipart.part("avatar").unwrap().data, b"\x89PNG");
    assert_eq!(multipart.part("banner").unwrap().data, b"ab");
  }
}
