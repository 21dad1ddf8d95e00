// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::EncodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
  fmt,
  fs::File,
  io::{Cursor, Read},
  path::Path,
};
use url::Url;

pub const ATTACH_SCHEME: &str = "attach://";
pub const OCTET_STREAM: &str = "application/octet-stream";

const MIME_BY_EXTENSION: &[(&str, &str)] = &[
  ("jpg", "image/jpeg"),
  ("jpeg", "image/jpeg"),
  ("png", "image/png"),
  ("gif", "image/gif"),
  ("webp", "image/webp"),
  ("webm", "video/webm"),
  ("mp4", "video/mp4"),
  ("mp3", "audio/mpeg"),
  ("ogg", "audio/ogg"),
  ("tgs", "application/x-tgsticker"),
  ("pdf", "application/pdf"),
  ("txt", "text/plain"),
  ("json", "application/json"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  ById,
  ByUrl,
  ByStream,
}

/// A file the API should use: already uploaded, fetched by URL, or uploaded
/// with the request.
pub enum InputFile {
  Id(String),
  Url(Url),
  Stream(InputStream),
}

impl InputFile {
  pub fn id(file_id: impl Into<String>) -> Self {
    Self::Id(file_id.into())
  }

  pub fn stream(stream: InputStream) -> Self {
    Self::Stream(stream)
  }

  pub fn classify(&self) -> FileKind {
    match self {
      Self::Id(_) => FileKind::ById,
      Self::Url(_) => FileKind::ByUrl,
      Self::Stream(_) => FileKind::ByStream,
    }
  }

  pub fn as_stream_mut(&mut self) -> Option<&mut InputStream> {
    match self {
      Self::Stream(stream) => Some(stream),
      _ => None,
    }
  }

  /// The string written into JSON for this reference.
  pub fn wire_value(&self) -> String {
    match self {
      Self::Id(id) => id.clone(),
      Self::Url(url) => url.to_string(),
      Self::Stream(stream) => format!("{ATTACH_SCHEME}{}", stream.name),
    }
  }
}

impl From<Url> for InputFile {
  fn from(url: Url) -> Self {
    Self::Url(url)
  }
}

impl From<InputStream> for InputFile {
  fn from(stream: InputStream) -> Self {
    Self::Stream(stream)
  }
}

impl fmt::Debug for InputFile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Id(id) => f.debug_tuple("Id").field(id).finish(),
      Self::Url(url) => f.debug_tuple("Url").field(&url.as_str()).finish(),
      Self::Stream(stream) => f.debug_tuple("Stream").field(stream).finish(),
    }
  }
}

impl PartialEq for InputFile {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Id(a), Self::Id(b)) => a == b,
      (Self::Url(a), Self::Url(b)) => a == b,
      (Self::Stream(a), Self::Stream(b)) => a.name == b.name,
      _ => false,
    }
  }
}

impl Serialize for InputFile {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.wire_value())
  }
}

impl<'de> Deserialize<'de> for InputFile {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Some(name) = raw.strip_prefix(ATTACH_SCHEME) {
      return Ok(Self::Stream(InputStream::detached(name)));
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
      if let Ok(url) = Url::parse(&raw) {
        return Ok(Self::Url(url));
      }
    }
    Ok(Self::Id(raw))
  }
}

/// A local binary source uploaded as one multipart part.
///
/// The reader is drained once by the request encoder; afterwards the stream
/// is consumed and encoding it again fails.
pub struct InputStream {
  name: String,
  file_name: Option<String>,
  content_type: Option<String>,
  reader: Option<Box<dyn Read + Send>>,
}

impl InputStream {
  pub fn new(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
    Self {
      name: name.into(),
      file_name: None,
      content_type: None,
      reader: Some(Box::new(reader)),
    }
  }

  pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
    Self::new(name, Cursor::new(bytes.into()))
  }

  /// Opens a local file; the file name doubles as the content-type hint.
  pub fn open(name: impl Into<String>, path: impl AsRef<Path>) -> std::io::Result<Self> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut stream = Self::new(name, file);
    stream.file_name = path
      .file_name()
      .and_then(|name| name.to_str())
      .map(str::to_owned);
    Ok(stream)
  }

  /// Reference decoded from an `attach://` token; it carries no content.
  fn detached(name: &str) -> Self {
    Self {
      name: name.to_owned(),
      file_name: None,
      content_type: None,
      reader: None,
    }
  }

  pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
    self.file_name = Some(file_name.into());
    self
  }

  pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
    self.content_type = Some(content_type.into());
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn is_consumed(&self) -> bool {
    self.reader.is_none()
  }

  pub fn resolved_file_name(&self) -> &str {
    self.file_name.as_deref().unwrap_or(&self.name)
  }

  pub fn resolved_content_type(&self) -> &str {
    infer_content_type(self.content_type.as_deref(), self.file_name.as_deref())
  }

  /// Reads the whole stream, leaving it consumed.
  ///
  /// A failed read leaves the stream readable again from the start: the
  /// bytes already read are put back in front of the rest of the reader.
  pub(crate) fn drain(&mut self) -> Result<Vec<u8>, EncodeError> {
    let mut reader = self
      .reader
      .take()
      .ok_or_else(|| EncodeError::StreamAlreadyConsumed(self.name.clone()))?;
    let mut data = Vec::new();
    if let Err(err) = reader.read_to_end(&mut data) {
      self.reader = Some(Box::new(Cursor::new(data).chain(reader)));
      return Err(err.into());
    }
    Ok(data)
  }

  /// Makes a drained stream readable again with the same content.
  pub(crate) fn restore(&mut self, data: Vec<u8>) {
    self.reader = Some(Box::new(Cursor::new(data)));
  }
}

impl fmt::Debug for InputStream {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InputStream")
      .field("name", &self.name)
      .field("file_name", &self.file_name)
      .field("content_type", &self.content_type)
      .field("consumed", &self.is_consumed())
      .finish()
  }
}

pub fn infer_content_type<'a>(explicit: Option<&'a str>, file_name: Option<&str>) -> &'a str {
  if let Some(content_type) = explicit {
    return content_type;
  }
  file_name
    .and_then(|name| Path::new(name).extension())
    .and_then(|ext| ext.to_str())
    .and_then(|ext| {
      MIME_BY_EXTENSION
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
    })
    .unwrap_or(OCTET_STREAM)
}
