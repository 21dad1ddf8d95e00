// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

/// Failure while turning wire JSON into typed values.
///
/// `field` is a dotted path from the decoded root (`$` is the root itself),
/// e.g. `result.user.first_name` or `media[1].type`.
#[derive(ThisError, Debug)]
pub enum DecodeError {
  #[error("Malformed JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("{family}: discriminator `{field}` is missing")]
  MissingDiscriminator {
    family: &'static str,
    field: String,
  },
  #[error("{family}: unknown discriminator value `{tag}`")]
  UnknownDiscriminator { family: &'static str, tag: String },
  #[error("{shape}: required field `{field}` is missing")]
  MissingRequiredField { shape: &'static str, field: String },
  #[error("{shape}: field `{field}` expected {expected}, found {actual}")]
  TypeMismatch {
    shape: &'static str,
    field: String,
    expected: &'static str,
    actual: &'static str,
  },
  #[error("Field `{field}` holds {value}, which is not a palette color")]
  InvalidColor { field: String, value: i64 },
  #[error("Field `{field}` holds {value}, which is not a representable timestamp")]
  InvalidTimestamp { field: String, value: i64 },
  #[error("{shape}: fields `{field}` and `{other}` cannot both be set")]
  ConflictingFields {
    shape: &'static str,
    field: String,
    other: String,
  },
}

/// Failure while turning a request into a wire body.
#[derive(ThisError, Debug)]
pub enum EncodeError {
  #[error("Serialization failed: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Attachment part name `{0}` is used more than once")]
  DuplicatePartName(String),
  #[error("Attachment stream `{0}` was already consumed")]
  StreamAlreadyConsumed(String),
  #[error("{family}: no discriminator registered for shape `{tag}`")]
  UnknownDiscriminator { family: &'static str, tag: String },
  #[error("{shape}: serialized field `{field}` is not declared")]
  UndeclaredField { shape: &'static str, field: String },
  #[error("Failed to read attachment stream: {0}")]
  Io(#[from] std::io::Error),
}

#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} is not a palette color")]
pub struct InvalidColor(pub i64);

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Decode error: {0}")]
  Decode(#[from] DecodeError),
  #[error("Encode error: {0}")]
  Encode(#[from] EncodeError),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("API error {code:?}: {description}")]
  ApiError {
    code: Option<i32>,
    description: String,
  },
  #[error("Rate limit exceeded (retry after {retry_after:?}s)")]
  RateLimitExceeded { retry_after: Option<u64> },
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Timeout error")]
  TimeoutError,
}

impl Error {
  /// Whether resending the same encoded request may succeed.
  pub fn is_retryable(&self) -> bool {
    matches!(
      self,
      Error::HttpError(_) | Error::RateLimitExceeded { .. } | Error::TimeoutError
    )
  }
}
