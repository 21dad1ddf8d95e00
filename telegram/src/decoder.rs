// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Entity decoder: validates wire JSON against field descriptors, then hands
//! the checked value to serde for typed construction.

use crate::{
  codec::{decode_ban_until, decode_color, decode_timestamp},
  registry::{Family, UnknownTag},
  schema::{wire_kind, Kind, Shape, Wire},
};
use error::{DecodeError, Error};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};
use tracing::debug;

const TOO_MANY_REQUESTS: i32 = 429;

fn child(path: &str, name: &str) -> String {
  if path == "$" {
    name.to_owned()
  } else {
    format!("{path}.{name}")
  }
}

fn item(path: &str, index: usize) -> String {
  format!("{path}[{index}]")
}

fn mismatch(shape: &'static str, path: &str, expected: &'static str, value: &Value) -> DecodeError {
  DecodeError::TypeMismatch {
    shape,
    field: path.to_owned(),
    expected,
    actual: wire_kind(value),
  }
}

pub(crate) fn check_value(
  kind: &Kind,
  value: &Value,
  shape: &'static str,
  path: &str,
) -> Result<(), DecodeError> {
  let ok = match kind {
    Kind::Any => true,
    Kind::Bool => value.is_boolean(),
    Kind::Integer => value.is_i64() || value.is_u64(),
    Kind::Int32 => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
    Kind::Float => value.is_number(),
    Kind::String | Kind::Attachment | Kind::OneOf(_) => value.is_string(),
    Kind::ChatId => value.is_i64() || value.is_string(),
    Kind::Object => value.is_object(),
    Kind::Timestamp => {
      let secs = value.as_i64().ok_or_else(|| mismatch(shape, path, kind.expected(), value))?;
      decode_timestamp(secs).ok_or_else(|| DecodeError::InvalidTimestamp {
        field: path.to_owned(),
        value: secs,
      })?;
      true
    }
    Kind::BanUntil => {
      let secs = value.as_i64().ok_or_else(|| mismatch(shape, path, kind.expected(), value))?;
      decode_ban_until(secs).ok_or_else(|| DecodeError::InvalidTimestamp {
        field: path.to_owned(),
        value: secs,
      })?;
      true
    }
    Kind::Color => {
      let raw = value.as_i64().ok_or_else(|| mismatch(shape, path, kind.expected(), value))?;
      decode_color(raw).map_err(|err| DecodeError::InvalidColor {
        field: path.to_owned(),
        value: err.0,
      })?;
      true
    }
    Kind::Entity(shape) => return check_entity(shape(), value, path),
    Kind::Union(family) => return check_union(family(), value, path),
    Kind::Entities(nested) => {
      return check_items(shape, value, path, |item, path| check_entity(nested(), item, path))
    }
    Kind::Unions(family) => {
      return check_items(shape, value, path, |item, path| check_union(family(), item, path))
    }
    Kind::Array(inner) => {
      return check_items(shape, value, path, |item, path| {
        check_value(inner, item, shape, path)
      })
    }
  };

  if ok {
    Ok(())
  } else {
    Err(mismatch(shape, path, kind.expected(), value))
  }
}

fn check_items(
  shape: &'static str,
  value: &Value,
  path: &str,
  check: impl Fn(&Value, &str) -> Result<(), DecodeError>,
) -> Result<(), DecodeError> {
  let items = value
    .as_array()
    .ok_or_else(|| mismatch(shape, path, "array", value))?;
  items
    .iter()
    .enumerate()
    .try_for_each(|(index, value)| check(value, &item(path, index)))
}

/// Checks presence and wire kind of every declared field. Undeclared keys
/// are ignored.
pub(crate) fn check_entity(shape: &'static Shape, value: &Value, path: &str) -> Result<(), DecodeError> {
  let object = value
    .as_object()
    .ok_or_else(|| mismatch(shape.name, path, "object", value))?;

  for field in shape.fields {
    if let Kind::OneOf(keys) = field.kind {
      check_one_of(shape, keys, field.is_required(), object, path)?;
      continue;
    }
    let path = child(path, field.name);
    match object.get(field.name) {
      None | Some(Value::Null) if field.is_required() => {
        return Err(DecodeError::MissingRequiredField {
          shape: shape.name,
          field: path,
        })
      }
      None | Some(Value::Null) => {}
      Some(value) => check_value(&field.kind, value, shape.name, &path)?,
    }
  }

  Ok(())
}

/// At most one of `keys` may be set, and one must be when `required`.
fn check_one_of(
  shape: &'static Shape,
  keys: &[&str],
  required: bool,
  object: &Map<String, Value>,
  path: &str,
) -> Result<(), DecodeError> {
  let mut present = keys
    .iter()
    .filter_map(|key| object.get(*key).filter(|value| !value.is_null()).map(|value| (*key, value)));

  match (present.next(), present.next()) {
    (None, _) if required => Err(DecodeError::MissingRequiredField {
      shape: shape.name,
      field: child(path, &keys.join("|")),
    }),
    (None, _) => Ok(()),
    (Some((key, value)), None) => check_value(&Kind::String, value, shape.name, &child(path, key)),
    (Some((first, _)), Some((second, _))) => Err(DecodeError::ConflictingFields {
      shape: shape.name,
      field: child(path, first),
      other: child(path, second),
    }),
  }
}

/// Reads the discriminator, resolves it and checks the selected shape.
pub(crate) fn check_union(family: &'static Family, value: &Value, path: &str) -> Result<(), DecodeError> {
  let object = value
    .as_object()
    .ok_or_else(|| mismatch(family.name, path, "object", value))?;

  let field = child(path, family.discriminator);
  let tag = match object.get(family.discriminator) {
    None | Some(Value::Null) => {
      return Err(DecodeError::MissingDiscriminator {
        family: family.name,
        field,
      })
    }
    Some(Value::String(tag)) => tag,
    Some(other) => return Err(mismatch(family.name, &field, "string", other)),
  };

  match (family.resolve_by_tag(tag), family.unknown) {
    (Some(shape), _) => check_entity(shape, value, path),
    (None, UnknownTag::Preserve) => Ok(()),
    (None, UnknownTag::Reject) => Err(DecodeError::UnknownDiscriminator {
      family: family.name,
      tag: tag.clone(),
    }),
  }
}

/// Validates and decodes one JSON document as `T`.
pub fn decode_value<T: Wire + DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
  T::check(&value, "$")?;
  Ok(serde_json::from_value(value)?)
}

pub fn decode_entity<T: Wire + DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
  decode_value(serde_json::from_slice(bytes)?)
}

/// Response as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
  pub status_ok: bool,
  pub status: u16,
  pub body: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
  ok: bool,
  #[serde(default)]
  result: Option<Value>,
  #[serde(default)]
  description: Option<String>,
  #[serde(default)]
  error_code: Option<i32>,
  #[serde(default)]
  parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
struct ResponseParameters {
  #[serde(default)]
  retry_after: Option<u64>,
  #[serde(default)]
  migrate_to_chat_id: Option<i64>,
}

/// Unwraps the `{ ok, result, ... }` envelope and decodes `result` as `T`.
pub fn decode_response<T: Wire + DeserializeOwned>(response: &RawResponse) -> Result<T, Error> {
  let envelope: Envelope = match serde_json::from_slice(&response.body) {
    Ok(envelope) => envelope,
    Err(_) if !response.status_ok => {
      return Err(Error::ApiError {
        code: Some(i32::from(response.status)),
        description: String::from_utf8_lossy(&response.body).into_owned(),
      })
    }
    Err(err) => return Err(DecodeError::Json(err).into()),
  };

  if !envelope.ok {
    let parameters = envelope.parameters;
    if let Some(chat_id) = parameters.as_ref().and_then(|p| p.migrate_to_chat_id) {
      debug!(migrate_to_chat_id = chat_id, "chat was migrated");
    }
    if envelope.error_code == Some(TOO_MANY_REQUESTS) {
      return Err(Error::RateLimitExceeded {
        retry_after: parameters.and_then(|p| p.retry_after),
      });
    }
    return Err(Error::ApiError {
      code: envelope.error_code,
      description: envelope.description.unwrap_or_default(),
    });
  }

  let result = envelope
    .result
    .ok_or_else(|| DecodeError::MissingRequiredField {
      shape: "ApiResponse",
      field: "result".to_owned(),
    })?;

  T::check(&result, "result")?;
  Ok(serde_json::from_value(result).map_err(DecodeError::Json)?)
}
