// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Field descriptors shared by the encoder and the decoder.
//!
//! Every API object declares an ordered list of [`Field`]s. The decoder uses
//! the list to validate presence and wire kinds before typed construction,
//! the encoder uses it to order keys and to apply each field's emission rule.

use crate::{codec::BAN_NONE, decoder, registry::Family};
use error::{DecodeError, EncodeError};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct Shape {
  pub name: &'static str,
  pub fields: &'static [Field],
}

impl Shape {
  pub fn field(&self, name: &str) -> Option<&Field> {
    self.fields.iter().find(|field| field.name == name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
  Required,
  Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
  /// Absent values are left out of the JSON object.
  OmitIfAbsent,
  /// The key is written even when the value is absent.
  Always,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
  pub name: &'static str,
  pub kind: Kind,
  pub presence: Presence,
  pub emit: Emit,
}

impl Field {
  pub const fn required(name: &'static str, kind: Kind) -> Self {
    Self {
      name,
      kind,
      presence: Presence::Required,
      emit: Emit::Always,
    }
  }

  pub const fn optional(name: &'static str, kind: Kind) -> Self {
    Self {
      name,
      kind,
      presence: Presence::Optional,
      emit: Emit::OmitIfAbsent,
    }
  }

  /// Optional on input, but always present on output.
  pub const fn always(name: &'static str, kind: Kind) -> Self {
    Self {
      name,
      kind,
      presence: Presence::Optional,
      emit: Emit::Always,
    }
  }

  pub fn is_required(&self) -> bool {
    self.presence == Presence::Required
  }
}

/// Expected wire form of a field.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
  Bool,
  Integer,
  /// Integer that fits in 32 bits.
  Int32,
  Float,
  String,
  /// Integer chat id or `@username`.
  ChatId,
  /// Seconds since the Unix epoch.
  Timestamp,
  /// Like [`Kind::Timestamp`] with the `0` / `i32::MAX` sentinels.
  BanUntil,
  /// Integer restricted to the topic icon palette.
  Color,
  /// File id, URL or `attach://<name>` reference.
  Attachment,
  /// Exactly one of the listed string keys. The field itself never appears
  /// on the wire.
  OneOf(&'static [&'static str]),
  /// Any JSON object, contents unchecked.
  Object,
  /// Any JSON value.
  Any,
  Entity(fn() -> &'static Shape),
  Entities(fn() -> &'static Shape),
  Union(fn() -> &'static Family),
  Unions(fn() -> &'static Family),
  Array(&'static Kind),
}

impl Kind {
  pub fn expected(&self) -> &'static str {
    match self {
      Kind::Bool => "boolean",
      Kind::Integer | Kind::Timestamp | Kind::BanUntil | Kind::Color => "integer",
      Kind::Int32 => "32-bit integer",
      Kind::Float => "number",
      Kind::String | Kind::Attachment | Kind::OneOf(_) => "string",
      Kind::ChatId => "integer or string",
      Kind::Object | Kind::Entity(_) | Kind::Union(_) => "object",
      Kind::Entities(_) | Kind::Unions(_) | Kind::Array(_) => "array",
      Kind::Any => "any value",
    }
  }

  pub(crate) fn is_absent(&self, value: &Value) -> bool {
    value.is_null() || (matches!(self, Kind::BanUntil) && value.as_i64() == Some(BAN_NONE))
  }
}

/// Name of the wire kind actually found, for mismatch reports.
pub fn wire_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(n) if n.is_f64() => "number",
    Value::Number(_) => "integer",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// An API object with a static field descriptor.
pub trait Schema {
  fn shape() -> &'static Shape;
}

/// Anything the entity decoder can validate before typed construction.
pub trait Wire {
  fn check(value: &Value, path: &str) -> Result<(), DecodeError>;
}

macro_rules! wire_scalar {
  ($($ty:ty => $kind:expr, $name:literal;)*) => {
    $(
      impl Wire for $ty {
        fn check(value: &Value, path: &str) -> Result<(), DecodeError> {
          decoder::check_value(&$kind, value, $name, path)
        }
      }
    )*
  };
}

wire_scalar! {
  bool => Kind::Bool, "bool";
  i32 => Kind::Int32, "i32";
  i64 => Kind::Integer, "i64";
  f64 => Kind::Float, "f64";
  String => Kind::String, "String";
  Value => Kind::Any, "Value";
}

impl<T: Wire> Wire for Vec<T> {
  fn check(value: &Value, path: &str) -> Result<(), DecodeError> {
    match value {
      Value::Array(items) => items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| T::check(item, &format!("{path}[{index}]"))),
      other => Err(DecodeError::TypeMismatch {
        shape: "Vec",
        field: path.to_owned(),
        expected: "array",
        actual: wire_kind(other),
      }),
    }
  }
}

impl<T: Wire> Wire for Option<T> {
  fn check(value: &Value, path: &str) -> Result<(), DecodeError> {
    if value.is_null() {
      Ok(())
    } else {
      T::check(value, path)
    }
  }
}

/// Reorders a serialized object by its descriptor and applies emission rules,
/// recursing into nested entities.
pub(crate) fn emit_fields(shape: &Shape, value: Value) -> Result<Map<String, Value>, EncodeError> {
  let mut source = match value {
    Value::Object(map) => map,
    other => {
      return Err(EncodeError::Json(<serde_json::Error as serde::ser::Error>::custom(format!(
        "{} serialized to {} instead of an object",
        shape.name,
        wire_kind(&other)
      ))))
    }
  };

  let mut object = Map::new();
  for field in shape.fields {
    if let Kind::OneOf(keys) = field.kind {
      for key in keys {
        if let Some(value) = source.remove(*key).filter(|value| !value.is_null()) {
          object.insert((*key).to_owned(), value);
        }
      }
      continue;
    }
    let value = source.remove(field.name).unwrap_or(Value::Null);
    if field.emit == Emit::OmitIfAbsent && field.kind.is_absent(&value) {
      continue;
    }
    object.insert(field.name.to_owned(), emit_value(&field.kind, value)?);
  }

  if let Some(field) = source.keys().next() {
    return Err(EncodeError::UndeclaredField {
      shape: shape.name,
      field: field.clone(),
    });
  }

  Ok(object)
}

fn emit_value(kind: &Kind, value: Value) -> Result<Value, EncodeError> {
  match (kind, value) {
    (Kind::Entity(shape), value @ Value::Object(_)) => {
      emit_fields((*shape)(), value).map(Value::Object)
    }
    (Kind::Entities(shape), Value::Array(items)) => items
      .into_iter()
      .map(|item| emit_value(&Kind::Entity(*shape), item))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::Array),
    (Kind::Array(inner), Value::Array(items)) => items
      .into_iter()
      .map(|item| emit_value(inner, item))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::Array),
    (_, value) => Ok(value),
  }
}

/// Serializes a flat entity into its canonical wire object.
pub fn encode_entity<T: Schema + Serialize>(entity: &T) -> Result<Value, EncodeError> {
  emit_fields(T::shape(), serde_json::to_value(entity)?).map(Value::Object)
}

/// Declares an API object: the struct itself, its serde derives and its
/// field descriptor, from one field list.
///
/// Each field is `name: Type => rule Kind`, where `rule` is `required`,
/// `optional` or `always`. `name as "wire"` renames the JSON key.
macro_rules! schema {
  (@name $field:ident) => {
    stringify!($field)
  };
  (@name $field:ident $wire:literal) => {
    $wire
  };
  (
    $(#[$meta:meta])*
    $vis:vis struct $name:ident {
      $(
        $(#[$fmeta:meta])*
        $fvis:vis $field:ident $(as $wire:literal)? : $ty:ty => $rule:ident $kind:expr
      ),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(::serde::Serialize, ::serde::Deserialize)]
    $vis struct $name {
      $(
        $(#[$fmeta])*
        $(#[serde(rename = $wire)])?
        $fvis $field: $ty,
      )*
    }

    impl $crate::schema::Schema for $name {
      fn shape() -> &'static $crate::schema::Shape {
        static SHAPE: $crate::schema::Shape = $crate::schema::Shape {
          name: stringify!($name),
          fields: &[
            $( $crate::schema::Field::$rule($crate::schema::schema!(@name $field $($wire)?), $kind), )*
          ],
        };
        &SHAPE
      }
    }

    impl $crate::schema::Wire for $name {
      fn check(value: &::serde_json::Value, path: &str) -> Result<(), ::error::DecodeError> {
        $crate::decoder::check_entity(<Self as $crate::schema::Schema>::shape(), value, path)
      }
    }
  };
}

pub(crate) use schema;

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  schema! {
    #[derive(Debug, Clone, PartialEq)]
    struct Inner {
      a: Option<i64> => optional Kind::Integer,
      b: Option<i64> => always Kind::Integer,
    }
  }

  schema! {
    #[derive(Debug, Clone, PartialEq)]
    struct Outer {
      kind as "type": String => required Kind::String,
      inner: Option<Inner> => optional Kind::Entity(Inner::shape),
      list: Vec<Inner> => required Kind::Entities(Inner::shape),
    }
  }

  #[test]
  fn emission_rules_and_order() {
    let outer = Outer {
      kind: "x".into(),
      inner: Some(Inner { a: None, b: None }),
      list: vec![Inner { a: Some(1), b: Some(2) }],
    };
    let value = encode_entity(&outer).unwrap();
    assert_eq!(
      value,
      json!({"type": "x", "inner": {"b": null}, "list": [{"a": 1, "b": 2}]})
    );
    assert_eq!(
      serde_json::to_string(&value).unwrap(),
      r#"{"type":"x","inner":{"b":null},"list":[{"a":1,"b":2}]}"#
    );
  }

  #[test]
  fn absent_nested_entity_is_omitted() {
    let outer = Outer {
      kind: "x".into(),
      inner: None,
      list: vec![],
    };
    assert_eq!(
      encode_entity(&outer).unwrap(),
      json!({"type": "x", "list": []})
    );
  }

  #[test]
  fn descriptor_uses_wire_names() {
    let shape = Outer::shape();
    assert_eq!(shape.name, "Outer");
    assert!(shape.field("type").unwrap().is_required());
    assert!(shape.field("kind").is_none());
  }
}
