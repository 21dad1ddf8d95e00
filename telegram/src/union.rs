// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Discriminated unions: a tag field selects the concrete shape.

use crate::{
  decoder,
  registry::Family,
  schema::{emit_fields, Shape},
};
use error::{DecodeError, EncodeError};
use serde_json::{Map, Value};
use tracing::debug;

/// A variant whose discriminator the family doesn't know, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
  pub tag: String,
  /// Every key except the discriminator.
  pub fields: Map<String, Value>,
}

pub trait Union: Sized {
  fn family() -> &'static Family;

  /// Registered shape of this value, `None` for a preserved unknown variant.
  fn shape(&self) -> Option<&'static Shape>;

  fn unknown(&self) -> Option<&UnknownVariant>;

  /// Serializes the variant's own payload, without the discriminator.
  fn payload(&self) -> Result<Value, serde_json::Error>;

  fn decode_variant(tag: &str, object: Value) -> Result<Self, serde_json::Error>;

  /// Wraps an unknown variant, or `None` when the family rejects unknown tags.
  fn preserve(raw: UnknownVariant) -> Option<Self>;

  fn tag(&self) -> Option<&str> {
    match (self.shape(), self.unknown()) {
      (Some(shape), _) => Self::family().resolve_by_shape(shape),
      (None, Some(raw)) => Some(raw.tag.as_str()),
      (None, None) => None,
    }
  }
}

pub fn decode<U: Union>(value: Value) -> Result<U, DecodeError> {
  decode_at(value, "$")
}

pub(crate) fn decode_at<U: Union>(value: Value, path: &str) -> Result<U, DecodeError> {
  let family = U::family();
  decoder::check_union(family, &value, path)?;

  let tag = value
    .get(family.discriminator)
    .and_then(Value::as_str)
    .unwrap_or_default()
    .to_owned();

  if family.resolve_by_tag(&tag).is_some() {
    return Ok(U::decode_variant(&tag, value)?);
  }

  let mut fields = match value {
    Value::Object(fields) => fields,
    _ => Map::new(),
  };
  fields.remove(family.discriminator);
  debug!(family = family.name, tag = %tag, "preserving unknown variant");
  U::preserve(UnknownVariant {
    tag: tag.clone(),
    fields,
  })
  .ok_or(DecodeError::UnknownDiscriminator {
    family: family.name,
    tag,
  })
}

pub fn encode<U: Union>(union: &U) -> Result<Value, EncodeError> {
  let family = U::family();
  let mut object = Map::new();

  match (union.shape(), union.unknown()) {
    (Some(shape), _) => {
      let tag = family
        .resolve_by_shape(shape)
        .ok_or_else(|| EncodeError::UnknownDiscriminator {
          family: family.name,
          tag: shape.name.to_owned(),
        })?;
      let fields = emit_fields(shape, union.payload()?)?;
      object.insert(family.discriminator.to_owned(), Value::String(tag.to_owned()));
      object.extend(fields);
    }
    (None, Some(raw)) => {
      object.insert(
        family.discriminator.to_owned(),
        Value::String(raw.tag.clone()),
      );
      object.extend(
        raw
          .fields
          .iter()
          .filter(|(key, _)| key.as_str() != family.discriminator)
          .map(|(key, value)| (key.clone(), value.clone())),
      );
    }
    (None, None) => {
      return Err(EncodeError::UnknownDiscriminator {
        family: family.name,
        tag: String::new(),
      })
    }
  }

  Ok(Value::Object(object))
}

/// Declares a union family: the enum, its registry and its serde impls.
///
/// ```ignore
/// union_family! {
///   pub enum Origin in "Origin", discriminator "type", base ["date"] {
///     "user" => User(OriginUser),
///   }
///   unknown => Unknown;
/// }
/// ```
///
/// Without the `unknown` clause the family rejects unrecognized tags.
macro_rules! union_family {
  (@policy) => {
    $crate::registry::UnknownTag::Reject
  };
  (@policy $unknown:ident) => {
    $crate::registry::UnknownTag::Preserve
  };
  (@preserve $raw:ident) => {{
    let _ = $raw;
    None
  }};
  (@preserve $raw:ident $unknown:ident) => {
    Some(Self::$unknown($raw))
  };
  (
    $(#[$meta:meta])*
    $vis:vis enum $name:ident in $family:literal, discriminator $disc:literal, base [$($base:literal),* $(,)?] {
      $(
        $(#[$vmeta:meta])*
        $tag:literal => $variant:ident($payload:ty)
      ),+ $(,)?
    }
    $(unknown => $unknown:ident;)?
  ) => {
    $(#[$meta])*
    $vis enum $name {
      $(
        $(#[$vmeta])*
        $variant($payload),
      )+
      $(
        /// A variant this client doesn't know yet.
        $unknown($crate::union::UnknownVariant),
      )?
    }

    impl $crate::union::Union for $name {
      fn family() -> &'static $crate::registry::Family {
        static FAMILY: $crate::registry::Family = $crate::registry::Family::new(
          $family,
          $disc,
          &[$($base),*],
          &[
            $(
              $crate::registry::Entry {
                tag: $tag,
                shape: <$payload as $crate::schema::Schema>::shape,
              },
            )+
          ],
          $crate::union::union_family!(@policy $($unknown)?),
        );
        &FAMILY
      }

      fn shape(&self) -> Option<&'static $crate::schema::Shape> {
        match self {
          $( Self::$variant(_) => Some(<$payload as $crate::schema::Schema>::shape()), )+
          $( Self::$unknown(_) => None, )?
        }
      }

      fn unknown(&self) -> Option<&$crate::union::UnknownVariant> {
        match self {
          $( Self::$unknown(raw) => Some(raw), )?
          #[allow(unreachable_patterns)]
          _ => None,
        }
      }

      fn payload(&self) -> Result<::serde_json::Value, ::serde_json::Error> {
        match self {
          $( Self::$variant(payload) => ::serde_json::to_value(payload), )+
          $( Self::$unknown(raw) => Ok(::serde_json::Value::Object(raw.fields.clone())), )?
        }
      }

      fn decode_variant(
        tag: &str,
        object: ::serde_json::Value,
      ) -> Result<Self, ::serde_json::Error> {
        match tag {
          $( $tag => ::serde_json::from_value(object).map(Self::$variant), )+
          other => Err(<::serde_json::Error as ::serde::de::Error>::unknown_variant(
            other,
            &[$($tag),+],
          )),
        }
      }

      fn preserve(raw: $crate::union::UnknownVariant) -> Option<Self> {
        $crate::union::union_family!(@preserve raw $($unknown)?)
      }
    }

    impl ::serde::Serialize for $name {
      fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = $crate::union::encode(self).map_err(<S::Error as ::serde::ser::Error>::custom)?;
        ::serde::Serialize::serialize(&value, serializer)
      }
    }

    impl<'de> ::serde::Deserialize<'de> for $name {
      fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
        $crate::union::decode(value).map_err(<D::Error as ::serde::de::Error>::custom)
      }
    }

    impl $crate::schema::Wire for $name {
      fn check(value: &::serde_json::Value, path: &str) -> Result<(), ::error::DecodeError> {
        $crate::decoder::check_union(<Self as $crate::union::Union>::family(), value, path)
      }
    }
  };
}

pub(crate) use union_family;
