// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Scalar codecs between wire integers and domain values.

use chrono::{DateTime, Utc};
use error::InvalidColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire value meaning "restricted/banned forever".
pub const BAN_FOREVER: i64 = i32::MAX as i64;
/// Wire value meaning "no restriction date".
pub const BAN_NONE: i64 = 0;

pub fn decode_timestamp(secs: i64) -> Option<DateTime<Utc>> {
  DateTime::from_timestamp(secs, 0)
}

/// Sub-second precision is truncated.
pub fn encode_timestamp(instant: &DateTime<Utc>) -> i64 {
  instant.timestamp()
}

/// End of a ban or restriction.
///
/// Absence is modelled as `Option::None`, so the full wire domain is
/// `Option<BanUntil>`: `0` is `None`, `i32::MAX` is `Forever`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BanUntil {
  Forever,
  At(DateTime<Utc>),
}

pub fn decode_ban_until(value: i64) -> Option<Option<BanUntil>> {
  match value {
    BAN_NONE => Some(None),
    BAN_FOREVER => Some(Some(BanUntil::Forever)),
    secs => decode_timestamp(secs).map(|at| Some(BanUntil::At(at))),
  }
}

pub fn encode_ban_until(value: Option<BanUntil>) -> i64 {
  match value {
    None => BAN_NONE,
    Some(BanUntil::Forever) => BAN_FOREVER,
    Some(BanUntil::At(at)) => encode_timestamp(&at),
  }
}

/// Forum topic icon colors accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
  Blue,
  Yellow,
  Violet,
  Green,
  Rose,
  Red,
}

impl Color {
  pub const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Yellow,
    Color::Violet,
    Color::Green,
    Color::Rose,
    Color::Red,
  ];
}

pub fn encode_color(color: Color) -> i64 {
  match color {
    Color::Blue => 0x6FB9F0,
    Color::Yellow => 0xFFD67E,
    Color::Violet => 0xCB86DB,
    Color::Green => 0x8EEE98,
    Color::Rose => 0xFF93B2,
    Color::Red => 0xFB6F5F,
  }
}

pub fn decode_color(value: i64) -> Result<Color, InvalidColor> {
  Color::PALETTE
    .into_iter()
    .find(|color| encode_color(*color) == value)
    .ok_or(InvalidColor(value))
}

impl TryFrom<i64> for Color {
  type Error = InvalidColor;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    decode_color(value)
  }
}

impl From<Color> for i64 {
  fn from(color: Color) -> Self {
    encode_color(color)
  }
}

impl Serialize for Color {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(encode_color(*self))
  }
}

impl<'de> Deserialize<'de> for Color {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = i64::deserialize(deserializer)?;
    decode_color(value).map_err(serde::de::Error::custom)
  }
}

/// `#[serde(with = "codec::unix_time")]` for `DateTime<Utc>` fields.
pub mod unix_time {
  use super::{decode_timestamp, encode_timestamp};
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(encode_timestamp(value))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let secs = i64::deserialize(deserializer)?;
    decode_timestamp(secs)
      .ok_or_else(|| serde::de::Error::custom(format!("timestamp {secs} is out of range")))
  }
}

/// Optional variant of [`unix_time`]; pair with `#[serde(default)]`.
pub mod unix_time_option {
  use super::{decode_timestamp, encode_timestamp};
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    match value {
      Some(instant) => serializer.serialize_i64(encode_timestamp(instant)),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<i64>::deserialize(deserializer)? {
      Some(secs) => decode_timestamp(secs)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp {secs} is out of range"))),
      None => Ok(None),
    }
  }
}

/// `#[serde(default, with = "codec::ban_until")]` for `Option<BanUntil>` fields.
pub mod ban_until {
  use super::{decode_ban_until, encode_ban_until, BanUntil};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(value: &Option<BanUntil>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(encode_ban_until(*value))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Option<BanUntil>, D::Error> {
    match Option::<i64>::deserialize(deserializer)? {
      Some(value) => decode_ban_until(value)
        .ok_or_else(|| serde::de::Error::custom(format!("ban date {value} is out of range"))),
      None => Ok(None),
    }
  }
}
