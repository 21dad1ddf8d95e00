// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Typed Telegram Bot API: schema types that (de)serialize through field
//! descriptors, tagged unions, file uploads and a thin async client.

pub mod schema;

pub mod attachment;
mod builders;
mod client;
pub mod codec;
mod config;
pub mod decoder;
pub mod encoder;
pub mod registry;
pub mod requests;
pub mod types;
pub mod union;

pub use crate::{
  attachment::{FileKind, InputFile, InputStream},
  builders::{KeyboardBuilder, TelegramClientBuilder},
  client::{HttpTransport, TelegramClient, Transport},
  codec::{BanUntil, Color},
  config::{TelegramConfig, TELEGRAM_API_BASE},
  decoder::{decode_entity, decode_response, decode_value, RawResponse},
  encoder::{encode_request, Body, EncodedRequest, FormPart, Multipart, Request},
  types::{ChatId, ParseMode},
  union::{Union, UnknownVariant},
};
pub use error::{DecodeError, EncodeError, Error};
