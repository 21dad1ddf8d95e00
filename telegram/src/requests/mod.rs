// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! One struct per API method; field order is the order keys go on the wire.

mod chat;
mod commands;
mod inline;
mod messages;
mod stickers;

pub use self::{chat::*, commands::*, inline::*, messages::*, stickers::*};
