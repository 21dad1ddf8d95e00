// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::schema::{schema, Kind};
use chrono::{DateTime, Utc};

schema! {
  /// A file uploaded to Telegram Passport.
  #[derive(Debug, Clone, PartialEq)]
  pub struct PassportFile {
    pub file_id: String => required Kind::String,
    pub file_unique_id: String => required Kind::String,
    pub file_size: Option<i64> => optional Kind::Integer,
    #[serde(with = "crate::codec::unix_time")]
    pub file_date: DateTime<Utc> => required Kind::Timestamp,
  }
}
