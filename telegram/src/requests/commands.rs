// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  encoder::Request,
  schema::{schema, Kind},
  types::{BotCommand, BotCommandScope, ChatAdministratorRights},
  union::Union,
};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct SetMyCommands {
    pub commands: Vec<BotCommand> => required Kind::Entities(BotCommand::shape),
    pub scope: Option<BotCommandScope> => optional Kind::Union(BotCommandScope::family),
    pub language_code: Option<String> => optional Kind::String,
  }
}

impl SetMyCommands {
  pub fn new(commands: Vec<BotCommand>) -> Self {
    Self {
      commands,
      scope: None,
      language_code: None,
    }
  }

  pub fn scope(mut self, scope: BotCommandScope) -> Self {
    self.scope = Some(scope);
    self
  }

  pub fn language_code(mut self, code: impl Into<String>) -> Self {
    self.language_code = Some(code.into());
    self
  }
}

impl Request for SetMyCommands {
  const METHOD: &'static str = "setMyCommands";
  type Response = bool;
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct GetMyCommands {
    pub scope: Option<BotCommandScope> => optional Kind::Union(BotCommandScope::family),
    pub language_code: Option<String> => optional Kind::String,
  }
}

impl GetMyCommands {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn scope(mut self, scope: BotCommandScope) -> Self {
    self.scope = Some(scope);
    self
  }
}

impl Request for GetMyCommands {
  const METHOD: &'static str = "getMyCommands";
  type Response = Vec<BotCommand>;
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct GetMyDefaultAdministratorRights {
    pub for_channels: Option<bool> => optional Kind::Bool,
  }
}

impl GetMyDefaultAdministratorRights {
  pub fn for_channels() -> Self {
    Self {
      for_channels: Some(true),
    }
  }
}

impl Request for GetMyDefaultAdministratorRights {
  const METHOD: &'static str = "getMyDefaultAdministratorRights";
  type Response = ChatAdministratorRights;
}
