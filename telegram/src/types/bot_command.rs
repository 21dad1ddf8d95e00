// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::ChatId;
use crate::{
  schema::{schema, Kind},
  union::union_family,
};

schema! {
  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits and underscores.
    pub command: String => required Kind::String,
    pub description: String => required Kind::String,
  }
}

impl BotCommand {
  pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      command: command.into(),
      description: description.into(),
    }
  }
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq, Eq)]
  pub struct BotCommandScopeDefault {}
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq, Eq)]
  pub struct BotCommandScopeAllPrivateChats {}
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq, Eq)]
  pub struct BotCommandScopeAllGroupChats {}
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq, Eq)]
  pub struct BotCommandScopeAllChatAdministrators {}
}

schema! {
  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct BotCommandScopeChat {
    pub chat_id: ChatId => required Kind::ChatId,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct BotCommandScopeChatAdministrators {
    pub chat_id: ChatId => required Kind::ChatId,
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct BotCommandScopeChatMember {
    pub chat_id: ChatId => required Kind::ChatId,
    pub user_id: i64 => required Kind::Integer,
  }
}

union_family! {
  /// Which users see a command list.
  #[derive(Debug, Clone, PartialEq, Eq)]
  pub enum BotCommandScope in "BotCommandScope", discriminator "type", base [] {
    "default" => Default(BotCommandScopeDefault),
    "all_private_chats" => AllPrivateChats(BotCommandScopeAllPrivateChats),
    "all_group_chats" => AllGroupChats(BotCommandScopeAllGroupChats),
    "all_chat_administrators" => AllChatAdministrators(BotCommandScopeAllChatAdministrators),
    "chat" => Chat(BotCommandScopeChat),
    "chat_administrators" => ChatAdministrators(BotCommandScopeChatAdministrators),
    "chat_member" => ChatMember(BotCommandScopeChatMember),
  }
}

impl Default for BotCommandScope {
  fn default() -> Self {
    Self::Default(BotCommandScopeDefault {})
  }
}

impl BotCommandScope {
  pub fn all_private_chats() -> Self {
    Self::AllPrivateChats(BotCommandScopeAllPrivateChats {})
  }

  pub fn all_group_chats() -> Self {
    Self::AllGroupChats(BotCommandScopeAllGroupChats {})
  }

  pub fn all_chat_administrators() -> Self {
    Self::AllChatAdministrators(BotCommandScopeAllChatAdministrators {})
  }

  pub fn chat(chat_id: impl Into<ChatId>) -> Self {
    Self::Chat(BotCommandScopeChat {
      chat_id: chat_id.into(),
    })
  }

  pub fn chat_administrators(chat_id: impl Into<ChatId>) -> Self {
    Self::ChatAdministrators(BotCommandScopeChatAdministrators {
      chat_id: chat_id.into(),
    })
  }

  pub fn chat_member(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
    Self::ChatMember(BotCommandScopeChatMember {
      chat_id: chat_id.into(),
      user_id,
    })
  }
}
