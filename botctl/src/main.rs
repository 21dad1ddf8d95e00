// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{bail, Context, Result};
use config::Config;
use std::{env, path::PathBuf};
use telegram::{
  requests::{GetMyCommands, SendSticker},
  ChatId, InputStream, TelegramClient, Union,
};
use tracing::{info, instrument, Level};

const USAGE: &str = "usage: botctl <me | send CHAT TEXT | sticker CHAT PATH | member CHAT USER | commands>";

#[cfg(debug_assertions)]
fn setup_logging(level: Level) {
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging(level: Level) {
  tracing_subscriber::fmt().with_max_level(level).init();
}

#[derive(Debug)]
enum Command {
  Me,
  Send { chat: ChatId, text: String },
  Sticker { chat: ChatId, path: PathBuf },
  Member { chat: ChatId, user_id: i64 },
  Commands,
}

fn chat_id(raw: &str) -> ChatId {
  raw.parse::<i64>().map_or_else(|_| raw.into(), ChatId::from)
}

impl Command {
  fn parse(args: &[String]) -> Result<Self> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    Ok(match args.as_slice() {
      ["me"] => Self::Me,
      ["send", chat, text @ ..] if !text.is_empty() => Self::Send {
        chat: chat_id(chat),
        text: text.join(" "),
      },
      ["sticker", chat, path] => Self::Sticker {
        chat: chat_id(chat),
        path: path.into(),
      },
      ["member", chat, user] => Self::Member {
        chat: chat_id(chat),
        user_id: user.parse().context("USER must be a numeric id")?,
      },
      ["commands"] => Self::Commands,
      _ => bail!(USAGE),
    })
  }
}

fn client(config: &Config) -> Result<TelegramClient> {
  let section = &config.telegram;
  let token = section
    .token()
    .context("Missing bot token: set telegram.token or TELEGRAM_BOT_TOKEN")?;

  let mut builder = TelegramClient::builder()
    .token(token)
    .timeout(section.timeout())
    .retry_attempts(section.retry_attempts)
    .retry_delay(section.retry_delay());
  if let Some(api_url) = &section.api_url {
    builder = builder.api_url(api_url.clone());
  }
  Ok(builder.build()?)
}

#[instrument(skip(tg))]
async fn run(tg: &TelegramClient, command: Command) -> Result<()> {
  match command {
    Command::Me => {
      let me = tg.get_me().await?;
      info!(id = me.id, "Authorized");
      println!("{}", serde_json::to_string_pretty(&me)?);
    }
    Command::Send { chat, text } => {
      let message = tg.send_message(chat, text).await?;
      println!("sent message {}", message.message_id);
    }
    Command::Sticker { chat, path } => {
      let stream = InputStream::open("sticker", &path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
      let message = tg.send(SendSticker::new(chat, stream)).await?;
      println!("sent sticker as message {}", message.message_id);
    }
    Command::Member { chat, user_id } => {
      let member = tg.get_chat_member(chat, user_id).await?;
      println!(
        "status: {}, member: {}",
        member.tag().unwrap_or("?"),
        member.is_member()
      );
      println!("{}", serde_json::to_string_pretty(&member)?);
    }
    Command::Commands => {
      for command in tg.send(GetMyCommands::new()).await? {
        println!("/{} - {}", command.command, command.description);
      }
    }
  }
  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  let config_path = env::var("BOTCTL_CONFIG").unwrap_or_else(|_| "botctl.toml".into());
  let config = Config::load_or_default(&config_path)?;
  setup_logging(config.log.level());

  let args: Vec<String> = env::args().skip(1).collect();
  let command = Command::parse(&args)?;
  let tg = client(&config)?;

  if let Err(e) = run(&tg, command).await {
    tracing::error!("Request failed: {e:?}");
    std::process::exit(1);
  }

  Ok(())
}
