// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::TelegramClientBuilder,
  config::TelegramConfig,
  decoder::{decode_response, RawResponse},
  encoder::{encode_request, Body, EncodedRequest, Multipart, Request, JSON_CONTENT_TYPE, PAYLOAD_PART},
  requests::{GetChatMember, GetMe, SendMessage},
  schema::Wire,
  types::{ChatId, ChatMember, Message, User},
};
use async_trait::async_trait;
use error::{EncodeError, Error};
use reqwest::{
  header::CONTENT_TYPE,
  multipart::{Form, Part},
  Client,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Sends encoded requests and hands back the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn post(&self, request: &EncodedRequest) -> Result<RawResponse, Error>;
}

#[derive(Clone)]
pub struct HttpTransport {
  config: TelegramConfig,
  client: Client,
}

impl HttpTransport {
  pub fn new(config: &TelegramConfig) -> Result<Self, Error> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(Self {
      config: config.clone(),
      client,
    })
  }
}

/// The Bot API reads multipart fields one by one, so the JSON payload is
/// spread into one text field per key.
fn form(multipart: &Multipart) -> Result<Form, Error> {
  let mut form = Form::new();

  for part in &multipart.parts {
    if part.name == PAYLOAD_PART {
      let fields: Map<String, Value> =
        serde_json::from_slice(&part.data).map_err(EncodeError::from)?;
      for (key, value) in fields {
        let text = match value {
          Value::String(text) => text,
          other => other.to_string(),
        };
        form = form.text(key, text);
      }
      continue;
    }

    let mut file = Part::bytes(part.data.clone()).mime_str(&part.content_type)?;
    if let Some(file_name) = &part.file_name {
      file = file.file_name(file_name.clone());
    }
    form = form.part(part.name.clone(), file);
  }

  Ok(form)
}

#[async_trait]
impl Transport for HttpTransport {
  async fn post(&self, request: &EncodedRequest) -> Result<RawResponse, Error> {
    let url = self.config.method_url(request.method);
    let builder = self.client.post(url);
    let builder = match &request.body {
      Body::Json(bytes) => builder
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(bytes.clone()),
      Body::Multipart(multipart) => builder.multipart(form(multipart)?),
    };

    let response = builder.send().await.map_err(|e| {
      if e.is_timeout() {
        Error::TimeoutError
      } else {
        Error::HttpError(e)
      }
    })?;

    let status = response.status();
    let body = response.bytes().await.map_err(Error::HttpError)?;

    Ok(RawResponse {
      status_ok: status.is_success(),
      status: status.as_u16(),
      body: body.to_vec(),
    })
  }
}

#[derive(Clone)]
pub struct TelegramClient<T: Transport = HttpTransport> {
  pub(crate) config: TelegramConfig,
  pub(crate) transport: T,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }
}

impl<T: Transport> TelegramClient<T> {
  pub fn with_transport(config: TelegramConfig, transport: T) -> Self {
    Self { config, transport }
  }

  pub fn config(&self) -> &TelegramConfig {
    &self.config
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  /// Encodes `request` once and posts it, retrying transport failures.
  #[instrument(skip(self, request), fields(method = R::METHOD))]
  pub async fn send<R: Request + Send>(&self, mut request: R) -> Result<R::Response, Error> {
    let encoded = encode_request(&mut request)?;
    drop(request);
    self.execute(&encoded).await
  }

  async fn execute<U: Wire + DeserializeOwned>(&self, request: &EncodedRequest) -> Result<U, Error> {
    let attempts = self.config.retry_attempts;

    for attempt in 0..=attempts {
      match self.try_execute(request).await {
        Ok(result) => {
          debug!("Request completed successfully");
          return Ok(result);
        }
        Err(e) if !e.is_retryable() => return Err(e),
        Err(e) => {
          if attempt == attempts {
            error!("All retry attempts failed");
            return Err(e);
          }
          let delay = match &e {
            Error::RateLimitExceeded {
              retry_after: Some(secs),
            } => Duration::from_secs(*secs),
            _ => self.config.retry_delay,
          };
          warn!("Attempt {} failed: {}. Retrying...", attempt + 1, e);
          tokio::time::sleep(delay).await;
        }
      }
    }

    Err(Error::ApiError {
      code: None,
      description: "Max retry attempts reached".into(),
    })
  }

  async fn try_execute<U: Wire + DeserializeOwned>(&self, request: &EncodedRequest) -> Result<U, Error> {
    let response = self.transport.post(request).await?;
    decode_response(&response)
  }

  pub async fn get_me(&self) -> Result<User, Error> {
    self.send(GetMe {}).await
  }

  pub async fn send_message(
    &self,
    chat_id: impl Into<ChatId>,
    text: impl Into<String>,
  ) -> Result<Message, Error> {
    self.send(SendMessage::new(chat_id, text)).await
  }

  pub async fn get_chat_member(
    &self,
    chat_id: impl Into<ChatId>,
    user_id: i64,
  ) -> Result<ChatMember, Error> {
    self.send(GetChatMember::new(chat_id, user_id)).await
  }
}
