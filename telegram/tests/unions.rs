// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::{collections::BTreeSet, fmt::Debug};
use telegram::{
  decode_entity, decode_value,
  schema::Wire,
  types::*,
  union, BanUntil, DecodeError, InputFile, ParseMode, Union,
};
use url::Url;

fn user() -> User {
  User::new(42, "Ann")
}

fn restricted(until_date: Option<BanUntil>) -> ChatMemberRestricted {
  ChatMemberRestricted {
    user: user(),
    is_member: true,
    can_change_info: false,
    can_invite_users: true,
    can_pin_messages: false,
    can_send_messages: true,
    can_send_audios: false,
    can_send_documents: false,
    can_send_photos: true,
    can_send_videos: false,
    can_send_video_notes: false,
    can_send_voice_notes: false,
    can_send_polls: false,
    can_send_other_messages: false,
    can_add_web_page_previews: false,
    until_date,
    can_manage_topics: None,
  }
}

fn administrator() -> ChatMemberAdministrator {
  ChatMemberAdministrator {
    user: user(),
    can_be_edited: false,
    is_anonymous: false,
    can_manage_chat: true,
    can_delete_messages: true,
    can_manage_video_chats: false,
    can_restrict_members: true,
    can_promote_members: false,
    can_change_info: true,
    can_invite_users: true,
    can_post_messages: Some(true),
    can_edit_messages: Some(false),
    can_pin_messages: Some(true),
    can_post_stories: None,
    can_edit_stories: None,
    can_delete_stories: None,
    can_manage_topics: Some(true),
    custom_title: Some("root".into()),
  }
}

fn all_members() -> Vec<ChatMember> {
  let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
  vec![
    ChatMember::Owner(ChatMemberOwner {
      user: user(),
      is_anonymous: false,
      custom_title: None,
    }),
    ChatMember::Owner(ChatMemberOwner {
      user: user(),
      is_anonymous: true,
      custom_title: Some("boss".into()),
    }),
    ChatMember::Administrator(administrator()),
    ChatMember::Member(ChatMemberMember { user: user() }),
    ChatMember::Restricted(restricted(None)),
    ChatMember::Restricted(restricted(Some(BanUntil::At(at)))),
    ChatMember::Restricted(restricted(Some(BanUntil::Forever))),
    ChatMember::Left(ChatMemberLeft { user: user() }),
    ChatMember::Banned(ChatMemberBanned {
      user: user(),
      until_date: None,
    }),
    ChatMember::Banned(ChatMemberBanned {
      user: user(),
      until_date: Some(BanUntil::Forever),
    }),
  ]
}

#[test]
fn every_chat_member_shape_round_trips() {
  for member in all_members() {
    let wire = union::encode(&member).unwrap();
    let object = wire.as_object().unwrap();
    assert_eq!(object.keys().next().map(String::as_str), Some("status"));
    assert_eq!(object["status"], json!(member.tag().unwrap()));

    let decoded: ChatMember = union::decode(wire).unwrap();
    assert_eq!(decoded, member);
  }
}

#[test]
fn kicked_decodes_to_banned_member() {
  let member: ChatMember = decode_value(json!({
    "status": "kicked",
    "user": {"id": 42, "is_bot": false, "first_name": "Ann"},
    "until_date": 0
  }))
  .unwrap();
  assert_eq!(
    member,
    ChatMember::Banned(ChatMemberBanned {
      user: user(),
      until_date: None,
    })
  );
  assert!(!member.is_member());
}

#[test]
fn ban_until_sentinels_on_the_wire() {
  let forever: ChatMember = decode_value(json!({
    "status": "kicked",
    "user": {"id": 42, "is_bot": false, "first_name": "Ann"},
    "until_date": 2147483647
  }))
  .unwrap();
  match forever {
    ChatMember::Banned(banned) => assert_eq!(banned.until_date, Some(BanUntil::Forever)),
    other => panic!("unexpected {other:?}"),
  }

  let banned = ChatMember::Banned(ChatMemberBanned {
    user: user(),
    until_date: None,
  });
  assert_eq!(union::encode(&banned).unwrap()["until_date"], json!(0));

  let restricted = union::encode(&ChatMember::Restricted(restricted(None))).unwrap();
  assert!(restricted.get("until_date").is_none());
}

#[test]
fn unknown_status_is_preserved() {
  let wire = json!({"status": "not-a-real-status"});
  let member: ChatMember = decode_value(wire.clone()).unwrap();
  match &member {
    ChatMember::Unknown(raw) => {
      assert_eq!(raw.tag, "not-a-real-status");
      assert!(raw.fields.is_empty());
    }
    other => panic!("unexpected {other:?}"),
  }
  assert_eq!(member.user(), None);
  assert_eq!(serde_json::to_value(&member).unwrap(), wire);
}

#[test]
fn missing_status() {
  let err = decode_entity::<ChatMember>(br#"{"user": {"id": 1}}"#).unwrap_err();
  assert!(matches!(
    err,
    DecodeError::MissingDiscriminator { family: "ChatMember", ref field } if field == "status"
  ));
}

#[test]
fn non_string_status() {
  let err = decode_value::<ChatMember>(json!({"status": 5})).unwrap_err();
  assert!(matches!(err, DecodeError::TypeMismatch { expected: "string", actual: "integer", .. }));
}

#[test]
fn member_fields_are_checked_against_the_selected_shape() {
  let err = decode_value::<ChatMember>(json!({
    "status": "restricted",
    "user": {"id": 42, "is_bot": false, "first_name": "Ann"},
    "is_member": true
  }))
  .unwrap_err();
  assert!(matches!(
    err,
    DecodeError::MissingRequiredField { shape: "ChatMemberRestricted", ref field } if field == "can_change_info"
  ));
}

#[test]
fn forwarded_message_origin() {
  let message: Message = decode_entity(
    br#"{
      "message_id": 10,
      "date": 1700000100,
      "chat": {"id": 42, "type": "private", "first_name": "Ann"},
      "forward_origin": {
        "type": "hidden_user",
        "date": 1700000000,
        "sender_user_name": "Someone"
      },
      "reply_to_message": {
        "message_id": 9,
        "date": 1700000050,
        "chat": {"id": 42, "type": "private", "first_name": "Ann"},
        "text": "earlier"
      },
      "text": "hi"
    }"#,
  )
  .unwrap();

  let origin = message.forward_origin.as_ref().unwrap();
  assert_eq!(origin.tag(), Some("hidden_user"));
  assert_eq!(origin.date().unwrap().timestamp(), 1700000000);
  assert_eq!(
    message.reply_to_message.as_ref().unwrap().text.as_deref(),
    Some("earlier")
  );
}

#[test]
fn nested_origin_errors_carry_the_path() {
  let err = decode_value::<Message>(json!({
    "message_id": 10,
    "date": 1700000100,
    "chat": {"id": 42, "type": "private"},
    "forward_origin": {"type": "channel", "date": 1700000000, "message_id": 3}
  }))
  .unwrap_err();
  assert!(matches!(
    err,
    DecodeError::MissingRequiredField { shape: "MessageOriginChannel", ref field } if field == "forward_origin.chat"
  ));
}

/// Encodes and decodes every value, then checks that `values` covers every
/// tag the family registers.
fn assert_round_trips<U>(values: &[U])
where
  U: Union + Wire + DeserializeOwned + PartialEq + Debug,
{
  let family = U::family();
  let mut seen = BTreeSet::new();
  for value in values {
    let wire = union::encode(value).unwrap();
    let object = wire.as_object().unwrap();
    assert_eq!(object.keys().next().map(String::as_str), Some(family.discriminator));

    let tag = value.tag().unwrap();
    assert_eq!(object[family.discriminator], json!(tag));
    seen.insert(tag.to_owned());

    assert_eq!(&decode_value::<U>(wire).unwrap(), value, "{tag} did not survive a round trip");
  }
  let registered: BTreeSet<_> = family.tags().map(str::to_owned).collect();
  assert_eq!(seen, registered, "{} tags not covered", family.name);
}

#[test]
fn message_origins_round_trip() {
  let date = Utc.timestamp_opt(1700000000, 0).unwrap();
  let channel = Chat {
    id: -100500,
    kind: ChatType::Channel,
    title: Some("News".into()),
    username: Some("news".into()),
    first_name: None,
    last_name: None,
    is_forum: Some(false),
  };
  let origins = vec![
    MessageOrigin::User(MessageOriginUser {
      date,
      sender_user: user(),
    }),
    MessageOrigin::HiddenUser(MessageOriginHiddenUser {
      date,
      sender_user_name: "Someone".into(),
    }),
    MessageOrigin::Chat(MessageOriginChat {
      date,
      sender_chat: Chat::private(7, "Bob"),
      author_signature: None,
    }),
    MessageOrigin::Chat(MessageOriginChat {
      date,
      sender_chat: channel.clone(),
      author_signature: Some("editor".into()),
    }),
    MessageOrigin::Channel(MessageOriginChannel {
      date,
      chat: Chat::private(7, "Bob"),
      message_id: 3,
      author_signature: None,
    }),
    MessageOrigin::Channel(MessageOriginChannel {
      date,
      chat: channel,
      message_id: i32::MAX,
      author_signature: Some("editor".into()),
    }),
  ];

  for origin in &origins {
    assert_eq!(serde_json::to_value(origin).unwrap()["date"], json!(1700000000));
  }
  assert_round_trips(&origins);

  let future: MessageOrigin = decode_value(json!({"type": "story", "date": 1700000000})).unwrap();
  assert!(matches!(future, MessageOrigin::Unknown(_)));
  assert_eq!(future.date(), Some(date));
}

#[test]
fn every_chat_member_tag_is_covered() {
  assert_round_trips(&all_members());
}

fn media(id: &str) -> InputFile {
  InputFile::id(id)
}

fn thumbnail() -> Option<InputFile> {
  Some(Url::parse("https://example.com/thumb.jpg").unwrap().into())
}

fn all_media() -> Vec<InputMedia> {
  vec![
    InputMedia::photo(media("AgAD")),
    InputMedia::Photo(InputMediaPhoto {
      media: Url::parse("https://example.com/cat.jpg").unwrap().into(),
      caption: Some("*cat*".into()),
      parse_mode: Some(ParseMode::MarkdownV2),
      has_spoiler: Some(true),
    }),
    InputMedia::Video(InputMediaVideo {
      media: media("BAAD"),
      caption: None,
      parse_mode: None,
      thumbnail: None,
      width: None,
      height: None,
      duration: None,
      supports_streaming: None,
      has_spoiler: None,
    }),
    InputMedia::Video(InputMediaVideo {
      media: media("BAAD"),
      caption: Some("clip".into()),
      parse_mode: Some(ParseMode::Html),
      thumbnail: thumbnail(),
      width: Some(1280),
      height: Some(720),
      duration: Some(42),
      supports_streaming: Some(true),
      has_spoiler: Some(false),
    }),
    InputMedia::Animation(InputMediaAnimation {
      media: media("CgAD"),
      caption: None,
      parse_mode: None,
      thumbnail: None,
      width: None,
      height: None,
      duration: None,
      has_spoiler: None,
    }),
    InputMedia::Animation(InputMediaAnimation {
      media: media("CgAD"),
      caption: Some("loop".into()),
      parse_mode: Some(ParseMode::Markdown),
      thumbnail: thumbnail(),
      width: Some(320),
      height: Some(240),
      duration: Some(2),
      has_spoiler: Some(true),
    }),
    InputMedia::Audio(InputMediaAudio {
      media: media("CQAD"),
      caption: None,
      parse_mode: None,
      thumbnail: None,
      duration: None,
      performer: None,
      title: None,
    }),
    InputMedia::Audio(InputMediaAudio {
      media: media("CQAD"),
      caption: Some("track".into()),
      parse_mode: Some(ParseMode::Html),
      thumbnail: thumbnail(),
      duration: Some(215),
      performer: Some("Band".into()),
      title: Some("Song".into()),
    }),
    InputMedia::document(media("BQAD")),
    InputMedia::Document(InputMediaDocument {
      media: media("BQAD"),
      caption: Some("report".into()),
      parse_mode: Some(ParseMode::Html),
      thumbnail: thumbnail(),
      disable_content_type_detection: Some(true),
    }),
  ]
}

#[test]
fn every_input_media_kind_round_trips() {
  assert_round_trips(&all_media());
}

fn keyboard() -> Option<InlineKeyboardMarkup> {
  Some(InlineKeyboardMarkup::new(vec![vec![
    InlineKeyboardButton::url("Open", "https://example.com"),
    InlineKeyboardButton::callback("More", "more"),
  ]]))
}

fn text(message: &str) -> Option<InputMessageContent> {
  Some(InputMessageContent::Text(InputTextMessageContent {
    message_text: message.into(),
    parse_mode: Some(ParseMode::Html),
  }))
}

fn full_results() -> Vec<InlineQueryResult> {
  let mut article = InlineQueryResultArticle::new("1", "Hello", InputMessageContent::text("hi"));
  article.reply_markup = keyboard();
  article.url = Some("https://example.com".into());
  article.hide_url = Some(true);
  article.description = Some("greeting".into());
  article.thumbnail_url = Some("https://example.com/t.jpg".into());
  article.thumbnail_width = Some(64);
  article.thumbnail_height = Some(64);

  let mut audio = InlineQueryResultAudio::new("2", AudioSource::url("https://example.com/a.mp3"));
  audio.title = Some("Song".into());
  audio.caption = Some("listen".into());
  audio.parse_mode = Some(ParseMode::Html);
  audio.performer = Some("Band".into());
  audio.audio_duration = Some(215);
  audio.reply_markup = keyboard();
  audio.input_message_content = text("audio");

  let contact = InlineQueryResultContact {
    id: "3".into(),
    phone_number: "+10000000000".into(),
    first_name: "Ann".into(),
    last_name: Some("Lee".into()),
    vcard: Some("BEGIN:VCARD".into()),
    reply_markup: keyboard(),
    input_message_content: Some(InputMessageContent::Contact(InputContactMessageContent {
      phone_number: "+10000000000".into(),
      first_name: "Ann".into(),
      last_name: None,
      vcard: None,
    })),
    thumbnail_url: Some("https://example.com/ann.jpg".into()),
  };

  let mut document = InlineQueryResultDocument::new("4", "Report", DocumentSource::file_id("BQAD"));
  document.mime_type = Some("application/pdf".into());
  document.caption = Some("Q3".into());
  document.parse_mode = Some(ParseMode::MarkdownV2);
  document.description = Some("quarterly".into());
  document.reply_markup = keyboard();
  document.input_message_content = text("document");
  document.thumbnail_url = Some("https://example.com/pdf.jpg".into());

  let game = InlineQueryResultGame {
    id: "5".into(),
    game_short_name: "tetris".into(),
    reply_markup: keyboard(),
  };

  let mut gif = InlineQueryResultGif::new("6", GifSource::url("https://example.com/a.gif"));
  gif.gif_width = Some(320);
  gif.gif_height = Some(240);
  gif.gif_duration = Some(2);
  gif.thumbnail_url = Some("https://example.com/a.jpg".into());
  gif.title = Some("loop".into());
  gif.caption = Some("fun".into());
  gif.parse_mode = Some(ParseMode::Html);
  gif.reply_markup = keyboard();
  gif.input_message_content = text("gif");

  let location = InlineQueryResultLocation {
    id: "7".into(),
    latitude: 59.9375,
    longitude: 30.3125,
    title: "Office".into(),
    horizontal_accuracy: Some(12.5),
    live_period: Some(900),
    reply_markup: keyboard(),
    input_message_content: Some(InputMessageContent::Location(InputLocationMessageContent {
      latitude: 59.9375,
      longitude: 30.3125,
      horizontal_accuracy: None,
      live_period: Some(60),
    })),
    thumbnail_url: Some("https://example.com/map.jpg".into()),
  };

  let mut mpeg4 = InlineQueryResultMpeg4Gif::new("8", Mpeg4GifSource::file_id("CgAD"));
  mpeg4.mpeg4_width = Some(480);
  mpeg4.mpeg4_height = Some(270);
  mpeg4.mpeg4_duration = Some(4);
  mpeg4.thumbnail_url = Some("https://example.com/m.jpg".into());
  mpeg4.title = Some("clip".into());
  mpeg4.caption = Some("watch".into());
  mpeg4.parse_mode = Some(ParseMode::Markdown);
  mpeg4.reply_markup = keyboard();
  mpeg4.input_message_content = text("mpeg4");

  let mut photo = InlineQueryResultPhoto::new("9", PhotoSource::url("https://example.com/p.jpg"));
  photo.thumbnail_url = Some("https://example.com/p_small.jpg".into());
  photo.photo_width = Some(800);
  photo.photo_height = Some(600);
  photo.title = Some("Cat".into());
  photo.description = Some("a cat".into());
  photo.caption = Some("meow".into());
  photo.parse_mode = Some(ParseMode::Html);
  photo.reply_markup = keyboard();
  photo.input_message_content = text("photo");

  let sticker = InlineQueryResultSticker {
    id: "10".into(),
    sticker_file_id: "CAACAgIAAxk".into(),
    reply_markup: keyboard(),
    input_message_content: text("sticker"),
  };

  let venue = InlineQueryResultVenue {
    id: "11".into(),
    latitude: 59.9375,
    longitude: 30.3125,
    title: "Office".into(),
    address: "Main st. 1".into(),
    foursquare_id: Some("4b0588".into()),
    google_place_id: Some("ChIJ".into()),
    reply_markup: keyboard(),
    input_message_content: Some(InputMessageContent::Venue(InputVenueMessageContent {
      latitude: 59.9375,
      longitude: 30.3125,
      title: "Office".into(),
      address: "Main st. 1".into(),
      foursquare_id: None,
      foursquare_type: None,
      google_place_id: Some("ChIJ".into()),
      google_place_type: Some("office".into()),
    })),
    thumbnail_url: Some("https://example.com/venue.jpg".into()),
  };

  let mut video = InlineQueryResultVideo::new("12", "Trailer", VideoSource::url("https://example.com/v.mp4"));
  video.mime_type = Some("video/mp4".into());
  video.thumbnail_url = Some("https://example.com/v.jpg".into());
  video.caption = Some("soon".into());
  video.parse_mode = Some(ParseMode::Html);
  video.video_width = Some(1920);
  video.video_height = Some(1080);
  video.video_duration = Some(120);
  video.description = Some("official".into());
  video.reply_markup = keyboard();
  video.input_message_content = text("video");

  let mut voice = InlineQueryResultVoice::new("13", "Memo", VoiceSource::file_id("AwAD"));
  voice.caption = Some("listen".into());
  voice.parse_mode = Some(ParseMode::Html);
  voice.voice_duration = Some(7);
  voice.reply_markup = keyboard();
  voice.input_message_content = text("voice");

  vec![
    article.into(),
    audio.into(),
    contact.into(),
    document.into(),
    game.into(),
    gif.into(),
    location.into(),
    mpeg4.into(),
    photo.into(),
    sticker.into(),
    venue.into(),
    video.into(),
    voice.into(),
  ]
}

fn minimal_results() -> Vec<InlineQueryResult> {
  vec![
    InlineQueryResultArticle::new("1", "Hello", InputMessageContent::text("hi")).into(),
    InlineQueryResultAudio::new("2", AudioSource::file_id("CQAD")).into(),
    InlineQueryResultContact {
      id: "3".into(),
      phone_number: "+10000000000".into(),
      first_name: "Ann".into(),
      last_name: None,
      vcard: None,
      reply_markup: None,
      input_message_content: None,
      thumbnail_url: None,
    }
    .into(),
    InlineQueryResultDocument::new("4", "Report", DocumentSource::url("https://example.com/r.pdf")).into(),
    InlineQueryResultGame {
      id: "5".into(),
      game_short_name: "tetris".into(),
      reply_markup: None,
    }
    .into(),
    InlineQueryResultGif::new("6", GifSource::file_id("CgAD")).into(),
    InlineQueryResultLocation {
      id: "7".into(),
      latitude: 0.5,
      longitude: -0.5,
      title: "Null island".into(),
      horizontal_accuracy: None,
      live_period: None,
      reply_markup: None,
      input_message_content: None,
      thumbnail_url: None,
    }
    .into(),
    InlineQueryResultMpeg4Gif::new("8", Mpeg4GifSource::url("https://example.com/m.mp4")).into(),
    InlineQueryResultPhoto::new("9", PhotoSource::file_id("AgAD")).into(),
    InlineQueryResult::cached_sticker("10", "CAACAgIAAxk"),
    InlineQueryResultVenue {
      id: "11".into(),
      latitude: 0.5,
      longitude: -0.5,
      title: "Office".into(),
      address: "Main st. 1".into(),
      foursquare_id: None,
      google_place_id: None,
      reply_markup: None,
      input_message_content: None,
      thumbnail_url: None,
    }
    .into(),
    InlineQueryResultVideo::new("12", "Trailer", VideoSource::file_id("BAAD")).into(),
    InlineQueryResultVoice::new("13", "Memo", VoiceSource::url("https://example.com/v.ogg")).into(),
  ]
}

#[test]
fn every_inline_result_kind_round_trips() {
  assert_round_trips(&minimal_results());
  assert_round_trips(&full_results());
}

#[test]
fn minimal_results_carry_only_required_keys() {
  for result in minimal_results() {
    let wire = union::encode(&result).unwrap();
    let shape = result.shape().unwrap();
    let required = shape.fields.iter().filter(|field| field.is_required()).count();
    // the discriminator plus one key per required field
    assert_eq!(wire.as_object().unwrap().len(), required + 1, "{}", shape.name);
  }
}

#[test]
fn command_scopes_are_strict() {
  let scopes = vec![
    BotCommandScope::default(),
    BotCommandScope::all_private_chats(),
    BotCommandScope::all_group_chats(),
    BotCommandScope::all_chat_administrators(),
    BotCommandScope::chat(-100123),
    BotCommandScope::chat_administrators("@news"),
    BotCommandScope::chat_member(-100123, 42),
  ];
  for scope in &scopes {
    let wire = serde_json::to_value(scope).unwrap();
    assert_eq!(&decode_value::<BotCommandScope>(wire).unwrap(), scope);
  }

  assert_eq!(
    serde_json::to_string(&BotCommandScope::chat_member("@news", 42)).unwrap(),
    r#"{"type":"chat_member","chat_id":"@news","user_id":42}"#
  );
  assert_eq!(
    BotCommandScope::family().tags().collect::<Vec<_>>().len(),
    scopes.len()
  );

  let err = decode_value::<BotCommandScope>(json!({"type": "everyone"})).unwrap_err();
  assert!(matches!(err, DecodeError::UnknownDiscriminator { family: "BotCommandScope", .. }));
}

fn assert_family<U: Union>() {
  let family = U::family();
  for tag in family.tags() {
    let shape = family.resolve_by_tag(tag).unwrap();
    assert_eq!(family.resolve_by_shape(shape), Some(tag));

    let leading: Vec<_> = shape.fields.iter().take(family.base.len()).map(|f| f.name).collect();
    assert_eq!(leading, family.base, "{} does not start with the base fields", shape.name);
  }
}

#[test]
fn registries_are_consistent() {
  assert_family::<ChatMember>();
  assert_family::<MessageOrigin>();
  assert_family::<BotCommandScope>();
  assert_family::<InlineQueryResult>();
  assert_family::<InputMedia>();
  assert!(ChatMember::family().resolve_by_tag("banned").is_none());
}

#[test]
fn message_id_beyond_32_bits_is_rejected() {
  let err = decode_value::<Message>(json!({
    "message_id": 4294967296u64,
    "date": 1700000100,
    "chat": {"id": 42, "type": "private"}
  }))
  .unwrap_err();
  assert!(matches!(
    err,
    DecodeError::TypeMismatch { shape: "Message", ref field, expected: "32-bit integer", actual: "integer" }
      if field == "message_id"
  ));

  let err = decode_value::<Message>(json!({
    "message_id": 10,
    "date": 1700000100,
    "chat": {"id": 42, "type": "private"},
    "forward_origin": {"type": "channel", "date": 1700000000, "chat": {"id": -1, "type": "channel"}, "message_id": -2147483649i64}
  }))
  .unwrap_err();
  assert!(matches!(
    err,
    DecodeError::TypeMismatch { shape: "MessageOriginChannel", ref field, .. } if field == "forward_origin.message_id"
  ));
}
