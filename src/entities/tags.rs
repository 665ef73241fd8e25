use std::collections::{BTreeSet, HashMap};
use std::fmt;

use twitch_irc::message::PrivmsgMessage;

pub struct Tag;

impl Tag {
    pub const DISPLAY_NAME: &'static str = "display-name";
    pub const USER_ID: &'static str = "user-id";
    pub const USER_TYPE: &'static str = "user-type";
    pub const COLOR: &'static str = "color";
    pub const SUBSCRIBER: &'static str = "subscriber";
    pub const TURBO: &'static str = "turbo";
    pub const BADGES: &'static str = "badges";
    pub const SENT_TS: &'static str = "sent-ts";
    pub const TMI_SENT_TS: &'static str = "tmi-sent-ts";
}

/// Metadata delivered with a single chat line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet(HashMap<String, String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// First present of `sent-ts` and `tmi-sent-ts`.
    pub fn timestamp(&self) -> Option<&str> {
        self.get(Tag::SENT_TS).or_else(|| self.get(Tag::TMI_SENT_TS))
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for TagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TagSet(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }
}

impl From<HashMap<String, String>> for TagSet {
    fn from(tags: HashMap<String, String>) -> Self {
        TagSet(tags)
    }
}

/// Carries the tags exactly as delivered; valueless tags become `""`.
impl From<&PrivmsgMessage> for TagSet {
    fn from(message: &PrivmsgMessage) -> Self {
        let mut tags: HashMap<String, String> = message.source.tags.0.iter()
            .map(|(key, value)| (key.clone(), value.clone().unwrap_or_default()))
            .collect();

        if !tags.contains_key(Tag::SENT_TS) && !tags.contains_key(Tag::TMI_SENT_TS) {
            tags.insert(Tag::TMI_SENT_TS.to_string(), message.server_timestamp.timestamp_millis().to_string());
        }

        TagSet(tags)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserType {
    Empty,
    Mod,
    GlobalMod,
    Admin,
    Staff,
    Other(String),
}

impl UserType {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") => UserType::Empty,
            Some("mod") => UserType::Mod,
            Some("global_mod") => UserType::GlobalMod,
            Some("admin") => UserType::Admin,
            Some("staff") => UserType::Staff,
            Some(other) => UserType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Empty => write!(f, "Empty"),
            UserType::Mod => write!(f, "mod"),
            UserType::GlobalMod => write!(f, "global_mod"),
            UserType::Admin => write!(f, "admin"),
            UserType::Staff => write!(f, "staff"),
            UserType::Other(other) => write!(f, "{}", other),
        }
    }
}

/// Identity facts extracted from a [`TagSet`].
///
/// `subscriber` and `turbo` are three-valued: `None` means the tag was not
/// delivered (or held something other than `0`/`1`), not `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub id: u64,
    pub user_type: UserType,
    pub colour: Option<String>,
    pub subscriber: Option<bool>,
    pub turbo: Option<bool>,
    pub badges: BTreeSet<String>,
}

impl Identity {
    pub fn parse(tags: &TagSet, author_name: &str) -> Self {
        let id = match tags.get(Tag::USER_ID) {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                log::debug!("Ignoring malformed user-id tag '{}' for '{}'", raw, author_name);
                0
            }),
            None => 0,
        };

        let display_name = tags.get(Tag::DISPLAY_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or(author_name)
            .to_string();

        let badges = tags.get(Tag::BADGES)
            .unwrap_or_default()
            .split(',')
            .filter(|badge| !badge.is_empty())
            .map(String::from)
            .collect();

        Self {
            display_name,
            id,
            user_type: UserType::parse(tags.get(Tag::USER_TYPE)),
            colour: tags.get(Tag::COLOR).filter(|colour| !colour.is_empty()).map(String::from),
            subscriber: parse_flag(tags.get(Tag::SUBSCRIBER)),
            turbo: parse_flag(tags.get(Tag::TURBO)),
            badges,
        }
    }

    /// Checks badge names, ignoring the `/version` suffix.
    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.iter().any(|badge| badge.split('/').next() == Some(name))
    }
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}
