use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::MessageError;
use crate::sink::OutputSink;

use super::channel::Channel;
use super::destination::SendableDestination;
use super::tags::TagSet;
use super::user::User;

/// Characters chat clients inject that carry no meaning for commands.
const FILLER_CHARS: &[char] = &['\u{E0000}', '\u{200B}'];

#[derive(Clone, Debug)]
pub struct Message {
    pub author: User,
    pub channel: Channel,
    clean_content: String,
    content: String,
    raw_data: Option<String>,
    tags: TagSet,
    timestamp: String,
}

impl Message {
    pub fn new(
        author: User,
        channel: Channel,
        content: String,
        clean_content: String,
        raw_data: Option<String>,
        tags: TagSet,
    ) -> Result<Self, MessageError> {
        let timestamp = tags.timestamp().ok_or(MessageError::MissingTimestamp)?.to_string();

        Ok(Self {
            author,
            channel,
            clean_content,
            content,
            raw_data,
            tags,
            timestamp,
        })
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn clean_content(&self) -> &str {
        self.clean_content.as_str()
    }

    pub fn raw_data(&self) -> Option<&str> {
        self.raw_data.as_deref()
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Raw protocol timestamp, milliseconds since the epoch.
    pub fn timestamp(&self) -> &str {
        self.timestamp.as_str()
    }

    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.timestamp.parse::<i64>().ok()?;

        Utc.timestamp_millis_opt(millis).single()
    }
}

impl SendableDestination for Message {
    fn resolve_destination(&self) -> (String, Option<String>) {
        (self.channel.name().to_string(), None)
    }

    fn output_sink(&self) -> Arc<dyn OutputSink> {
        self.channel.output_sink()
    }

    fn kind_name(&self) -> &'static str {
        "Message"
    }
}

/// Strips control characters and client filler from chat text.
pub fn clean_content(content: &str) -> String {
    content.chars()
        .filter(|c| !c.is_control() && !FILLER_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_channel, RecordingSink};

    fn build(tags: TagSet) -> Result<Message, MessageError> {
        let channel = fixture_channel(Arc::new(RecordingSink::default()));
        let author = User::new("bob", channel.clone(), tags.clone());

        Message::new(author, channel, "hi".to_string(), "hi".to_string(), None, tags)
    }

    #[test]
    fn message_requires_a_timestamp() {
        let tags: TagSet = vec![("user-id", "42")].into_iter().collect();

        assert_eq!(build(tags).unwrap_err(), MessageError::MissingTimestamp);
    }

    #[test]
    fn message_accepts_either_timestamp_tag() {
        let sent: TagSet = vec![("sent-ts", "1600000000000")].into_iter().collect();
        let tmi: TagSet = vec![("tmi-sent-ts", "1600000000001")].into_iter().collect();

        assert_eq!(build(sent).unwrap().timestamp(), "1600000000000");
        assert_eq!(build(tmi).unwrap().timestamp(), "1600000000001");
    }

    #[test]
    fn posted_at_converts_milliseconds() {
        let tags: TagSet = vec![("tmi-sent-ts", "1600000000000")].into_iter().collect();
        let message = build(tags).unwrap();

        assert_eq!(message.posted_at(), Some(Utc.timestamp_millis_opt(1_600_000_000_000).unwrap()));
    }

    #[test]
    fn clean_content_drops_filler() {
        assert_eq!(clean_content("!echo hi \u{E0000}"), "!echo hi");
        assert_eq!(clean_content("\u{1}ACTION waves\u{1}"), "ACTION waves");
        assert_eq!(clean_content("  plain  "), "plain");
    }
}
