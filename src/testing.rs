use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::entities::channel::Channel;
use crate::entities::context::Context;
use crate::entities::message::Message;
use crate::entities::tags::TagSet;
use crate::entities::user::User;
use crate::error::HttpError;
use crate::http::StreamLookup;
use crate::sink::OutputSink;

#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl OutputSink for RecordingSink {
    fn send_privmsg(&self, channel: &str, content: &str) {
        self.lines.lock().unwrap().push((channel.to_string(), content.to_string()));
    }
}

enum CannedResult {
    Offline,
    Live(Value),
    Failing(u16),
}

pub struct CannedStreams {
    requested: Mutex<Vec<String>>,
    result: CannedResult,
}

impl CannedStreams {
    fn with(result: CannedResult) -> Self {
        Self { requested: Mutex::new(vec![]), result }
    }

    pub fn offline() -> Self {
        Self::with(CannedResult::Offline)
    }

    pub fn live(channel: &str, title: &str) -> Self {
        Self::with(CannedResult::Live(json!({
            "user_login": channel.trim_start_matches('#'),
            "title": title,
            "viewer_count": 7,
        })))
    }

    pub fn failing(status: u16) -> Self {
        Self::with(CannedResult::Failing(status))
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StreamLookup for CannedStreams {
    async fn get_stream_info(&self, channel_name: &str) -> Result<Option<Value>, HttpError> {
        self.requested.lock().unwrap().push(channel_name.to_string());

        match &self.result {
            CannedResult::Offline => Ok(None),
            CannedResult::Live(stream) => Ok(Some(stream.clone())),
            CannedResult::Failing(status) => Err(HttpError::Status { status: *status, body: "bad request".to_string() }),
        }
    }
}

pub fn fixture_channel(sink: Arc<RecordingSink>) -> Channel {
    Channel::new("#art", sink, Arc::new(CannedStreams::offline()))
}

pub fn fixture_tags() -> TagSet {
    vec![
        ("user-id", "42"),
        ("display-name", "Bob"),
        ("tmi-sent-ts", "1600000000000"),
    ].into_iter().collect()
}

/// Message from `bob` in `#art` carrying `text`.
pub fn build_message(channel: Channel, text: &str) -> Message {
    let tags = fixture_tags();
    let author = User::new("bob", channel.clone(), tags.clone());

    Message::new(author, channel, text.to_string(), text.to_string(), None, tags).unwrap()
}

pub fn fixture_message(text: &str) -> (Arc<RecordingSink>, Message) {
    let sink = Arc::new(RecordingSink::default());
    let message = build_message(fixture_channel(sink.clone()), text);

    (sink, message)
}

pub fn fixture_context_with(text: &str, streams: Arc<CannedStreams>) -> (Arc<RecordingSink>, Context) {
    let sink = Arc::new(RecordingSink::default());
    let channel = Channel::new("#art", sink.clone(), streams);
    let message = build_message(channel.clone(), text);
    let author = message.author.clone();

    let context = Context::new(message, channel, author, Some("!".to_string()), None, vec![], HashMap::new());

    (sink, context)
}

pub fn fixture_context(text: &str) -> (Arc<RecordingSink>, Context) {
    fixture_context_with(text, Arc::new(CannedStreams::offline()))
}
