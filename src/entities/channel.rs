use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde_json::Value;

use crate::error::HttpError;
use crate::http::StreamLookup;
use crate::sink::OutputSink;

use super::destination::SendableDestination;

/// A chat channel. Two channels with the same name are the same channel.
#[derive(Clone)]
pub struct Channel {
    http: Arc<dyn StreamLookup>,
    name: String,
    writer: Arc<dyn OutputSink>,
}

impl Channel {
    pub fn new(name: impl Into<String>, writer: Arc<dyn OutputSink>, http: Arc<dyn StreamLookup>) -> Self {
        Self {
            http,
            name: name.into(),
            writer,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Stream data for this channel, `None` when it is not live.
    pub async fn get_stream(&self) -> Result<Option<Value>, HttpError> {
        self.http.get_stream_info(self.name.as_str()).await
    }
}

impl SendableDestination for Channel {
    fn resolve_destination(&self) -> (String, Option<String>) {
        (self.name.clone(), None)
    }

    fn output_sink(&self) -> Arc<dyn OutputSink> {
        self.writer.clone()
    }

    fn kind_name(&self) -> &'static str {
        "Channel"
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").field("name", &self.name).finish()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
