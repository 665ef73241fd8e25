use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::commands::descriptor::CommandDescriptor;
use crate::error::HttpError;
use crate::sink::OutputSink;

use super::channel::Channel;
use super::destination::SendableDestination;
use super::message::Message;
use super::user::User;

/// Everything a command handler gets to see about one invocation.
///
/// Replies sent through the context always go to the channel the message
/// came from, never to the author directly.
#[derive(Clone, Debug)]
pub struct Context {
    pub message: Message,
    pub channel: Channel,
    pub author: User,
    pub prefix: Option<String>,
    pub command: Option<CommandDescriptor>,
    pub args: Vec<String>,
    pub kwargs: HashMap<String, String>,
}

impl Context {
    pub fn new(
        message: Message,
        channel: Channel,
        author: User,
        prefix: Option<String>,
        command: Option<CommandDescriptor>,
        args: Vec<String>,
        kwargs: HashMap<String, String>,
    ) -> Self {
        Self {
            message,
            channel,
            author,
            prefix,
            command,
            args,
            kwargs,
        }
    }

    pub fn content(&self) -> &str {
        self.message.content()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn kwarg(&self, name: &str) -> Option<&str> {
        self.kwargs.get(name).map(String::as_str)
    }

    pub async fn get_stream(&self) -> Result<Option<Value>, HttpError> {
        self.channel.get_stream().await
    }
}

impl SendableDestination for Context {
    fn resolve_destination(&self) -> (String, Option<String>) {
        self.channel.resolve_destination()
    }

    fn output_sink(&self) -> Arc<dyn OutputSink> {
        self.channel.output_sink()
    }

    fn kind_name(&self) -> &'static str {
        "Context"
    }
}
