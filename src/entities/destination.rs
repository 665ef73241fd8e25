use std::sync::Arc;

use enum_dispatch::enum_dispatch;

use crate::error::SendError;
use crate::sink::OutputSink;

use super::channel::Channel;
use super::context::Context;
use super::message::Message;
use super::user::User;

/// Longest chat line Twitch accepts, in characters.
pub const MAX_CONTENT_LENGTH: usize = 500;

/// Anything a reply can be sent to.
///
/// Only the first three methods are implemented per entity; the rest are
/// built on top of them.
#[enum_dispatch(Destination)]
pub trait SendableDestination {
    /// Channel to write into, plus the addressed member for user targets.
    fn resolve_destination(&self) -> (String, Option<String>);

    fn output_sink(&self) -> Arc<dyn OutputSink>;

    fn kind_name(&self) -> &'static str;

    fn send(&self, content: &str) -> Result<(), SendError> {
        let length = content.chars().count();
        if length > MAX_CONTENT_LENGTH {
            return Err(SendError::ContentTooLong { length, limit: MAX_CONTENT_LENGTH });
        }

        let (channel, member) = self.resolve_destination();
        let sink = self.output_sink();

        match member {
            Some(member) => {
                sink.send_privmsg(channel.as_str(), format!(".w {} {}", member, content).as_str());
            },
            _ => sink.send_privmsg(channel.as_str(), content),
        }

        Ok(())
    }

    fn send_me(&self, content: &str) -> Result<(), SendError> {
        self.send(format!("/me {}", content).as_str())
    }

    fn timeout(&self, user: &str, seconds: u64, reason: &str) -> Result<(), SendError> {
        self.send(format!(".timeout {} {} {}", user, seconds, reason).trim_end())
    }

    fn ban(&self, user: &str, reason: &str) -> Result<(), SendError> {
        self.send(format!(".ban {} {}", user, reason).trim_end())
    }

    fn unban(&self, user: &str) -> Result<(), SendError> {
        self.send(format!(".unban {}", user).as_str())
    }
}

/// Closed set of reply targets.
#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum Destination {
    Message,
    Channel,
    User,
    Context,
}
