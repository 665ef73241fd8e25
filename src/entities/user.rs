use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::sink::OutputSink;

use super::channel::Channel;
use super::destination::SendableDestination;
use super::tags::{Identity, TagSet, UserType};

/// Snapshot of a chatter as seen on one message or event.
///
/// The channel is the one the triggering line arrived on; the same person
/// may be present in other channels too.
#[derive(Clone, Debug)]
pub struct User {
    channel: Channel,
    identity: Identity,
    name: String,
    tags: TagSet,
}

impl User {
    pub fn new(name: impl Into<String>, channel: Channel, tags: TagSet) -> Self {
        let name = name.into();
        let identity = Identity::parse(&tags, name.as_str());

        Self {
            channel,
            identity,
            name,
            tags,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn display_name(&self) -> &str {
        self.identity.display_name.as_str()
    }

    /// Numeric user id, 0 when the protocol did not deliver one.
    pub fn id(&self) -> u64 {
        self.identity.id
    }

    pub fn user_type(&self) -> &UserType {
        &self.identity.user_type
    }

    pub fn colour(&self) -> Option<&str> {
        self.identity.colour.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.colour()
    }

    pub fn is_subscriber(&self) -> Option<bool> {
        self.identity.subscriber
    }

    pub fn is_turbo(&self) -> Option<bool> {
        self.identity.turbo
    }

    pub fn badges(&self) -> &BTreeSet<String> {
        &self.identity.badges
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

impl SendableDestination for User {
    fn resolve_destination(&self) -> (String, Option<String>) {
        (self.channel.name().to_string(), Some(self.name.clone()))
    }

    fn output_sink(&self) -> Arc<dyn OutputSink> {
        self.channel.output_sink()
    }

    fn kind_name(&self) -> &'static str {
        "User"
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
