use std::sync::Arc;

use twitch_irc::message::{AsRawIRC, PrivmsgMessage, ServerMessage};

use crate::entities::channel::Channel;
use crate::entities::context::Context;
use crate::entities::destination::SendableDestination;
use crate::entities::message::{clean_content, Message};
use crate::entities::tags::TagSet;
use crate::entities::user::User;
use crate::error::{BindError, MessageError, RegistrationError};
use crate::http::StreamLookup;
use crate::sink::OutputSink;

use super::{default_commands, CommandItem};
use super::descriptor::Command;

pub struct MessageProcessor {
    commands: Vec<CommandItem>,
    http: Arc<dyn StreamLookup>,
    prefix: String,
    writer: Arc<dyn OutputSink>,
}

impl MessageProcessor {
    pub fn new(prefix: impl Into<String>, writer: Arc<dyn OutputSink>, http: Arc<dyn StreamLookup>) -> Self {
        Self {
            commands: vec![],
            http,
            prefix: prefix.into(),
            writer,
        }
    }

    /// Processor with every built-in command registered.
    pub fn with_default_commands(
        prefix: impl Into<String>,
        writer: Arc<dyn OutputSink>,
        http: Arc<dyn StreamLookup>,
    ) -> Result<Self, RegistrationError> {
        let mut processor = Self::new(prefix, writer, http);

        for command in default_commands() {
            processor.register(command)?;
        }

        Ok(processor)
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn register(&mut self, command: CommandItem) -> Result<(), RegistrationError> {
        let command_info = command.get_command_info();
        command_info.validate()?;

        let name = command_info.get_name().to_string();
        if self.find_matching_command(name.as_str()).is_some() {
            return Err(RegistrationError::DuplicateCommand(name));
        }

        log::debug!("Registered command '{}'", name);
        self.commands.push(command);

        Ok(())
    }

    pub fn find_matching_command(&self, name: &str) -> Option<&CommandItem> {
        self.commands.iter().find(|command| command.get_command_info().get_name() == name)
    }

    pub fn build_message(&self, privmsg: &PrivmsgMessage) -> Result<Message, MessageError> {
        let tags = TagSet::from(privmsg);
        let channel = Channel::new(format!("#{}", privmsg.channel_login), self.writer.clone(), self.http.clone());
        let author = User::new(privmsg.sender.login.clone(), channel.clone(), tags.clone());

        Message::new(
            author,
            channel,
            privmsg.message_text.clone(),
            clean_content(privmsg.message_text.as_str()),
            Some(privmsg.source.as_raw_irc()),
            tags,
        )
    }

    pub async fn process_message(&self, message: &ServerMessage) -> anyhow::Result<()> {
        match message {
            ServerMessage::ClearChat(message) => {
                log::info!("Chat in channel '{}' has been cleared", message.channel_login);
            },
            ServerMessage::Join(message) => {
                log::info!("Joined channel '{}'", message.channel_login);
            },
            ServerMessage::Notice(message) => {
                log::info!("NOTICE: {}", message.message_text);
            },
            ServerMessage::Part(message) => {
                log::info!("Left channel '{}'", message.channel_login);
            },
            ServerMessage::Privmsg(privmsg) => {
                log::info!("<{}>: {}", privmsg.sender.name, privmsg.message_text);

                let message = self.build_message(privmsg)?;
                self.handle_message(message).await?;
            },
            ServerMessage::Reconnect(_) => {
                log::debug!("Reconnected");
            },
            ServerMessage::UserNotice(message) => {
                log::info!("USER NOTICE: {}", message.message_text.clone().unwrap_or_else(|| "none".to_string()));
            },
            ServerMessage::Whisper(message) => {
                log::info!("<{}> whispered: {}", message.sender.name, message.message_text);
            },
            _ => {}
        }

        Ok(())
    }

    /// Resolves a chat message to a command, binds its arguments and runs it.
    ///
    /// Messages without the prefix or naming an unknown command are ignored.
    /// Whitespace between the prefix and the command name is skipped, so
    /// `"! paint red"` runs `paint`. Missing arguments are reported back to
    /// the channel.
    pub async fn handle_message(&self, message: Message) -> anyhow::Result<()> {
        let remainder = match message.clean_content().strip_prefix(self.prefix.as_str()) {
            Some(remainder) => remainder,
            None => return Ok(()),
        };

        let mut tokens = tokenize(remainder).into_iter();
        let name = match tokens.next() {
            Some(name) => name,
            None => return Ok(()),
        };
        let tokens: Vec<String> = tokens.collect();

        let command = match self.find_matching_command(name.as_str()) {
            Some(command) => command,
            None => {
                log::debug!("No command named '{}', ignoring", name);
                return Ok(());
            },
        };

        let command_info = command.get_command_info();
        let bound = match command_info.bind_arguments(&tokens) {
            Ok(bound) => bound,
            Err(error @ BindError::MissingRequiredArguments { .. }) => {
                log::warn!("{} (invoked by {} in {})", error, message.author, message.channel);
                message.channel.send(error.to_string().as_str())?;

                return Ok(());
            },
            Err(error) => return Err(error.into()),
        };

        log::debug!("Running '{}' for {} with {:?} {:?}", name, message.author, bound.positional, bound.keyword);

        let channel = message.channel.clone();
        let author = message.author.clone();
        let ctx = Context::new(
            message,
            channel,
            author,
            Some(self.prefix.clone()),
            Some(command_info.clone()),
            bound.positional,
            bound.keyword,
        );

        command.execute(ctx).await
    }
}

/// Splits command text on whitespace; double quotes group words into one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = vec![];
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in text.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            },
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            },
            c => {
                current.push(c);
                in_token = true;
            },
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}
