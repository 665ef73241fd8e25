use std::sync::Arc;

use tokio::sync::{mpsc::UnboundedReceiver, RwLock};
use twitch_irc::{ClientConfig, login::StaticLoginCredentials, message::ServerMessage, TwitchIRCClient, WSSTransport};

use crate::commands::processor::MessageProcessor;
use crate::config::Config;
use crate::http::{HelixClient, StreamLookup};
use crate::sink::{IrcWriter, OutputSink};

pub type TwitchChatClient = TwitchIRCClient<WSSTransport, StaticLoginCredentials>;

pub struct Bot {
    pub channels: Vec<String>,
    pub chat_client: Arc<RwLock<TwitchChatClient>>,
    pub chat_incoming_messages: Arc<RwLock<UnboundedReceiver<ServerMessage>>>,
    pub message_processor: Arc<RwLock<MessageProcessor>>,
}

impl Bot {
    pub fn new(config: &Config) -> anyhow::Result<Bot> {
        let twitch = &config.app_config.twitch;

        // Create Twitch chat IRC client
        let (chat_client, chat_incoming_messages) = Bot::create_irc_client(config);

        let chat_client = Arc::new(RwLock::new(chat_client));
        let chat_incoming_messages = Arc::new(RwLock::new(chat_incoming_messages));

        let writer: Arc<dyn OutputSink> = Arc::new(IrcWriter::new(chat_client.clone()));
        let http: Arc<dyn StreamLookup> = Arc::new(HelixClient::new(
            twitch.client_id.clone(),
            twitch.app_access_token.clone(),
            twitch.api_base.clone(),
        ));

        // Create message processor
        let message_processor = MessageProcessor::with_default_commands(
            config.app_config.commands.prefix.clone(),
            writer,
            http,
        )?;
        let message_processor = Arc::new(RwLock::new(message_processor));

        log::info!("Created bot '{}' for channels {:?}", twitch.bot_name, twitch.channels);

        Ok(Bot {
            channels: twitch.channels.clone(),
            chat_client,
            chat_incoming_messages,
            message_processor,
        })
    }

    pub fn create_irc_client(config: &Config) -> (TwitchChatClient, UnboundedReceiver<ServerMessage>) {
        let twitch = &config.app_config.twitch;

        let credentials = match &twitch.user_access_token {
            Some(token) => StaticLoginCredentials::new(twitch.bot_name.clone(), Some(token.clone())),
            None => {
                log::warn!("No user access token configured, connecting anonymously (read-only)");
                StaticLoginCredentials::anonymous()
            },
        };
        let chat_client_config = ClientConfig::new_simple(credentials);

        let (incoming_messages, client) = TwitchChatClient::new(chat_client_config);

        (client, incoming_messages)
    }

    pub async fn start_chat_processor(&self) -> anyhow::Result<()> {
        log::debug!("Starting bot's chat processor");

        let chat_incoming_messages = self.chat_incoming_messages.clone();
        let message_processor = self.message_processor.clone();

        let chat_task_handle = tokio::spawn(async move {
            let mut chat_incoming_messages = chat_incoming_messages.write().await;

            while let Some(message) = chat_incoming_messages.recv().await {
                let message_processor = message_processor.read().await;

                if let Err(error) = message_processor.process_message(&message).await {
                    log::error!("Failed to process message: {}", error);
                }
            }
        });

        {
            let client = self.chat_client.read().await;

            for channel in self.channels.iter() {
                client.join(channel.trim_start_matches('#').to_lowercase());
                log::info!("Joining channel '{}'", channel);
            }
        }

        chat_task_handle.await?;

        Ok(())
    }
}
