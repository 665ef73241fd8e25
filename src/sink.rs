use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc::{self, UnboundedSender}, RwLock};

use crate::bot::TwitchChatClient;

/// Outbound side of a chat connection.
///
/// One sink is shared by every entity built from the same connection; the
/// implementation is responsible for serializing concurrent sends.
pub trait OutputSink: Send + Sync {
    fn send_privmsg(&self, channel: &str, content: &str);
}

/// Sink writing `PRIVMSG` lines through the Twitch IRC client.
///
/// Lines are queued and written one at a time by a single task, in the
/// order `send_privmsg` was called.
pub struct IrcWriter {
    queue: UnboundedSender<(String, String)>,
}

impl IrcWriter {
    pub fn new(chat_client: Arc<RwLock<TwitchChatClient>>) -> Self {
        Self::with_delivery(move |channel, message| {
            let client = chat_client.clone();

            async move {
                let client = client.read().await;
                let result = client.privmsg(channel.clone(), message.clone()).await;

                if result.is_err() {
                    log::error!("Failed to send privmsg to channel '{}'!", channel);
                } else {
                    log::info!("ME: {}", message);
                }
            }
        })
    }

    /// Spawns the writer task; `deliver` is awaited for each queued line
    /// before the next one is taken.
    pub(crate) fn with_delivery<F, Fut>(mut deliver: F) -> Self
    where
        F: FnMut(String, String) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (queue, mut lines) = mpsc::unbounded_channel::<(String, String)>();

        tokio::spawn(async move {
            while let Some((channel, message)) = lines.recv().await {
                deliver(channel, message).await;
            }

            log::debug!("IRC writer queue closed");
        });

        Self { queue }
    }
}

impl OutputSink for IrcWriter {
    fn send_privmsg(&self, channel: &str, content: &str) {
        let channel = channel.trim_start_matches('#').to_string();

        if self.queue.send((channel.clone(), content.to_string())).is_err() {
            log::error!("IRC writer has stopped, dropping privmsg to channel '{}'", channel);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn lines_are_written_in_call_order() {
        let written: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(vec![]));
        let record = written.clone();

        let writer = IrcWriter::with_delivery(move |channel, message| {
            let record = record.clone();

            async move {
                // The first line is the slowest to go out.
                let delay = if message == "a" { 30 } else { 1 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                record.lock().unwrap().push((channel, message));
            }
        });

        writer.send_privmsg("#art", "a");
        writer.send_privmsg("#art", "b");
        writer.send_privmsg("#music", "c");

        for _ in 0..100 {
            if written.lock().unwrap().len() == 3 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert_eq!(written.lock().unwrap().clone(), vec![
            ("art".to_string(), "a".to_string()),
            ("art".to_string(), "b".to_string()),
            ("music".to_string(), "c".to_string()),
        ]);
    }
}
