//! Fire-and-forget delivery to the configured chat.

use homework_core::{SendMessage, SentMessage, TelegramClient};

use crate::config::Config;
use crate::error::DeliveryError;
use crate::transport::Transport;

/// Sends text to one chat. Delivery failures are logged and dropped: the
/// poll loop reports its own failures through this same path.
#[derive(Debug, Clone)]
pub struct Notifier<T> {
    transport: T,
    client: TelegramClient,
    chat_id: String,
}

impl<T: Transport> Notifier<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            transport,
            client: TelegramClient::new(&config.telegram_api_url, &config.telegram_token),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    pub fn notify(&self, message: &str) {
        match self.deliver(message) {
            Ok(sent) => tracing::info!(message_id = sent.message_id, "Message delivered"),
            Err(err) => tracing::error!(error = %err, "Failed to deliver message"),
        }
    }

    fn deliver(&self, message: &str) -> Result<SentMessage, DeliveryError> {
        let request = self.client.build_send_message(&SendMessage {
            chat_id: self.chat_id.clone(),
            text: message.to_string(),
        })?;
        let response = self.transport.execute(&request)?;
        Ok(self.client.parse_send_message(response)?)
    }
}
