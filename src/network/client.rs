use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{
    ContentPolicy, NetworkCommand, NetworkEvent, OutgoingMessage, SendResult,
};
use crate::config::AppConfig;
use crate::error::ChatError;

const MESSAGE_PATH: &str = "/api/message";

/// HTTP client cho message service.
pub struct MessageClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MessageClient {
    pub fn new(config: &AppConfig) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: format!("{}{MESSAGE_PATH}", config.server_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Gửi một tin nhắn và trả về danh sách server muốn hiển thị.
    pub async fn submit(&self, outgoing: &OutgoingMessage) -> Result<SendResult, ChatError> {
        log::debug!("POST {} as {}", self.endpoint, outgoing.user);

        let response = self.http.post(&self.endpoint).json(outgoing).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status { status });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Thực hiện một lượt request-response và đổi kết quả thành sự kiện cho UI.
pub async fn exchange(
    client: &MessageClient,
    policy: &ContentPolicy,
    outgoing: OutgoingMessage,
) -> NetworkEvent {
    match client.submit(&outgoing).await {
        Ok(result) => NetworkEvent::MessagesReceived {
            sender: outgoing.user,
            messages: result
                .messages
                .into_iter()
                .map(|message| policy.classify(message))
                .collect(),
        },
        Err(err) => NetworkEvent::SendFailed {
            sender: outgoing.user,
            reason: err.to_string(),
        },
    }
}

/// Tầng mạng: nhận lệnh từ UI, gửi HTTP và trả kết quả về UI.
pub struct ChatNetwork {
    client: Arc<MessageClient>,
    policy: Arc<ContentPolicy>,
    event_sender: mpsc::Sender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
}

impl ChatNetwork {
    pub fn new(
        client: MessageClient,
        policy: ContentPolicy,
        event_sender: mpsc::Sender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
    ) -> Self {
        Self {
            client: Arc::new(client),
            policy: Arc::new(policy),
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("Network loop started for {}", self.client.endpoint());

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                NetworkCommand::SendMessage(outgoing) => {
                    // Mỗi request chạy riêng để vòng lặp không bị chặn.
                    let client = Arc::clone(&self.client);
                    let policy = Arc::clone(&self.policy);
                    let event_sender = self.event_sender.clone();
                    tokio::spawn(async move {
                        let event = exchange(&client, &policy, outgoing).await;
                        if let Err(err) = event_sender.send(event).await {
                            log::warn!("Failed to notify UI about exchange result: {err}");
                        }
                    });
                }
            }
        }

        log::info!("Command channel closed; network loop stopped");
    }
}
