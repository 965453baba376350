use super::types::OutgoingMessage;

/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Gửi một tin nhắn tới `POST /api/message`.
    SendMessage(OutgoingMessage),
}
