use super::types::ReceivedMessage;

/// Sự kiện từ tầng mạng gửi lên UI.
///
/// `sender` là tên người gửi đã dùng cho request, được giữ lại trước khi gửi.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    MessagesReceived {
        sender: String,
        messages: Vec<ReceivedMessage>,
    },
    SendFailed {
        sender: String,
        reason: String,
    },
}
