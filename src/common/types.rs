use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tên người gửi mặc định khi ô tên để trống.
pub const DEFAULT_USER: &str = "User";

/// Người gửi có nội dung là markup dựng sẵn, trừ khi cấu hình khác.
pub const VOTE_BOT: &str = "VoteBot";

/// Domain model đại diện một tin nhắn chat (đúng định dạng trên dây).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub text: String,
}

/// Phản hồi của server: danh sách tin nhắn cần hiển thị, theo đúng thứ tự.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub messages: Vec<Message>,
}

/// Body của request `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub user: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    PlainText(String),
    /// Markup từ người gửi tin cậy, ví dụ bảng kết quả bình chọn.
    RichContent(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub from: String,
    pub body: MessageBody,
}

/// Quyết định người gửi nào được phép gửi markup.
///
/// Chỉ so sánh tên, nên bất kỳ ai gửi dưới một trong các tên này
/// đều được hiển thị nội dung dưới dạng markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPolicy {
    rich_senders: BTreeSet<String>,
}

impl ContentPolicy {
    pub fn new<I, S>(rich_senders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rich_senders: rich_senders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_rich_sender(&self, from: &str) -> bool {
        self.rich_senders.contains(from)
    }

    pub fn classify(&self, message: Message) -> ReceivedMessage {
        let body = if self.is_rich_sender(&message.from) {
            MessageBody::RichContent(message.text)
        } else {
            MessageBody::PlainText(message.text)
        };
        ReceivedMessage {
            from: message.from,
            body,
        }
    }
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self::new([VOTE_BOT])
    }
}
