use crate::common::{DEFAULT_USER, OutgoingMessage, ReceivedMessage};

use super::transcript::TranscriptEntry;

/// Trạng thái cục bộ của UI.
///
/// Chỉ `ChatApp` ghi vào đây; transcript chỉ được nối thêm, không bao giờ xoá.
#[derive(Debug, Default)]
pub struct AppState {
    pub user_input: String,
    pub message_input: String,
    pub transcript: Vec<TranscriptEntry>,
    in_flight: bool,
    scroll_to_bottom: bool,
}

impl AppState {
    pub fn new(default_user: &str) -> Self {
        Self {
            user_input: default_user.to_string(),
            ..Self::default()
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Tên người gửi hiện tại, `User` nếu ô tên trống.
    pub fn sender_name(&self) -> String {
        let user = self.user_input.trim();
        if user.is_empty() {
            DEFAULT_USER.to_string()
        } else {
            user.to_string()
        }
    }

    /// Bắt đầu gửi; `None` nếu tin nhắn trống hoặc đang có request chưa xong.
    pub fn begin_send(&mut self) -> Option<OutgoingMessage> {
        if self.in_flight || self.message_input.is_empty() {
            return None;
        }

        self.in_flight = true;
        Some(OutgoingMessage {
            user: self.sender_name(),
            text: self.message_input.clone(),
        })
    }

    /// Bỏ cờ in-flight khi lệnh không tới được tầng mạng.
    pub fn abort_send(&mut self) {
        self.in_flight = false;
    }

    pub fn apply_messages(&mut self, sender: &str, messages: &[ReceivedMessage]) {
        self.transcript.extend(
            messages
                .iter()
                .map(|message| TranscriptEntry::from_received(message, sender)),
        );
        self.message_input.clear();
        self.scroll_to_bottom = true;
        self.in_flight = false;
    }

    pub fn apply_failure(&mut self, sender: &str, reason: &str) {
        log::error!("Sending message as {sender} failed: {reason}");
        self.in_flight = false;
    }

    /// Trả về yêu cầu cuộn xuống cuối, chỉ một lần.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}
