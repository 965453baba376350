use crate::common::{MessageBody, ReceivedMessage};

use super::markup::{self, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    User,
    Bot,
}

impl EntryClass {
    pub fn class_name(self) -> &'static str {
        match self {
            EntryClass::User => "msg user",
            EntryClass::Bot => "msg bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    /// Rendered literally, nothing inside is interpreted.
    Plain(String),
    Rich(Markup),
}

/// One rendered row of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub class: EntryClass,
    pub content: EntryContent,
}

impl TranscriptEntry {
    /// `sender` is the name the request was sent with, compared byte for byte.
    pub fn from_received(message: &ReceivedMessage, sender: &str) -> Self {
        let class = if message.from == sender {
            EntryClass::User
        } else {
            EntryClass::Bot
        };

        let content = match &message.body {
            MessageBody::RichContent(text) => EntryContent::Rich(markup::parse(&format!(
                "<strong>{}:</strong> {text}",
                message.from
            ))),
            MessageBody::PlainText(text) => {
                EntryContent::Plain(format!("{}: {text}", message.from))
            }
        };

        Self { class, content }
    }

    pub fn plain_text(&self) -> String {
        match &self.content {
            EntryContent::Plain(text) => text.clone(),
            EntryContent::Rich(markup) => markup.plain_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::markup::Span;

    fn plain(from: &str, text: &str) -> ReceivedMessage {
        ReceivedMessage {
            from: from.to_string(),
            body: MessageBody::PlainText(text.to_string()),
        }
    }

    fn rich(from: &str, text: &str) -> ReceivedMessage {
        ReceivedMessage {
            from: from.to_string(),
            body: MessageBody::RichContent(text.to_string()),
        }
    }

    #[test]
    fn own_message_is_user_class() {
        let entry = TranscriptEntry::from_received(&plain("Alice", "hi"), "Alice");
        assert_eq!(entry.class.class_name(), "msg user");
        assert_eq!(entry.content, EntryContent::Plain("Alice: hi".into()));
    }

    #[test]
    fn classification_is_byte_exact() {
        for sender in ["alice", "Alice ", " Alice", "ALICE"] {
            let entry = TranscriptEntry::from_received(&plain("Alice", "hi"), sender);
            assert_eq!(entry.class, EntryClass::Bot, "sender {sender:?}");
        }
    }

    #[test]
    fn plain_text_keeps_markup_literal() {
        let entry = TranscriptEntry::from_received(&plain("Mallory", "<b>x</b>&amp;"), "Bob");
        assert_eq!(entry.plain_text(), "Mallory: <b>x</b>&amp;");
    }

    #[test]
    fn rich_content_gets_bold_sender_prefix() {
        let entry = TranscriptEntry::from_received(&rich("VoteBot", "A:1<br>B:2"), "Alice");
        assert_eq!(entry.class, EntryClass::Bot);
        let EntryContent::Rich(markup) = &entry.content else {
            panic!("expected rich content");
        };
        assert_eq!(
            markup.lines[0][0],
            Span {
                text: "VoteBot:".into(),
                bold: true
            }
        );
        assert_eq!(entry.plain_text(), "VoteBot: A:1\nB:2");
    }

    #[test]
    fn user_named_like_the_bot_is_still_user_class() {
        let entry = TranscriptEntry::from_received(&rich("VoteBot", "hi"), "VoteBot");
        assert_eq!(entry.class, EntryClass::User);
    }
}
