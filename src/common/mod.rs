pub mod commands;
pub mod events;
pub mod types;

pub use commands::NetworkCommand;
pub use events::NetworkEvent;
pub use types::{
    ContentPolicy, DEFAULT_USER, MessageBody, OutgoingMessage, ReceivedMessage,
    SendResult, VOTE_BOT,
};
