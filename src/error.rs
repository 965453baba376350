use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request to message service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("message service answered {status}")]
    Status { status: StatusCode },

    #[error("response is not a message list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot write config file: {0}")]
    Config(#[from] std::io::Error),
}
