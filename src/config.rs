use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ContentPolicy, VOTE_BOT};
use crate::error::ChatError;

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

pub const SERVER_URL_ENV: &str = "VOTE_CHAT_SERVER_URL";
pub const USER_ENV: &str = "VOTE_CHAT_USER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Pre-fills the name field; empty means the request falls back to `User`.
    #[serde(default)]
    pub default_user: String,
    /// No timeout when absent.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_rich_senders")]
    pub rich_senders: Vec<String>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_rich_senders() -> Vec<String> {
    vec![VOTE_BOT.to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_user: String::new(),
            request_timeout_secs: None,
            rich_senders: default_rich_senders(),
        }
    }
}

impl AppConfig {
    /// Applies `VOTE_CHAT_*` variables; `lookup` is usually `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVER_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.server_url = url.trim().to_string();
        }
        if let Some(user) = lookup(USER_ENV) {
            self.default_user = user;
        }
    }

    pub fn content_policy(&self) -> ContentPolicy {
        ContentPolicy::new(self.rich_senders.iter().cloned())
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> Result<(), ChatError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::from)?;
    fs::write(path, json)?;
    Ok(())
}
