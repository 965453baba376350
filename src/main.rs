mod common;
mod config;
mod error;
mod network;
mod ui;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use eframe::egui;
use network::{ChatNetwork, MessageClient, exchange};
use tokio::sync::mpsc;
use ui::transcript::TranscriptEntry;
use ui::{AppState, ChatApp};

use crate::common::NetworkEvent;
use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "vote_chat",
    version,
    about = "Desktop client for the vote chat message service"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Base URL of the message service, e.g. http://127.0.0.1:5000
    #[arg(long, value_name = "URL")]
    server_url: Option<String>,
    /// Sender name to pre-fill
    #[arg(long, value_name = "NAME")]
    user: Option<String>,
    /// Write the effective configuration to the config file
    #[arg(long)]
    save_config: bool,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Send one message without opening a window and print the transcript
    Send { text: String },
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = resolve_config(&cli);

    if cli.save_config {
        match config::save_config(&cli.config, &app_config) {
            Ok(()) => log::info!("Saved configuration to {}", cli.config),
            Err(err) => log::error!("Failed to write config {}: {err}", cli.config),
        }
    }

    let client = match MessageClient::new(&app_config) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Cannot build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    if let Some(Mode::Send { text }) = cli.mode {
        if !run_headless(&app_config, client, text).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_full_client(app_config, client).await
}

fn resolve_config(cli: &Cli) -> AppConfig {
    let mut app_config = config::load_config(&cli.config);
    app_config.apply_env(|key| std::env::var(key).ok());

    if let Some(url) = &cli.server_url {
        app_config.server_url = url.clone();
    }
    if let Some(user) = &cli.user {
        app_config.default_user = user.clone();
    }
    app_config
}

/// Chạy một lượt gửi, dùng cùng trạng thái với cửa sổ chat.
async fn run_headless(app_config: &AppConfig, client: MessageClient, text: String) -> bool {
    let mut state = AppState::new(&app_config.default_user);
    state.message_input = text;

    let Some(outgoing) = state.begin_send() else {
        log::warn!("Message is empty; nothing sent");
        return true;
    };

    match exchange(&client, &app_config.content_policy(), outgoing).await {
        NetworkEvent::MessagesReceived { sender, messages } => {
            state.apply_messages(&sender, &messages);
            for entry in &state.transcript {
                println!("{}", transcript_line(entry));
            }
            true
        }
        NetworkEvent::SendFailed { sender, reason } => {
            state.apply_failure(&sender, &reason);
            false
        }
    }
}

fn transcript_line(entry: &TranscriptEntry) -> String {
    let tag = entry.class.class_name().trim_start_matches("msg ");
    format!("[{tag}] {}", entry.plain_text())
}

async fn run_full_client(app_config: AppConfig, client: MessageClient) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy Network Task (Chạy ngầm)
    let network = ChatNetwork::new(client, app_config.content_policy(), event_tx, cmd_rx);
    tokio::spawn(network.run());

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Vote Chat",
        options,
        Box::new(move |cc| {
            log::info!("Client started against {}", app_config.server_url);

            Ok(Box::new(ChatApp::new(
                cc,
                &app_config.default_user,
                cmd_tx,
                event_rx,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server_url: &str, user: &str) -> AppConfig {
        AppConfig {
            server_url: server_url.to_string(),
            default_user: user.to_string(),
            ..AppConfig::default()
        }
    }

    fn client_for(app_config: &AppConfig) -> MessageClient {
        MessageClient::new(app_config).unwrap()
    }

    #[test]
    fn cli_flags_override_file_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let cli = Cli::parse_from([
            "vote_chat",
            "--config",
            missing.to_str().unwrap(),
            "--user",
            "Zed",
            "--server-url",
            "http://cli.test",
        ]);

        let app_config = resolve_config(&cli);
        assert_eq!(app_config.server_url, "http://cli.test");
        assert_eq!(app_config.default_user, "Zed");
        assert!(cli.mode.is_none());
    }

    #[test]
    fn send_subcommand_is_parsed() {
        let cli = Cli::parse_from(["vote_chat", "send", "vote 12"]);
        assert!(cli.mode == Some(Mode::Send { text: "vote 12".into() }));
    }

    #[test]
    fn transcript_lines_carry_class_tag() {
        let policy = AppConfig::default().content_policy();
        let own = policy.classify(common::types::Message {
            from: "Alice".into(),
            text: "hi".into(),
        });
        let bot = policy.classify(common::types::Message {
            from: "VoteBot".into(),
            text: "<strong>A</strong>:1<br>B:2".into(),
        });

        assert_eq!(
            transcript_line(&TranscriptEntry::from_received(&own, "Alice")),
            "[user] Alice: hi"
        );
        assert_eq!(
            transcript_line(&TranscriptEntry::from_received(&bot, "Alice")),
            "[bot] VoteBot: A:1\nB:2"
        );
    }

    #[tokio::test]
    async fn headless_send_reports_server_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/message"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let app_config = config_for(&server.uri(), "Alice");
        let client = client_for(&app_config);
        assert!(!run_headless(&app_config, client, "hi".into()).await);
    }

    #[tokio::test]
    async fn headless_send_succeeds_on_message_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/message"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "messages": [
                    {"from": "Alice", "text": "vote"},
                    {"from": "VoteBot", "text": "Available surveys:<br>1. Lunch"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app_config = config_for(&server.uri(), "Alice");
        let client = client_for(&app_config);
        assert!(run_headless(&app_config, client, "vote".into()).await);
    }

    #[tokio::test]
    async fn headless_send_skips_empty_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"messages": []})))
            .expect(0)
            .mount(&server)
            .await;

        let app_config = config_for(&server.uri(), "");
        let client = client_for(&app_config);
        assert!(run_headless(&app_config, client, String::new()).await);
    }
}
