use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent};

use super::components::{chat_area, input_bar};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<NetworkCommand>,
    event_receiver: mpsc::Receiver<NetworkEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        default_user: &str,
        command_sender: mpsc::Sender<NetworkCommand>,
        event_receiver: mpsc::Receiver<NetworkEvent>,
    ) -> Self {
        Self {
            state: AppState::new(default_user),
            command_sender,
            event_receiver,
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                NetworkEvent::MessagesReceived { sender, messages } => {
                    self.state.apply_messages(&sender, &messages);
                }
                NetworkEvent::SendFailed { sender, reason } => {
                    self.state.apply_failure(&sender, &reason);
                }
            }
        }
    }

    fn send(&mut self) {
        let Some(outgoing) = self.state.begin_send() else {
            return;
        };

        if let Err(err) = self
            .command_sender
            .try_send(NetworkCommand::SendMessage(outgoing))
        {
            log::warn!("Failed to send command to network: {err}");
            self.state.abort_send();
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            if input_bar::render(ui, &mut self.state) {
                self.send();
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Vote Chat");
            ui.separator();
            let scroll_to_bottom = self.state.take_scroll_request();
            chat_area::render(ui, &self.state.transcript, scroll_to_bottom);
        });

        // Kết quả từ tầng mạng đến ngoài vòng sự kiện của egui.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
