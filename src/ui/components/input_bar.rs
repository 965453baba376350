use eframe::egui;

use crate::common::DEFAULT_USER;
use crate::ui::state::AppState;

/// Returns `true` when Send was clicked or Enter was pressed in the message field.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(
            egui::TextEdit::singleline(&mut state.user_input)
                .desired_width(120.0)
                .hint_text(DEFAULT_USER),
        );

        let response = ui.add(
            egui::TextEdit::singleline(&mut state.message_input)
                .desired_width((ui.available_width() - 70.0).max(80.0))
                .hint_text("Type a message"),
        );

        let idle = !state.is_in_flight();
        if ui.add_enabled(idle, egui::Button::new("Send")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    send
}
