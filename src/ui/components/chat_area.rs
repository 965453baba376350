use eframe::egui;

use crate::ui::transcript::{EntryClass, EntryContent, TranscriptEntry};

pub fn render(ui: &mut egui::Ui, transcript: &[TranscriptEntry], scroll_to_bottom: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in transcript {
                render_entry(ui, entry);
                ui.add_space(4.0);
            }

            if scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn render_entry(ui: &mut egui::Ui, entry: &TranscriptEntry) {
    // "msg user" is blue, "msg bot" uses the default text colour
    let color = match entry.class {
        EntryClass::User => egui::Color32::LIGHT_BLUE,
        EntryClass::Bot => ui.visuals().text_color(),
    };

    match &entry.content {
        EntryContent::Plain(text) => {
            ui.label(egui::RichText::new(text).color(color));
        }
        EntryContent::Rich(markup) => {
            for line in &markup.lines {
                if line.is_empty() {
                    ui.label("");
                    continue;
                }
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for span in line {
                        let mut text = egui::RichText::new(&span.text).color(color);
                        if span.bold {
                            text = text.strong();
                        }
                        ui.label(text);
                    }
                });
            }
        }
    }
}
