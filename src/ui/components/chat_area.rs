use eframe::egui;

/// Renders the transcript into a read-only text area.
pub fn render(ui: &mut egui::Ui, transcript: &str) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let mut text = transcript;
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .interactive(false)
                    .desired_width(f32::INFINITY)
                    .desired_rows(16),
            );
        });
}
