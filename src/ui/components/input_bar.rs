use eframe::egui;

/// Single-line entry with a send button. Returns the entered text and
/// clears the field when the user sends.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type a message")
                .desired_width(f32::INFINITY),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send && !input_text.trim().is_empty() {
        let message = input_text.trim().to_string();
        input_text.clear();
        return Some(message);
    }

    None
}
