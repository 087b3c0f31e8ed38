use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ConnectionStatus, ConversationCommand, ConversationEvent};

use super::components::{chat_area, input_bar};
use super::state::AppState;

/// Thin display adapter binding the transcript view-model to egui. All
/// transcript logic lives in the view-model; this type only drains
/// collaborator events and routes user input.
pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ConversationCommand>,
    event_receiver: mpsc::Receiver<ConversationEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ConversationCommand>,
        event_receiver: mpsc::Receiver<ConversationEvent>,
    ) -> Self {
        Self {
            state: AppState::new(command_sender.clone()),
            command_sender,
            event_receiver,
        }
    }

    fn handle_conversation_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ConversationEvent::MessagesReceived(messages)
                | ConversationEvent::MessagesReset(messages) => {
                    self.state.transcript.submit_full_message_list(&messages);
                }
                ConversationEvent::InitializationCompleted(messages) => {
                    self.state.initialized = true;
                    self.state.transcript.submit_full_message_list(&messages);
                }
                ConversationEvent::MessageSent { id, status } => {
                    log::debug!("Message {id} upload status: {status:?}");
                }
                ConversationEvent::ConnectionStatusChanged(status) => {
                    self.state.connection = status;
                }
                ConversationEvent::UnreadCountChanged(count) => {
                    self.state.unread_count = count;
                }
            }
        }
    }

    fn request_reset(&mut self) {
        if let Err(err) = self
            .command_sender
            .try_send(ConversationCommand::ResetConversation)
        {
            log::warn!("Failed to send command to collaborator: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_conversation_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Conversation");
                if ui.button("Reset").clicked() {
                    self.request_reset();
                }
            });

            ui.horizontal(|ui| {
                match self.state.connection {
                    ConnectionStatus::Connected => {
                        ui.colored_label(egui::Color32::GREEN, "●");
                        ui.label("connected");
                    }
                    ConnectionStatus::Disconnected => {
                        ui.colored_label(egui::Color32::RED, "●");
                        ui.label("disconnected");
                    }
                }
                if !self.state.initialized {
                    ui.label(egui::RichText::new("(initializing...)").weak());
                }
                if self.state.unread_count > 0 {
                    ui.label(format!("{} unread", self.state.unread_count));
                }
            });
            ui.separator();

            chat_area::render(ui, self.state.transcript.render());

            ui.separator();
            if let Some(content) = input_bar::render(ui, &mut self.state.input_text) {
                self.state.transcript.record_local_send(&content);
            }
        });

        ctx.request_repaint();
    }
}
