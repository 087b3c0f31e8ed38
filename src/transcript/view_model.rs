use tokio::sync::mpsc;

use crate::common::{ConversationCommand, Message};

/// Derives the one-line display form of a message: the body text alone for
/// the local user, `"<name> says <text>"` for everyone else.
pub fn display_line(message: &Message) -> String {
    if message.from_current_user {
        message.text.clone()
    } else {
        format!("{} says {}", message.name, message.text)
    }
}

/// Owns the rendered transcript of one conversation and keeps it in sync
/// with the authoritative message list held by the messaging collaborator.
///
/// The transcript is rebuilt wholesale from every snapshot; it is never
/// re-sorted or de-duplicated, so its order is always exactly the order of
/// the last list submitted.
pub struct TranscriptViewModel {
    rendered: String,
    command_sender: mpsc::Sender<ConversationCommand>,
}

impl TranscriptViewModel {
    pub fn new(command_sender: mpsc::Sender<ConversationCommand>) -> Self {
        Self {
            rendered: String::new(),
            command_sender,
        }
    }

    /// Replaces the transcript with one derived from the given full message
    /// list (oldest first). Each message contributes one display line
    /// terminated by a line break; an empty list renders as an empty string.
    pub fn submit_full_message_list(&mut self, messages: &[Message]) -> &str {
        let mut rendered = String::new();
        for message in messages {
            rendered.push_str(&display_line(message));
            rendered.push('\n');
        }
        self.rendered = rendered;
        &self.rendered
    }

    /// Hands the text to the collaborator for dispatch. The transcript is
    /// left untouched: the message only appears once the collaborator
    /// notifies back with an updated full list, so a provisional local line
    /// cannot end up rendered twice.
    pub fn record_local_send(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Err(err) = self
            .command_sender
            .try_send(ConversationCommand::SendMessage(text.to_string()))
        {
            log::warn!("Failed to send command to collaborator: {err}");
        }
    }

    /// The most recently rendered transcript.
    pub fn render(&self) -> &str {
        &self.rendered
    }
}
