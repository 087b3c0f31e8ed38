use tokio::sync::mpsc;

use crate::common::{ConnectionStatus, ConversationCommand};
use crate::transcript::TranscriptViewModel;

/// Local UI state.
pub struct AppState {
    pub transcript: TranscriptViewModel,
    pub input_text: String,
    pub connection: ConnectionStatus,
    pub unread_count: u32,
    pub initialized: bool,
}

impl AppState {
    pub fn new(command_sender: mpsc::Sender<ConversationCommand>) -> Self {
        Self {
            transcript: TranscriptViewModel::new(command_sender),
            input_text: String::new(),
            connection: ConnectionStatus::Disconnected,
            unread_count: 0,
            initialized: false,
        }
    }
}
