use crate::common::types::{DeliveryStatus, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// Events the messaging collaborator pushes up to the display layer.
///
/// Snapshot-carrying events always hold the complete authoritative message
/// list, oldest first. The remaining variants are lifecycle notifications
/// with no transcript effect.
#[derive(Debug, Clone)]
pub enum ConversationEvent {
    /// New messages arrived; carries the refreshed full list.
    MessagesReceived(Vec<Message>),
    /// Conversation state was replaced wholesale.
    MessagesReset(Vec<Message>),
    /// The collaborator became ready; carries the initial full list.
    InitializationCompleted(Vec<Message>),
    MessageSent { id: String, status: DeliveryStatus },
    ConnectionStatusChanged(ConnectionStatus),
    UnreadCountChanged(u32),
}
