use serde::{Deserialize, Serialize};

/// Delivery state reported by the messaging collaborator.
/// Consumed (at most logged) by the transcript layer, never produced there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Failed,
}

/// A single conversation message, owned by the messaging collaborator.
/// The transcript layer treats this as read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Display name of the sender.
    pub name: String,
    pub text: String,
    pub from_current_user: bool,
    pub status: DeliveryStatus,
    pub timestamp: i64,
}
