/// Requests the transcript layer sends down to the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationCommand {
    SendMessage(String),
    /// Drop all conversation state and start over from the greeting.
    ResetConversation,
}
