pub mod commands;
pub mod events;
pub mod types;

pub use commands::ConversationCommand;
pub use events::{ConnectionStatus, ConversationEvent};
pub use types::{DeliveryStatus, Message};
