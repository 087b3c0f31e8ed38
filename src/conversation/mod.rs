mod client;

pub use client::ConversationClient;
