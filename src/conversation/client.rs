use std::collections::VecDeque;
use std::error::Error;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time;
use uuid::Uuid;

use crate::common::{
    ConnectionStatus, ConversationCommand, ConversationEvent, DeliveryStatus, Message,
};
use crate::config::AppConfig;

/// Delay before a queued agent reply is delivered, measured from the last
/// loop wakeup.
const REPLY_DELAY: Duration = Duration::from_millis(800);

/// In-process messaging collaborator.
///
/// Owns the authoritative ordered message list for one conversation and
/// pushes `ConversationEvent`s up to the display layer. Sends are echoed
/// back as full snapshots rather than acknowledged in place, so the
/// transcript layer always re-derives from the authoritative list.
pub struct ConversationClient {
    event_sender: mpsc::Sender<ConversationEvent>,
    command_receiver: mpsc::Receiver<ConversationCommand>,
    messages: Vec<Message>,
    display_name: String,
    agent_name: String,
    auto_reply: bool,
    greeting: Option<String>,
    pending_replies: VecDeque<String>,
    unread_count: u32,
}

impl ConversationClient {
    pub fn new(
        event_sender: mpsc::Sender<ConversationEvent>,
        command_receiver: mpsc::Receiver<ConversationCommand>,
        config: AppConfig,
    ) -> Self {
        let mut client = Self {
            event_sender,
            command_receiver,
            messages: Vec::new(),
            display_name: config.display_name,
            agent_name: config.agent_name,
            auto_reply: config.auto_reply,
            greeting: config.greeting,
            pending_replies: VecDeque::new(),
            unread_count: 0,
        };
        client.seed_greeting();
        client
    }

    pub async fn run(mut self) -> Result<(), Box<dyn Error>> {
        self.event_sender
            .send(ConversationEvent::ConnectionStatusChanged(
                ConnectionStatus::Connected,
            ))
            .await?;
        self.event_sender
            .send(ConversationEvent::InitializationCompleted(
                self.messages.clone(),
            ))
            .await?;
        log::info!("Conversation event loop started");

        loop {
            tokio::select! {
                command = self.command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await?,
                        None => break,
                    }
                }
                _ = time::sleep(REPLY_DELAY), if !self.pending_replies.is_empty() => {
                    self.deliver_pending_reply().await?;
                }
            }
        }

        log::info!("Command channel closed, conversation loop stopping");
        Ok(())
    }

    async fn handle_command(
        &mut self,
        command: ConversationCommand,
    ) -> Result<(), Box<dyn Error>> {
        match command {
            ConversationCommand::SendMessage(text) => {
                let id = Uuid::new_v4().to_string();
                self.messages.push(Message {
                    id: id.clone(),
                    name: self.display_name.clone(),
                    text: text.clone(),
                    from_current_user: true,
                    status: DeliveryStatus::Pending,
                    timestamp: Utc::now().timestamp(),
                });

                // No real transport behind this collaborator, so the upload
                // settles immediately.
                if let Some(message) = self.messages.last_mut() {
                    message.status = DeliveryStatus::Sent;
                }
                self.event_sender
                    .send(ConversationEvent::MessageSent {
                        id,
                        status: DeliveryStatus::Sent,
                    })
                    .await?;
                self.event_sender
                    .send(ConversationEvent::MessagesReceived(self.messages.clone()))
                    .await?;
                self.mark_conversation_read().await?;

                if self.auto_reply {
                    self.pending_replies.push_back(agent_reply(&text));
                }
            }
            ConversationCommand::ResetConversation => {
                log::info!("Resetting conversation state");
                self.messages.clear();
                self.pending_replies.clear();
                self.seed_greeting();
                self.unread_count = 0;
                self.event_sender
                    .send(ConversationEvent::MessagesReset(self.messages.clone()))
                    .await?;
                self.event_sender
                    .send(ConversationEvent::UnreadCountChanged(0))
                    .await?;
            }
        }

        Ok(())
    }

    async fn deliver_pending_reply(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(text) = self.pending_replies.pop_front() else {
            return Ok(());
        };

        self.messages.push(Message {
            id: Uuid::new_v4().to_string(),
            name: self.agent_name.clone(),
            text,
            from_current_user: false,
            status: DeliveryStatus::Sent,
            timestamp: Utc::now().timestamp(),
        });
        self.unread_count += 1;

        self.event_sender
            .send(ConversationEvent::MessagesReceived(self.messages.clone()))
            .await?;
        self.event_sender
            .send(ConversationEvent::UnreadCountChanged(self.unread_count))
            .await?;
        Ok(())
    }

    /// Sending counts as reading the conversation.
    async fn mark_conversation_read(&mut self) -> Result<(), Box<dyn Error>> {
        if self.unread_count != 0 {
            self.unread_count = 0;
            self.event_sender
                .send(ConversationEvent::UnreadCountChanged(0))
                .await?;
        }
        Ok(())
    }

    fn seed_greeting(&mut self) {
        if let Some(text) = &self.greeting {
            self.messages.push(Message {
                id: Uuid::new_v4().to_string(),
                name: self.agent_name.clone(),
                text: text.clone(),
                from_current_user: false,
                status: DeliveryStatus::Sent,
                timestamp: Utc::now().timestamp(),
            });
        }
    }
}

fn agent_reply(text: &str) -> String {
    format!("You said \"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            display_name: "Me".to_string(),
            agent_name: "Bob".to_string(),
            auto_reply: false,
            greeting: Some("hello there".to_string()),
        }
    }

    fn spawn_client(
        config: AppConfig,
    ) -> (
        mpsc::Sender<ConversationCommand>,
        mpsc::Receiver<ConversationEvent>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(32);
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        let client = ConversationClient::new(event_tx, cmd_rx, config);
        tokio::spawn(async move {
            let _ = client.run().await;
        });
        (cmd_tx, event_rx)
    }

    #[tokio::test]
    async fn startup_reports_connected_then_initial_snapshot() {
        let (_cmd_tx, mut event_rx) = spawn_client(test_config());

        assert!(matches!(
            event_rx.recv().await,
            Some(ConversationEvent::ConnectionStatusChanged(
                ConnectionStatus::Connected
            ))
        ));

        match event_rx.recv().await {
            Some(ConversationEvent::InitializationCompleted(messages)) => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].text, "hello there");
                assert_eq!(messages[0].name, "Bob");
                assert!(!messages[0].from_current_user);
            }
            other => panic!("expected initial snapshot, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_is_echoed_as_an_authoritative_snapshot() {
        let (cmd_tx, mut event_rx) = spawn_client(test_config());
        event_rx.recv().await; // connected
        event_rx.recv().await; // initial snapshot

        cmd_tx
            .send(ConversationCommand::SendMessage("hi".to_string()))
            .await
            .unwrap();

        match event_rx.recv().await {
            Some(ConversationEvent::MessageSent { status, .. }) => {
                assert_eq!(status, DeliveryStatus::Sent);
            }
            other => panic!("expected upload status, got {other:?}"),
        }

        match event_rx.recv().await {
            Some(ConversationEvent::MessagesReceived(messages)) => {
                assert_eq!(messages.len(), 2);
                let sent = messages.last().unwrap();
                assert_eq!(sent.text, "hi");
                assert!(sent.from_current_user);
                assert_eq!(sent.status, DeliveryStatus::Sent);
            }
            other => panic!("expected snapshot with the sent message, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn auto_reply_arrives_as_a_later_snapshot() {
        let mut config = test_config();
        config.auto_reply = true;
        let (cmd_tx, mut event_rx) = spawn_client(config);
        event_rx.recv().await; // connected
        event_rx.recv().await; // initial snapshot

        cmd_tx
            .send(ConversationCommand::SendMessage("hi".to_string()))
            .await
            .unwrap();
        event_rx.recv().await; // upload status
        event_rx.recv().await; // echo snapshot

        match event_rx.recv().await {
            Some(ConversationEvent::MessagesReceived(messages)) => {
                let reply = messages.last().unwrap();
                assert_eq!(reply.name, "Bob");
                assert_eq!(reply.text, "You said \"hi\"");
                assert!(!reply.from_current_user);
            }
            other => panic!("expected reply snapshot, got {other:?}"),
        }

        assert!(matches!(
            event_rx.recv().await,
            Some(ConversationEvent::UnreadCountChanged(1))
        ));
    }

    #[tokio::test]
    async fn reset_restores_the_greeting_only_snapshot() {
        let (cmd_tx, mut event_rx) = spawn_client(test_config());
        event_rx.recv().await; // connected
        event_rx.recv().await; // initial snapshot

        cmd_tx
            .send(ConversationCommand::SendMessage("hi".to_string()))
            .await
            .unwrap();
        event_rx.recv().await; // upload status
        event_rx.recv().await; // echo snapshot

        cmd_tx
            .send(ConversationCommand::ResetConversation)
            .await
            .unwrap();

        match event_rx.recv().await {
            Some(ConversationEvent::MessagesReset(messages)) => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].text, "hello there");
            }
            other => panic!("expected reset snapshot, got {other:?}"),
        }

        assert!(matches!(
            event_rx.recv().await,
            Some(ConversationEvent::UnreadCountChanged(0))
        ));
    }
}
