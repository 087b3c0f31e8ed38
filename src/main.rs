mod common;
mod config;
mod conversation;
mod transcript;
mod ui;

use clap::Parser;
use conversation::ConversationClient;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "chat_transcript",
    version,
    about = "Desktop chat client with a transcript view-model"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the display name from the config file
    #[arg(long)]
    name: Option<String>,
    /// Disable the agent auto-reply
    #[arg(long)]
    no_auto_reply: bool,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if !std::path::Path::new(&cli.config).exists() {
        if let Err(err) = config::save_config(&cli.config, &config::AppConfig::default()) {
            log::warn!("Failed to write default config {}: {err}", cli.config);
        }
    }
    let mut app_config = config::load_config(&cli.config);
    if let Some(name) = cli.name {
        app_config.display_name = name;
    }
    if cli.no_auto_reply {
        app_config.auto_reply = false;
    }

    // UI -> collaborator
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Collaborator -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // The messaging collaborator runs on its own task; the UI only ever
    // talks to it through the two channels.
    tokio::spawn(async move {
        let client = ConversationClient::new(event_tx, cmd_rx, app_config);
        if let Err(err) = client.run().await {
            log::error!("Conversation client terminated: {err}");
        }
    });

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Chat Transcript",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            Ok(Box::new(ChatApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
