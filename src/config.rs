use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name attached to outbound messages.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Display name of the remote agent.
    #[serde(default = "default_agent_name")]
    pub agent_name: String,
    /// Whether the agent replies to every outbound message.
    #[serde(default = "default_auto_reply")]
    pub auto_reply: bool,
    /// Optional agent message seeded into a fresh conversation.
    #[serde(default)]
    pub greeting: Option<String>,
}

fn default_display_name() -> String {
    "Me".to_string()
}

fn default_agent_name() -> String {
    "Agent".to_string()
}

fn default_auto_reply() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            agent_name: default_agent_name(),
            auto_reply: default_auto_reply(),
            greeting: None,
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
