//! Mini-app Host Module
//!
//! This module contains the adapter to the chat-platform host runtime:
//! - Command and button models
//! - The single-handler button subscription
//! - The `HostBridge` port with Telegram and preview implementations

pub mod bridge;
pub mod button;
pub mod models;

use serde::Deserialize;
use std::str::FromStr;

pub use bridge::{
    HostBridge, PreviewBridge, TelegramBridge, OUTBOX_LIMIT, PREVIEW_DELIVERY_PREFIX,
    PREVIEW_ORDER_PREFIX, PREVIEW_REQUEST_PREFIX,
};
pub use button::ButtonSubscription;
pub use models::{ButtonAction, ButtonParams, HostCommand};

/// Header a host shell sets when the page runs inside Telegram.
pub const TELEGRAM_INIT_DATA_HEADER: &str = "x-telegram-init-data";

/// Which bridge new sessions receive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Decide per session from the first request.
    #[default]
    Auto,
    Telegram,
    Preview,
}

impl FromStr for HostMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "telegram" => Ok(Self::Telegram),
            "preview" => Ok(Self::Preview),
            other => Err(format!("unknown host mode '{other}' (expected auto, telegram or preview)")),
        }
    }
}

/// Signals from the first request of a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostHints {
    pub init_data_header: bool,
    pub host_query: bool,
}

impl HostMode {
    /// Picks the bridge for a new session.
    pub fn bridge(self, hints: HostHints) -> Box<dyn HostBridge> {
        let telegram = match self {
            HostMode::Telegram => true,
            HostMode::Preview => false,
            HostMode::Auto => hints.init_data_header || hints.host_query,
        };

        if telegram {
            Box::new(TelegramBridge::new())
        } else {
            Box::new(PreviewBridge::new())
        }
    }
}
