//! Host bridge implementations.
//!
//! The storefront only talks to the [`HostBridge`] port. Inside the host the
//! Telegram bridge queues commands for the page to replay against
//! `window.Telegram.WebApp`; outside it the preview bridge turns deliveries and
//! alerts into local notifications.

use serde_json::Value;

use super::button::ButtonSubscription;
use super::models::{ButtonAction, ButtonParams, HostCommand};

/// Heading of the local notification that replaces an order delivery.
pub const PREVIEW_ORDER_PREFIX: &str = "(Превью) Заявка отправлена:";
/// Heading of the local notification that replaces a custom request delivery.
pub const PREVIEW_REQUEST_PREFIX: &str = "Запрос отправлен (превью).";
/// Heading for any other delivery.
pub const PREVIEW_DELIVERY_PREFIX: &str = "(Превью) Отправлено:";

/// Most commands a Telegram outbox holds between page renders. The oldest
/// are dropped first.
pub const OUTBOX_LIMIT: usize = 32;

/// Capabilities the storefront needs from a mini-app host.
pub trait HostBridge: Send + Sync + std::fmt::Debug {
    /// Whether a real host runtime is attached.
    fn is_present(&self) -> bool;

    /// Signals that the app has loaded.
    fn ready(&mut self);

    /// Requests full-height layout.
    fn expand(&mut self);

    fn configure_button(&mut self, params: ButtonParams);

    /// Registers the click handler, replacing any previous one.
    fn on_button_click(&mut self, action: ButtonAction);

    /// Resolves a click coming back from the host.
    fn click_button(&self) -> Option<ButtonAction>;

    /// Hands serialized data to the host. Fire-and-forget.
    fn send(&mut self, data: &str);

    /// Shows a blocking message to the user.
    fn alert(&mut self, message: &str);

    /// Commands queued since the last drain, oldest first.
    fn drain(&mut self) -> Vec<HostCommand>;

    /// Commands queued since the last drain, without consuming them.
    fn pending(&self) -> &[HostCommand];
}

// =============================================================================
// Telegram
// =============================================================================

#[derive(Debug, Default)]
pub struct TelegramBridge {
    outbox: Vec<HostCommand>,
    button: ButtonSubscription,
}

impl TelegramBridge {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: HostCommand) {
        if self.outbox.len() >= OUTBOX_LIMIT {
            let dropped = self.outbox.remove(0);
            tracing::warn!(?dropped, "Host outbox full, dropping oldest command");
        }
        self.outbox.push(command);
    }
}

impl HostBridge for TelegramBridge {
    fn is_present(&self) -> bool {
        true
    }

    fn ready(&mut self) {
        self.push(HostCommand::Ready);
    }

    fn expand(&mut self) {
        self.push(HostCommand::Expand);
    }

    fn configure_button(&mut self, params: ButtonParams) {
        // Only the latest appearance matters to the page.
        self.outbox
            .retain(|cmd| !matches!(cmd, HostCommand::ConfigureButton(_)));
        self.push(HostCommand::ConfigureButton(params));
    }

    fn on_button_click(&mut self, action: ButtonAction) {
        self.button.replace(action);
    }

    fn click_button(&self) -> Option<ButtonAction> {
        self.button.handler()
    }

    fn send(&mut self, data: &str) {
        tracing::info!(bytes = data.len(), "Queued payload for host data channel");
        self.push(HostCommand::SendData {
            data: data.to_string(),
        });
    }

    fn alert(&mut self, message: &str) {
        self.push(HostCommand::ShowAlert {
            message: message.to_string(),
        });
    }

    fn drain(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.outbox)
    }

    fn pending(&self) -> &[HostCommand] {
        &self.outbox
    }
}

// =============================================================================
// Preview (no host)
// =============================================================================

#[derive(Debug, Default)]
pub struct PreviewBridge {
    outbox: Vec<HostCommand>,
}

impl PreviewBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pretty-printed payload under a heading picked from its `type` field.
fn preview_notice(data: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(data) else {
        return format!("{PREVIEW_DELIVERY_PREFIX}\n{data}");
    };
    let prefix = match value.get("type").and_then(Value::as_str) {
        Some("order") => PREVIEW_ORDER_PREFIX,
        Some("custom_request") => PREVIEW_REQUEST_PREFIX,
        _ => PREVIEW_DELIVERY_PREFIX,
    };
    let body = serde_json::to_string_pretty(&value).unwrap_or_else(|_| data.to_string());
    format!("{prefix}\n{body}")
}

impl HostBridge for PreviewBridge {
    fn is_present(&self) -> bool {
        false
    }

    fn ready(&mut self) {}

    fn expand(&mut self) {}

    fn configure_button(&mut self, _params: ButtonParams) {}

    fn on_button_click(&mut self, _action: ButtonAction) {}

    fn click_button(&self) -> Option<ButtonAction> {
        None
    }

    fn send(&mut self, data: &str) {
        tracing::info!(payload = %data, "Preview delivery (no host runtime)");
        self.outbox.push(HostCommand::LocalAlert {
            message: preview_notice(data),
        });
    }

    fn alert(&mut self, message: &str) {
        tracing::debug!(text = message, "Preview alert");
        self.outbox.push(HostCommand::LocalAlert {
            message: message.to_string(),
        });
    }

    fn drain(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.outbox)
    }

    fn pending(&self) -> &[HostCommand] {
        &self.outbox
    }
}
