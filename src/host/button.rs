//! Click subscription for the host's persistent action button.

use super::models::ButtonAction;

/// Holds at most one click handler. Re-registering replaces the previous
/// handler instead of stacking another one.
#[derive(Debug, Clone, Default)]
pub struct ButtonSubscription {
    handler: Option<ButtonAction>,
}

impl ButtonSubscription {
    /// Registers `action`, returning the handler it displaced.
    pub fn replace(&mut self, action: ButtonAction) -> Option<ButtonAction> {
        self.handler.replace(action)
    }

    pub fn handler(&self) -> Option<ButtonAction> {
        self.handler
    }
}
