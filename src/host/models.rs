//! Host runtime commands and button models.

use serde::Serialize;

/// Label of the persistent checkout button.
pub const BUTTON_LABEL: &str = "Перейти к оформлению";

/// Persistent action button appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonParams {
    pub text: String,
    pub is_visible: bool,
}

impl ButtonParams {
    /// Label shows the item count once there is something in the cart; the
    /// button is hidden for an empty cart.
    pub fn for_cart_count(count: u32) -> Self {
        let text = if count > 0 {
            format!("{BUTTON_LABEL} ({count})")
        } else {
            BUTTON_LABEL.to_string()
        };
        Self {
            text,
            is_visible: count > 0,
        }
    }
}

/// What a click on the persistent button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    OpenOrders,
}

/// One instruction for the page to replay, either against the host runtime
/// or as a local fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostCommand {
    Ready,
    Expand,
    ConfigureButton(ButtonParams),
    SendData { data: String },
    ShowAlert { message: String },
    /// Rendered by the page itself when no host runtime is present.
    LocalAlert { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_button_params_for_count() {
        let hidden = ButtonParams::for_cart_count(0);
        assert_eq!(hidden.text, "Перейти к оформлению");
        assert!(!hidden.is_visible);

        let shown = ButtonParams::for_cart_count(3);
        assert_eq!(shown.text, "Перейти к оформлению (3)");
        assert!(shown.is_visible);
    }

    #[test]
    fn test_command_json() {
        let cmd = HostCommand::ConfigureButton(ButtonParams::for_cart_count(1));
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({ "kind": "configure_button", "text": "Перейти к оформлению (1)", "is_visible": true })
        );
        assert_eq!(
            serde_json::to_value(HostCommand::Ready).unwrap(),
            json!({ "kind": "ready" })
        );
        assert_eq!(
            serde_json::to_value(HostCommand::SendData { data: "{}".into() }).unwrap(),
            json!({ "kind": "send_data", "data": "{}" })
        );
    }
}
