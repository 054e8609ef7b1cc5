//! Contact and custom request form models.

use serde::{Deserialize, Serialize};

/// How the operator should get back to the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Telegram,
    Whatsapp,
    Call,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [Self::Telegram, Self::Whatsapp, Self::Call];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Whatsapp => "whatsapp",
            Self::Call => "call",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Telegram => "Telegram",
            Self::Whatsapp => "WhatsApp",
            Self::Call => "Звонок",
        }
    }
}

/// Customer contact details for a checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub contact_method: ContactMethod,
    #[serde(default)]
    pub comment: String,
}

impl ContactInfo {
    /// Name and phone are the only required fields. Emptiness is the only
    /// check; phone format is left to the operator.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }
}

/// A bespoke "find this item for me" request. All fields are free text and
/// may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRequest {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub size: String,
    /// Free text, e.g. "400000" or "до 500 тыс."
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub contact: ContactInfo,
}
