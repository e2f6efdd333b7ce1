use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Subject,
    Message,
}

impl FieldName {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone number",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::PhoneNumber)
    }

    /// Minimum trimmed length, for fields checked by length rather than pattern.
    pub fn min_len(self) -> Option<usize> {
        match self {
            Self::FullName => Some(2),
            Self::Subject => Some(5),
            Self::Message => Some(10),
            Self::Email | Self::PhoneNumber => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(FieldName),

    #[error("{} must be at least {} characters", .field.label(), .min)]
    TooShort { field: FieldName, min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhoneNumber,
}
