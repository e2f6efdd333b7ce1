use regex::Regex;
use std::sync::LazyLock;

use crate::{FieldError, FieldName, FormErrors, FormValues};

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

/// Checks every field independently and returns a fully populated error set.
pub fn validate(values: &FormValues) -> FormErrors {
    FormErrors::from_fn(|field| validate_field(field, values.get(field)))
}

/// Emptiness and length are judged on the trimmed value, patterns on the raw one.
///
/// Trimming also strips U+FEFF and length is counted in UTF-16 code units, the
/// way browsers measure form input.
pub fn validate_field(field: FieldName, raw: &str) -> Option<FieldError> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    if trimmed.is_empty() {
        return field.is_required().then_some(FieldError::Required(field));
    }

    if let Some(min) = field.min_len()
        && trimmed.encode_utf16().count() < min
    {
        return Some(FieldError::TooShort { field, min });
    }

    match field {
        FieldName::Email => (!RE_EMAIL.is_match(raw)).then_some(FieldError::InvalidEmail),
        FieldName::PhoneNumber => {
            (!RE_PHONE.is_match(raw)).then_some(FieldError::InvalidPhoneNumber)
        }
        FieldName::FullName | FieldName::Subject | FieldName::Message => None,
    }
}
