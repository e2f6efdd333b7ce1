use std::ops::{Index, IndexMut};

use portfolio_shared::EmailPayload;
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::{FieldError, FieldName};

/// One slot per [`FieldName`]. The set of keys is fixed by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fields<T> {
    pub full_name: T,
    pub email: T,
    pub phone_number: T,
    pub subject: T,
    pub message: T,
}

impl<T> Fields<T> {
    pub fn from_fn(mut f: impl FnMut(FieldName) -> T) -> Self {
        Self {
            full_name: f(FieldName::FullName),
            email: f(FieldName::Email),
            phone_number: f(FieldName::PhoneNumber),
            subject: f(FieldName::Subject),
            message: f(FieldName::Message),
        }
    }

    pub fn get(&self, field: FieldName) -> &T {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut T {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &T)> {
        FieldName::VARIANTS
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }
}

impl<T> Index<FieldName> for Fields<T> {
    type Output = T;

    fn index(&self, field: FieldName) -> &T {
        self.get(field)
    }
}

impl<T> IndexMut<FieldName> for Fields<T> {
    fn index_mut(&mut self, field: FieldName) -> &mut T {
        self.get_mut(field)
    }
}

/// Raw user text, as typed.
pub type FormValues = Fields<String>;

/// `None` means the field currently shows no error.
pub type FormErrors = Fields<Option<FieldError>>;

impl Fields<String> {
    pub fn payload(&self) -> EmailPayload {
        EmailPayload {
            name: self.full_name.to_owned(),
            email: self.email.to_owned(),
            phone: self.phone_number.to_owned(),
            subject: self.subject.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

impl Fields<Option<FieldError>> {
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, error)| error.is_none())
    }

    /// Rendered message for a field, empty when the field has no error.
    pub fn message(&self, field: FieldName) -> String {
        self.get(field)
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Fields<String> {
        Fields::from_fn(|field| self.message(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_maps_field_names() {
        let values = FormValues {
            full_name: "Ada Lovelace".to_owned(),
            email: "ada@x.com".to_owned(),
            phone_number: "+1 555 123 4567".to_owned(),
            subject: "Project Inquiry".to_owned(),
            message: "Let's build something.".to_owned(),
        };

        let payload = values.payload();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.phone, "+1 555 123 4567");
        assert_eq!(payload.message, "Let's build something.");
    }

    #[test]
    fn test_errors_messages_cover_every_field() {
        let mut errors = FormErrors::default();
        assert!(errors.is_valid());

        errors[FieldName::Subject] = Some(FieldError::Required(FieldName::Subject));

        let messages = errors.messages();
        assert_eq!(messages.subject, "Subject is required");
        assert_eq!(messages.full_name, "");
        assert_eq!(messages.iter().count(), 5);
        assert!(!errors.is_valid());
    }
}
