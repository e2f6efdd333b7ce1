use portfolio_shared::EmailPayload;

use crate::{FieldError, FieldName, FormErrors, FormValues, validate};

/// Current field values together with the errors shown next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: FormErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(field).as_ref()
    }

    /// Stores the new value and drops any error shown for that field.
    ///
    /// The field is not re-validated here; its error only comes back on the
    /// next [`FormState::validate_all`].
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values[field] = value.into();

        if self.errors[field].take().is_some() {
            tracing::debug!(field = %field, "Cleared field error on edit");
        }
    }

    /// Replaces every error with a fresh validation pass.
    pub fn validate_all(&mut self) -> bool {
        self.errors = validate(&self.values);

        let valid = self.errors.is_valid();
        if !valid {
            tracing::debug!(
                invalid = self.errors.iter().filter(|(_, e)| e.is_some()).count(),
                "Contact form failed validation"
            );
        }

        valid
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> EmailPayload {
        self.values.payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_clears_error_without_revalidating() {
        let mut form = FormState::new();
        assert!(!form.validate_all());
        assert_eq!(
            form.error(FieldName::Subject),
            Some(&FieldError::Required(FieldName::Subject))
        );

        form.set_field(FieldName::Subject, "x");
        assert_eq!(form.value(FieldName::Subject), "x");
        assert_eq!(form.error(FieldName::Subject), None);
        assert!(form.error(FieldName::Message).is_some());

        assert!(!form.validate_all());
        assert_eq!(
            form.error(FieldName::Subject),
            Some(&FieldError::TooShort {
                field: FieldName::Subject,
                min: 5
            })
        );
    }

    #[test]
    fn test_set_field_without_error_leaves_errors_alone() {
        let mut form = FormState::new();
        form.set_field(FieldName::FullName, "A");

        assert_eq!(form.errors(), &FormErrors::default());
        assert_eq!(form.values().full_name, "A");
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut form = FormState::new();
        form.set_field(FieldName::Email, "not-an-email");
        form.set_field(FieldName::Message, "short");
        form.validate_all();

        form.reset();
        assert_eq!(form, FormState::default());
        assert_eq!(form.values(), &FormValues::default());
        assert!(form.errors().is_valid());
    }
}
