mod info;
mod submit;
mod validate;

pub use info::*;
pub use submit::*;
pub use validate::*;

use clap::Args;
use portfolio_contact::{FieldName, FormState};

/// Field values as given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long = "phone", default_value = "")]
    pub phone_number: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

impl FormArgs {
    /// Types each value into a fresh form, field by field.
    pub fn into_form(self) -> FormState {
        let mut form = FormState::new();
        form.set_field(FieldName::FullName, self.full_name);
        form.set_field(FieldName::Email, self.email);
        form.set_field(FieldName::PhoneNumber, self.phone_number);
        form.set_field(FieldName::Subject, self.subject);
        form.set_field(FieldName::Message, self.message);
        form
    }
}
