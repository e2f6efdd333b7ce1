mod form;
mod submission;
mod types;
mod validate;
mod value_object;

pub use form::*;
pub use submission::*;
pub use types::*;
pub use validate::*;
pub use value_object::*;
