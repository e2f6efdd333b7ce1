mod emailjs;
mod service;

pub use emailjs::*;
pub use service::*;
