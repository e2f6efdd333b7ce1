pub mod cli;
pub mod config;
pub mod console;
pub mod observability;

pub use config::Config;
pub use console::ConsoleNotifier;
