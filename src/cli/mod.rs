pub mod app;
pub mod menu;
pub mod shell;

pub use app::{Cli, LogLevel};
pub use menu::MenuChoice;
pub use shell::Session;
