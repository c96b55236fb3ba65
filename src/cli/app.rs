use crate::store::StoreFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Bookshelf: a small book inventory tracker
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Track a small catalog of books from a text menu")]
#[command(
    long_about = "Bookshelf keeps a catalog of books you can add, list, check out, return, search and delete. The catalog is loaded at startup and saved when you exit."
)]
pub struct Cli {
    /// Data file to load from and save to (overrides --global)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Keep the data file in the platform data directory instead of the working directory
    #[arg(long)]
    pub global: bool,

    /// Encoding of the data file
    #[arg(long, value_enum, default_value = "json")]
    pub format: StoreFormat,

    /// Do not add the demo books when the catalog starts empty
    #[arg(long)]
    pub no_demo: bool,

    /// Set log level (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
