//! Presentation layer for ticket-triage
//!
//! This crate contains CLI definitions, the HTTP front controller,
//! and console output formatting.

pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use server::{AppState, SharedState, build_router, serve};
