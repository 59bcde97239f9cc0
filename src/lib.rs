pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lsp;
pub mod schema;
pub mod server;
pub mod telemetry;
pub mod validation;

pub use error::{ConfigLspError, Result};
pub use validation::{Finding, FindingKind, Severity, validate_text};
