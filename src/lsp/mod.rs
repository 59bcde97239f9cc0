/// LSP (Language Server Protocol) module for config-lsp
///
/// This module provides the language server for configuration documents:
/// debounced validation published as diagnostics, hover documentation for
/// known keys, and key completion in editors.
pub mod completion;
pub mod diagnostic;
pub mod document;
pub mod hover;
pub mod server;

// Re-export public API
pub use server::ConfigLanguageServer;
