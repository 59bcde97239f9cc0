use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "config-lsp")]
#[command(version)]
#[command(about = "Language server and validator for application config files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate config files and print findings
    Check {
        /// Files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },

    /// Run the language server over stdin/stdout
    Lsp {
        /// Delay between the last edit and validation, in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Serve the language server over WebSocket at /lsp
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port number
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Delay between the last edit and validation, in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines
    Text,
    /// JSON report
    Json,
    /// YAML report
    Yaml,
}
