use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigLspError {
    #[error("Failed to read document: {0}")]
    DocumentLoadError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigLspError>;
