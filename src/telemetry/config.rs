use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub headers: HashMap<String, String>,
    pub service_name: String,
    /// Emit log lines as JSON instead of human-readable text
    pub json_logs: bool,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        let enabled = std::env::var("OTEL_ENABLED")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4318/v1/traces".to_string());

        let service_name =
            std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "config-lsp".to_string());

        let headers = std::env::var("OTEL_EXPORTER_OTLP_HEADERS")
            .map(|raw| parse_headers(&raw))
            .unwrap_or_default();

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            enabled,
            endpoint,
            headers,
            service_name,
            json_logs,
        }
    }
}

/// Parse "key=value,key2=value2"
fn parse_headers(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}
