mod config;
mod shutdown;

pub use config::TelemetryConfig;
pub use shutdown::TelemetryGuard;

use crate::error::{ConfigLspError, Result};
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "config_lsp=info,tower_http=info";

/// Initialize logging. Everything goes to stderr: stdout carries the LSP stream.
pub fn init_telemetry() -> Result<TelemetryGuard> {
    let config = TelemetryConfig::from_env();

    if config.enabled {
        // Fall back to stderr-only logging if the exporter cannot be built
        match build_provider(&config) {
            Ok(provider) => {
                init_subscriber(&config, Some(&provider))?;
                tracing::info!(
                    "OpenTelemetry initialized with endpoint: {}",
                    config.endpoint
                );
                return Ok(TelemetryGuard::new(Some(provider)));
            }
            Err(e) => {
                eprintln!(
                    "Failed to initialize OpenTelemetry: {}. Falling back to stderr-only logging.",
                    e
                );
            }
        }
    }

    init_subscriber(&config, None)?;
    tracing::info!("Tracing initialized (stderr only, OpenTelemetry disabled)");

    Ok(TelemetryGuard::default())
}

fn build_provider(config: &TelemetryConfig) -> Result<SdkTracerProvider> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .map_err(|e| {
            ConfigLspError::TelemetryError(format!("Failed to build HTTP client: {}", e))
        })?;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_http_client(client)
        .with_endpoint(&config.endpoint)
        .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
        .with_timeout(std::time::Duration::from_secs(5))
        .with_headers(config.headers.clone())
        .build()
        .map_err(|e| {
            ConfigLspError::TelemetryError(format!("Failed to build OTLP exporter: {}", e))
        })?;

    let resource = opentelemetry_sdk::Resource::builder_empty()
        .with_service_name(config.service_name.clone())
        .with_attributes([KeyValue::new("service.version", env!("CARGO_PKG_VERSION"))])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    opentelemetry::global::set_tracer_provider(provider.clone());

    Ok(provider)
}

fn init_subscriber(config: &TelemetryConfig, provider: Option<&SdkTracerProvider>) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (text_layer, json_layer) = if config.json_logs {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true);
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true);
        (Some(layer), None)
    };

    let otel_layer = provider.map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer("config-lsp"))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| ConfigLspError::TelemetryError(format!("Failed to install subscriber: {}", e)))
}
