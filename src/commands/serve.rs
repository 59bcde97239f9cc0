use crate::config::ServerConfig;
use crate::error::{ConfigLspError, Result};
use crate::server;
use colored::*;
use std::net::{IpAddr, SocketAddr};

pub async fn execute_serve(host: &str, port: u16, config: ServerConfig) -> Result<()> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| ConfigLspError::InvalidInput(format!("invalid host address: {}", host)))?;
    let addr = SocketAddr::new(ip, port);

    eprintln!("{}", "Starting WebSocket language server...".bright_blue());
    eprintln!("  Endpoint: ws://{}/lsp", addr);
    eprintln!("  Debounce: {}ms", config.debounce.as_millis());
    eprintln!();

    server::start_server(addr, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_host_is_rejected() {
        let result = execute_serve("not-an-ip", 0, ServerConfig::default()).await;
        assert!(matches!(result, Err(ConfigLspError::InvalidInput(_))));
    }
}
