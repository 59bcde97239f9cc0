use crate::config::ServerConfig;
use crate::lsp::ConfigLanguageServer;
use tower_lsp::{LspService, Server};

/// Serve the language server over stdin/stdout until the client disconnects
pub async fn execute_lsp(config: ServerConfig) {
    tracing::info!(
        debounce_ms = config.debounce.as_millis() as u64,
        "Starting stdio language server"
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| ConfigLanguageServer::new(client, config));
    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("Language server stopped");
}
