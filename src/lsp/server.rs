use crate::config::ServerConfig;
use crate::lsp::diagnostic::findings_to_diagnostics;
use crate::lsp::document::{DocumentManager, ValidationRequest};
use crate::validation::validate_text;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_lsp::jsonrpc::Result as RpcResult;
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, Hover, HoverParams,
    HoverProviderCapability, InitializeParams, InitializeResult, InitializedParams, MessageType,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tower_lsp::{Client, LanguageServer};

/// Language server for configuration documents
pub struct ConfigLanguageServer {
    client: Client,
    document_manager: Arc<DocumentManager>,
}

impl ConfigLanguageServer {
    pub fn new(client: Client, config: ServerConfig) -> Self {
        let (validation_tx, validation_rx) = mpsc::channel::<ValidationRequest>(100);

        let document_manager = Arc::new(DocumentManager::new(validation_tx, config.debounce));

        let client_clone = client.clone();
        let doc_manager_clone = document_manager.clone();
        tokio::spawn(async move {
            validation_worker(validation_rx, client_clone, doc_manager_clone).await;
        });

        Self {
            client,
            document_manager,
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for ConfigLanguageServer {
    async fn initialize(&self, _params: InitializeParams) -> RpcResult<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions::default()),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        tracing::info!("client initialized");
        self.client
            .log_message(MessageType::INFO, "config-lsp server initialized")
            .await;
    }

    async fn shutdown(&self) -> RpcResult<()> {
        tracing::info!("shutdown requested");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        tracing::debug!(%uri, version, "document opened");

        self.document_manager
            .update(uri, version, params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: the last change carries the whole document
        if let Some(change) = params.content_changes.into_iter().last() {
            self.document_manager.update(uri, version, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!(%uri, "document closed");

        self.document_manager.close(&uri).await;
    }

    async fn hover(&self, params: HoverParams) -> RpcResult<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        crate::lsp::hover::provide_hover(&self.document_manager, &uri, position)
    }

    async fn completion(&self, params: CompletionParams) -> RpcResult<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        crate::lsp::completion::provide_completion(&self.document_manager, &uri, position)
    }
}

/// Background worker that validates documents and publishes diagnostics.
///
/// Clears for closed documents go through the same queue, so a validation
/// that started before a close always publishes before the clear.
async fn validation_worker(
    mut rx: mpsc::Receiver<ValidationRequest>,
    client: Client,
    doc_manager: Arc<DocumentManager>,
) {
    while let Some(req) = rx.recv().await {
        match req {
            ValidationRequest::Validate { uri, version } => {
                // A newer edit has its own request queued behind this one
                if !doc_manager.is_current(&uri, version) {
                    continue;
                }

                let doc = match doc_manager.get(&uri) {
                    Some(d) => d,
                    None => continue,
                };

                let findings = validate_text(&doc.content);
                tracing::debug!(
                    uri = %doc.uri,
                    version = doc.version,
                    findings = findings.len(),
                    "validated document"
                );

                let diagnostics = findings_to_diagnostics(&findings, &doc.content);
                client
                    .publish_diagnostics(doc.uri.clone(), diagnostics, Some(doc.version))
                    .await;
            }
            ValidationRequest::Clear { uri } => {
                client.publish_diagnostics(uri, vec![], None).await;
            }
        }
    }
}
