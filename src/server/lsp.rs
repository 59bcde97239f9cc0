use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tower_lsp::{LspService, Server};

use crate::lsp::ConfigLanguageServer;
use crate::server::AppState;

const PIPE_CAPACITY: usize = 1024 * 1024;

/// Handler for the LSP WebSocket route
pub async fn lsp_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    tracing::info!("LSP: new WebSocket connection");
    let (mut ws_sender, mut ws_receiver) = socket.split();

    // server_read/server_write: the language server's stdin
    // client_read/client_write: the language server's stdout
    let (client_read, client_write) = tokio::io::duplex(PIPE_CAPACITY);
    let (server_read, mut server_write) = tokio::io::duplex(PIPE_CAPACITY);

    // WebSocket frames -> server input, adding LSP headers
    tokio::spawn(async move {
        while let Some(msg) = ws_receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    tracing::trace!(message = %text.as_str(), "LSP in");
                    if let Err(e) = server_write.write_all(frame(text.as_str()).as_bytes()).await {
                        tracing::warn!("Error writing to LSP server: {}", e);
                        break;
                    }
                }
                Ok(Message::Binary(_)) => {
                    tracing::debug!("LSP in: binary frame ignored");
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("LSP: WebSocket closed by client");
                    break;
                }
                Err(e) => {
                    tracing::warn!("LSP in error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    // Server output -> WebSocket frames, stripping LSP headers
    tokio::spawn(async move {
        let mut reader = BufReader::new(client_read);

        loop {
            let body = match read_message(&mut reader).await {
                Ok(Some(body)) => body,
                Ok(None) => return,
                Err(e) => {
                    tracing::warn!("Error reading from LSP server: {}", e);
                    return;
                }
            };

            tracing::trace!(message = %body, "LSP out");
            if let Err(e) = ws_sender.send(Message::Text(body.into())).await {
                tracing::warn!("Error sending to WebSocket: {}", e);
                break;
            }
        }
    });

    let (service, socket) =
        LspService::new(|client| ConfigLanguageServer::new(client, state.config));

    Server::new(server_read, client_write, socket)
        .serve(service)
        .await;

    tracing::info!("LSP: connection finished");
}

/// Wrap a JSON-RPC payload in LSP base-protocol framing
fn frame(payload: &str) -> String {
    format!("Content-Length: {}\r\n\r\n{}", payload.len(), payload)
}

/// Read one framed message body. `Ok(None)` at end of stream.
async fn read_message<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer = String::new();

    loop {
        let mut content_length = 0;
        loop {
            buffer.clear();
            if reader.read_line(&mut buffer).await? == 0 {
                return Ok(None);
            }
            let line = buffer.trim();
            if line.is_empty() {
                break;
            }
            if let Some(len) = line
                .split_once(':')
                .filter(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            {
                content_length = len;
            }
        }

        // Header block without a body; wait for the next one
        if content_length == 0 {
            continue;
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).await?;
        return Ok(Some(String::from_utf8_lossy(&body).into_owned()));
    }
}
