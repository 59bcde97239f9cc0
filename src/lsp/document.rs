use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tower_lsp::lsp_types::Url;

/// Work item for the validation worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRequest {
    /// Validate a document if `version` is still its latest
    Validate { uri: Url, version: i32 },
    /// The document was closed; clear its diagnostics
    Clear { uri: Url },
}

/// Manages open documents and schedules their validation
pub struct DocumentManager {
    documents: DashMap<Url, Document>,
    validation_tx: mpsc::Sender<ValidationRequest>,
    debounce: Duration,
}

impl DocumentManager {
    pub fn new(validation_tx: mpsc::Sender<ValidationRequest>, debounce: Duration) -> Self {
        Self {
            documents: DashMap::new(),
            validation_tx,
            debounce,
        }
    }

    /// Add or update a document
    pub fn update(&self, uri: Url, version: i32, content: String) {
        let document = Document {
            uri: uri.clone(),
            version,
            content,
        };

        self.documents.insert(uri.clone(), document);

        self.schedule_validation(uri, version);
    }

    /// Get a snapshot of a document by URI
    pub fn get(&self, uri: &Url) -> Option<Arc<Document>> {
        self.documents.get(uri).map(|doc| Arc::new(doc.clone()))
    }

    /// Remove a document and queue the clearing of its diagnostics behind
    /// any validation already in flight
    pub async fn close(&self, uri: &Url) {
        self.documents.remove(uri);

        let request = ValidationRequest::Clear { uri: uri.clone() };
        if self.validation_tx.send(request).await.is_err() {
            tracing::debug!("validation worker stopped, dropping clear request");
        }
    }

    /// Whether `version` is still the latest known version of `uri`
    pub fn is_current(&self, uri: &Url, version: i32) -> bool {
        self.documents
            .get(uri)
            .is_some_and(|doc| doc.version == version)
    }

    /// Schedule validation after the debounce period
    fn schedule_validation(&self, uri: Url, version: i32) {
        let tx = self.validation_tx.clone();
        let debounce = self.debounce;
        tokio::spawn(async move {
            if !debounce.is_zero() {
                sleep(debounce).await;
            }
            if tx
                .send(ValidationRequest::Validate { uri, version })
                .await
                .is_err()
            {
                tracing::debug!("validation worker stopped, dropping request");
            }
        });
    }
}

/// A tracked document
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: Url,
    pub version: i32,
    pub content: String,
}

impl Document {
    /// Text of a 0-based line, if it exists
    pub fn line(&self, line: u32) -> Option<&str> {
        self.content.lines().nth(line as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("file:///tmp/app.yaml").unwrap()
    }

    #[tokio::test]
    async fn test_update_schedules_validation() {
        let (tx, mut rx) = mpsc::channel(8);
        let manager = DocumentManager::new(tx, Duration::ZERO);

        manager.update(uri(), 1, "name: test\n".to_string());

        let req = rx.recv().await.unwrap();
        assert_eq!(req, ValidationRequest::Validate { uri: uri(), version: 1 });
        assert_eq!(manager.get(&uri()).unwrap().content, "name: test\n");
    }

    #[tokio::test]
    async fn test_stale_versions_are_not_current() {
        let (tx, _rx) = mpsc::channel(8);
        let manager = DocumentManager::new(tx, Duration::ZERO);

        manager.update(uri(), 1, "a: 1".to_string());
        manager.update(uri(), 2, "a: 2".to_string());

        assert!(!manager.is_current(&uri(), 1));
        assert!(manager.is_current(&uri(), 2));
    }

    #[tokio::test]
    async fn test_close_queues_clear_after_pending_validation() {
        let (tx, mut rx) = mpsc::channel(8);
        let manager = DocumentManager::new(tx, Duration::ZERO);

        manager.update(uri(), 1, "a: 1".to_string());
        tokio::task::yield_now().await;
        manager.close(&uri()).await;

        assert!(manager.get(&uri()).is_none());
        assert!(!manager.is_current(&uri(), 1));
        assert_eq!(
            rx.recv().await.unwrap(),
            ValidationRequest::Validate { uri: uri(), version: 1 }
        );
        assert_eq!(rx.recv().await.unwrap(), ValidationRequest::Clear { uri: uri() });
    }

    #[tokio::test]
    async fn test_document_line() {
        let (tx, _rx) = mpsc::channel(8);
        let manager = DocumentManager::new(tx, Duration::ZERO);
        manager.update(uri(), 1, "name: a\nsettings:\n  timeout: 3\n".to_string());

        let doc = manager.get(&uri()).unwrap();
        assert_eq!(doc.line(2), Some("  timeout: 3"));
        assert_eq!(doc.line(5), None);
    }
}
