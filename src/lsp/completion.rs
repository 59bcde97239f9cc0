use crate::lsp::document::DocumentManager;
use crate::schema::{self, FieldDescriptor};
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionResponse, Documentation, MarkupContent,
    MarkupKind, Position, Url,
};

/// Lines indented at least this far are completed with nested settings keys
const NESTED_INDENT: usize = 2;

/// Provide key completion for a position in a document
pub fn provide_completion(
    doc_manager: &Arc<DocumentManager>,
    uri: &Url,
    position: Position,
) -> Result<Option<CompletionResponse>> {
    let doc = match doc_manager.get(uri) {
        Some(d) => d,
        None => return Ok(None),
    };

    let line = doc.line(position.line).unwrap_or("");
    Ok(Some(CompletionResponse::Array(completion_items(line))))
}

/// Completion items for a line, chosen by its indentation depth
pub fn completion_items(line: &str) -> Vec<CompletionItem> {
    if indent_depth(line) >= NESTED_INDENT {
        schema::nested_fields("settings").map(to_item).collect()
    } else {
        schema::top_level_fields().map(to_item).collect()
    }
}

fn indent_depth(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn to_item(field: &FieldDescriptor) -> CompletionItem {
    CompletionItem {
        label: field.key.to_string(),
        kind: Some(CompletionItemKind::PROPERTY),
        detail: Some(field.detail()),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: field.description.to_string(),
        })),
        insert_text: Some(field.insert_text.to_string()),
        ..Default::default()
    }
}
