use crate::lsp::document::DocumentManager;
use crate::schema::{self, FieldDescriptor};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position, Range, Url};

static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_-]*)\s*:").expect("key pattern is valid")
});

/// Provide hover information for the key on the hovered line
pub fn provide_hover(
    doc_manager: &Arc<DocumentManager>,
    uri: &Url,
    position: Position,
) -> Result<Option<Hover>> {
    let doc = match doc_manager.get(uri) {
        Some(d) => d,
        None => return Ok(None),
    };

    let line = match doc.line(position.line) {
        Some(l) => l,
        None => return Ok(None),
    };

    Ok(hover_for_line(line, position.line))
}

/// Hover for a single line of text, `None` when the line has no known key
pub fn hover_for_line(line: &str, line_number: u32) -> Option<Hover> {
    let key = KEY_PATTERN.captures(line)?.get(1)?;
    let field = schema::lookup(key.as_str())?;

    let start = utf16_len(&line[..key.start()]);
    let end = start + utf16_len(key.as_str());

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format_field(field),
        }),
        range: Some(Range::new(
            Position::new(line_number, start),
            Position::new(line_number, end),
        )),
    })
}

fn format_field(field: &FieldDescriptor) -> String {
    let requirement = if field.required { "required" } else { "optional" };
    format!(
        "**{}** (`{}`, {})\n\n{}",
        field.path, field.field_type, requirement, field.description
    )
}

fn utf16_len(text: &str) -> u32 {
    text.chars().map(char::len_utf16).sum::<usize>() as u32
}
