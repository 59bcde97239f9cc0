use crate::validation::{Finding, Severity};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

/// Convert a validation finding to an LSP diagnostic spanning the reported line
pub fn finding_to_diagnostic(finding: &Finding, text: &str) -> Diagnostic {
    let severity = match finding.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    };

    Diagnostic {
        range: line_range(text, finding.line),
        severity: Some(severity),
        code: Some(NumberOrString::String(finding.kind.code().to_string())),
        source: Some("config-lsp".to_string()),
        message: finding.message.clone(),
        ..Default::default()
    }
}

/// Convert every finding for one document
pub fn findings_to_diagnostics(findings: &[Finding], text: &str) -> Vec<Diagnostic> {
    findings
        .iter()
        .map(|finding| finding_to_diagnostic(finding, text))
        .collect()
}

/// Range covering a whole line, measured in UTF-16 code units
fn line_range(text: &str, line: usize) -> Range {
    let width: usize = text
        .lines()
        .nth(line)
        .map(|content| content.chars().map(char::len_utf16).sum())
        .unwrap_or(0);

    let line = line as u32;
    Range::new(Position::new(line, 0), Position::new(line, width as u32))
}
