mod fields;
mod locate;
mod parse;

pub use fields::validate;
pub use locate::{find_field_line, locate_field};
pub use parse::{ParseFailure, parse};

use serde::Serialize;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Category of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    SyntaxError,
    RootNotObject,
    MissingRequiredField,
    TypeMismatch,
    OutOfRange,
}

impl FindingKind {
    /// Stable identifier used as the diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::SyntaxError => "syntax-error",
            FindingKind::RootNotObject => "root-not-object",
            FindingKind::MissingRequiredField => "missing-required-field",
            FindingKind::TypeMismatch => "type-mismatch",
            FindingKind::OutOfRange => "out-of-range",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::SyntaxError => write!(f, "Syntax error"),
            FindingKind::RootNotObject => write!(f, "Root is not an object"),
            FindingKind::MissingRequiredField => write!(f, "Required field missing"),
            FindingKind::TypeMismatch => write!(f, "Field type mismatch"),
            FindingKind::OutOfRange => write!(f, "Value out of range"),
        }
    }
}

/// A single validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    /// 0-based line in the source text
    pub line: usize,
    pub message: String,
}

impl Finding {
    pub fn error(kind: FindingKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn warning(kind: FindingKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Validate a raw document against the configuration schema.
///
/// Blank documents produce no findings. A syntax error or a non-mapping root
/// produces exactly one finding and suppresses every other check.
pub fn validate_text(text: &str) -> Vec<Finding> {
    let text = parse::strip_bom(text);
    if text.trim().is_empty() {
        return vec![];
    }

    let document = match parse(text) {
        Ok(document) => document,
        Err(failure) => {
            tracing::debug!(line = ?failure.line, "document failed to parse");
            let line = failure.line.map(|line| line.saturating_sub(1)).unwrap_or(0);
            return vec![Finding::error(
                FindingKind::SyntaxError,
                line,
                format!("syntax error: {}", failure.message),
            )];
        }
    };

    match document.as_mapping() {
        Some(mapping) => validate(mapping, text),
        None => vec![Finding::error(
            FindingKind::RootNotObject,
            0,
            "root element must be an object",
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_documents_have_no_findings() {
        assert!(validate_text("").is_empty());
        assert!(validate_text("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        assert!(validate_text("\u{feff}name: a\nversion: \"1\"\n").is_empty());
        assert!(validate_text("\u{feff}").is_empty());

        let findings = validate_text("\u{feff}name: 5\nversion: \"1\"\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "\"name\" must be a string");
        assert_eq!(findings[0].line, 0);
    }

    #[test]
    fn test_syntax_error_is_single_finding() {
        let findings = validate_text("name: test\nversion: [1.0.0\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].kind, FindingKind::SyntaxError);
        assert!(findings[0].message.starts_with("syntax error: "));
    }

    #[test]
    fn test_syntax_error_line_is_zero_based() {
        let findings = validate_text("name: test\nversion: a: b\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::SyntaxError);
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_sequence_root() {
        let findings = validate_text("- name: test\n- version: 1.0.0\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("root element"));
        assert_eq!(findings[0].line, 0);
    }

    #[test]
    fn test_scalar_and_empty_sequence_roots() {
        for text in ["just a string", "42", "[]", "---\n"] {
            let findings = validate_text(text);
            assert_eq!(findings.len(), 1, "unexpected findings for {:?}", text);
            assert_eq!(findings[0].kind, FindingKind::RootNotObject);
        }
    }

    #[test]
    fn test_missing_name() {
        let findings = validate_text("version: \"1.0.0\"");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("name"));
        assert_eq!(findings[0].kind, FindingKind::MissingRequiredField);
        assert_eq!(findings[0].line, 0);
    }

    #[test]
    fn test_missing_version() {
        let findings = validate_text("name: test");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("version"));
    }

    #[test]
    fn test_enabled_must_be_boolean() {
        let findings = validate_text("name: test\nversion: \"1.0.0\"\nenabled: \"yes\"\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("enabled"));
        assert_eq!(findings[0].line, 2);
    }

    #[test]
    fn test_negative_retries() {
        let findings =
            validate_text("name: test\nversion: \"1.0.0\"\nsettings:\n  retries: -1\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].kind, FindingKind::OutOfRange);
        assert!(findings[0].message.contains("retries"));
        assert!(findings[0].message.contains("≥ 0"));
        assert_eq!(findings[0].line, 3);
    }

    #[test]
    fn test_valid_document() {
        let text = "name: my-app\nversion: \"1.0.0\"\nenabled: true\nsettings:\n  timeout: 30\n  retries: 3\n";
        assert!(validate_text(text).is_empty());
    }

    #[test]
    fn test_unquoted_float_version_is_rejected() {
        let findings = validate_text("name: test\nversion: 1.0\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].kind, FindingKind::TypeMismatch);
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_finding_serializes_lowercase() {
        let finding = Finding::warning(FindingKind::OutOfRange, 3, "x");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["kind"], "out-of-range");
        assert_eq!(json["line"], 3);
    }
}
