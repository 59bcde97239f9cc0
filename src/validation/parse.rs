use serde_yaml::Value;

/// A document that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub message: String,
    /// 1-based line of the error, when the parser reports one
    pub line: Option<usize>,
    /// 1-based column of the error, when the parser reports one
    pub column: Option<usize>,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "{} (line {}, column {})", self.message, line, column)
            }
            _ => write!(f, "{}", self.message),
        }
    }
}

impl From<serde_yaml::Error> for ParseFailure {
    fn from(error: serde_yaml::Error) -> Self {
        let location = error.location();
        Self {
            message: error.to_string(),
            line: location.as_ref().map(|loc| loc.line()),
            column: location.as_ref().map(|loc| loc.column()),
        }
    }
}

/// Drop one leading UTF-8 byte-order mark
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Parse a YAML document into a value tree. Empty input yields `Value::Null`.
pub fn parse(text: &str) -> Result<Value, ParseFailure> {
    serde_yaml::from_str(strip_bom(text)).map_err(ParseFailure::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping() {
        let value = parse("name: test\nsettings:\n  timeout: 30\n").unwrap();
        let mapping = value.as_mapping().unwrap();
        assert_eq!(mapping.get("name").and_then(Value::as_str), Some("test"));
        assert!(mapping.get("settings").unwrap().is_mapping());
    }

    #[test]
    fn test_parse_empty_is_null() {
        assert!(parse("").unwrap().is_null());
    }

    #[test]
    fn test_parse_failure_carries_location() {
        let failure = parse("name: test\nversion: [1.0.0\n").unwrap_err();
        assert!(!failure.message.is_empty());
        assert!(failure.line.is_some());
        assert!(failure.column.is_some());
    }

    #[test]
    fn test_parse_with_byte_order_mark() {
        let value = parse("\u{feff}name: test\n").unwrap();
        assert!(value.is_mapping());
    }

    #[test]
    fn test_duplicate_keys_fail() {
        assert!(parse("name: a\nname: b\n").is_err());
    }
}
