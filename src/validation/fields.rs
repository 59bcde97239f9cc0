use super::locate::locate_field;
use super::{Finding, FindingKind};
use crate::schema::{self, FieldType};
use serde_yaml::{Mapping, Value};

/// Check a parsed root mapping against the schema.
///
/// Every violation is reported independently; only a non-object `settings`
/// suppresses the checks nested beneath it.
pub fn validate(document: &Mapping, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for field in schema::required_fields() {
        if !document.contains_key(field.key) {
            findings.push(Finding::error(
                FindingKind::MissingRequiredField,
                0,
                format!("required field \"{}\" is missing", field.key),
            ));
        }
    }

    for key in ["name", "version"] {
        if let Some(value) = document.get(key)
            && !FieldType::String.matches(value)
        {
            findings.push(Finding::error(
                FindingKind::TypeMismatch,
                locate_field(text, key),
                format!("\"{}\" must be a string", key),
            ));
        }
    }

    if let Some(enabled) = document.get("enabled")
        && !FieldType::Boolean.matches(enabled)
    {
        findings.push(Finding::warning(
            FindingKind::TypeMismatch,
            locate_field(text, "enabled"),
            "\"enabled\" must be a boolean (true or false)",
        ));
    }

    if let Some(settings) = document.get("settings") {
        match settings.as_mapping() {
            Some(settings) => validate_settings(settings, text, &mut findings),
            None => findings.push(Finding::error(
                FindingKind::TypeMismatch,
                locate_field(text, "settings"),
                "\"settings\" must be an object",
            )),
        }
    }

    findings
}

fn validate_settings(settings: &Mapping, text: &str, findings: &mut Vec<Finding>) {
    for key in ["timeout", "retries"] {
        if let Some(value) = settings.get(key)
            && !FieldType::Number.matches(value)
        {
            findings.push(Finding::warning(
                FindingKind::TypeMismatch,
                locate_field(text, key),
                format!("\"settings.{}\" must be a number", key),
            ));
        }
    }

    if let Some(retries) = settings.get("retries").and_then(Value::as_f64)
        && retries < 0.0
    {
        findings.push(Finding::warning(
            FindingKind::OutOfRange,
            locate_field(text, "retries"),
            "\"settings.retries\" must be ≥ 0",
        ));
    }
}
