use serde_yaml::Value;

/// Declared type of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Boolean,
    Number,
    Object,
}

impl FieldType {
    /// Check whether a parsed value has this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Boolean => value.is_bool(),
            FieldType::Number => value.is_number(),
            FieldType::Object => value.is_mapping(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Number => write!(f, "number"),
            FieldType::Object => write!(f, "object"),
        }
    }
}

/// Static metadata for one schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Dotted path from the document root, e.g. `settings.timeout`
    pub path: &'static str,
    /// Bare key as written in the document
    pub key: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub description: &'static str,
    /// Literal text inserted when the field is picked from completion
    pub insert_text: &'static str,
}

impl FieldDescriptor {
    /// Parent path for nested fields, `None` at the top level
    pub fn parent(&self) -> Option<&'static str> {
        self.path.rsplit_once('.').map(|(parent, _)| parent)
    }

    /// Short detail line, e.g. `string (required)`
    pub fn detail(&self) -> String {
        if self.required {
            format!("{} (required)", self.field_type)
        } else {
            format!("{} (optional)", self.field_type)
        }
    }
}

/// All known fields, in declaration order
pub static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        path: "name",
        key: "name",
        field_type: FieldType::String,
        required: true,
        description: "The name of the application.",
        insert_text: "name: ",
    },
    FieldDescriptor {
        path: "version",
        key: "version",
        field_type: FieldType::String,
        required: true,
        description: "The version of the application, e.g. \"1.0.0\".",
        insert_text: "version: ",
    },
    FieldDescriptor {
        path: "enabled",
        key: "enabled",
        field_type: FieldType::Boolean,
        required: false,
        description: "Whether the application is enabled (true or false).",
        insert_text: "enabled: ",
    },
    FieldDescriptor {
        path: "settings",
        key: "settings",
        field_type: FieldType::Object,
        required: false,
        description: "Additional runtime settings.",
        insert_text: "settings:\n  ",
    },
    FieldDescriptor {
        path: "settings.timeout",
        key: "timeout",
        field_type: FieldType::Number,
        required: false,
        description: "Timeout in seconds.",
        insert_text: "timeout: ",
    },
    FieldDescriptor {
        path: "settings.retries",
        key: "retries",
        field_type: FieldType::Number,
        required: false,
        description: "Number of retries on failure. Must be 0 or greater.",
        insert_text: "retries: ",
    },
];

/// Required fields, in declaration order
pub fn required_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(|field| field.required)
}

/// Fields that live at the document root
pub fn top_level_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(|field| field.parent().is_none())
}

/// Fields nested directly under `parent`
pub fn nested_fields(parent: &str) -> impl Iterator<Item = &'static FieldDescriptor> + '_ {
    FIELDS
        .iter()
        .filter(move |field| field.parent() == Some(parent))
}

/// Look up a field by its bare key
pub fn lookup(key: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.key == key)
}

/// Look up a field by its dotted path
pub fn lookup_path(path: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_in_declaration_order() {
        let required: Vec<_> = required_fields().map(|f| f.key).collect();
        assert_eq!(required, vec!["name", "version"]);
    }

    #[test]
    fn test_top_level_and_nested_split() {
        let top: Vec<_> = top_level_fields().map(|f| f.key).collect();
        assert_eq!(top, vec!["name", "version", "enabled", "settings"]);

        let nested: Vec<_> = nested_fields("settings").map(|f| f.key).collect();
        assert_eq!(nested, vec!["timeout", "retries"]);
    }

    #[test]
    fn test_lookup_by_key_and_path() {
        let timeout = lookup("timeout").unwrap();
        assert_eq!(timeout.path, "settings.timeout");
        assert_eq!(timeout.parent(), Some("settings"));
        assert_eq!(lookup_path("settings.retries").unwrap().key, "retries");
        assert!(lookup("unknown").is_none());
    }

    #[test]
    fn test_field_type_matches() {
        assert!(FieldType::String.matches(&Value::String("x".to_string())));
        assert!(!FieldType::String.matches(&Value::Bool(true)));
        assert!(FieldType::Number.matches(&serde_yaml::from_str::<Value>("-1.5").unwrap()));
        assert!(!FieldType::Object.matches(&Value::Null));
        assert!(FieldType::Object.matches(&serde_yaml::from_str::<Value>("a: 1").unwrap()));
    }

    #[test]
    fn test_detail() {
        assert_eq!(lookup("name").unwrap().detail(), "string (required)");
        assert_eq!(lookup("enabled").unwrap().detail(), "boolean (optional)");
    }
}
