use regex::Regex;
use std::sync::LazyLock;

/// A key declaration at any indentation: `<ws>key<ws>:`
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^\s:]+)\s*:").expect("key pattern is valid"));

/// Find the first 0-based line declaring `field` as a key, at any indentation
pub fn find_field_line(text: &str, field: &str) -> Option<usize> {
    text.lines().position(|line| {
        KEY_PATTERN
            .captures(line)
            .and_then(|caps| caps.get(1))
            .is_some_and(|key| key.as_str() == field)
    })
}

/// Line of the first declaration of `field`, or 0 when the key does not appear
pub fn locate_field(text: &str, field: &str) -> usize {
    find_field_line(text, field).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "name: test\nsettings:\n  timeout: 30\n  retries: 3\n";

    #[test]
    fn test_locate_nested_fields() {
        assert_eq!(locate_field(SAMPLE, "name"), 0);
        assert_eq!(locate_field(SAMPLE, "settings"), 1);
        assert_eq!(locate_field(SAMPLE, "timeout"), 2);
        assert_eq!(locate_field(SAMPLE, "retries"), 3);
    }

    #[test]
    fn test_missing_field_defaults_to_zero() {
        assert_eq!(locate_field(SAMPLE, "version"), 0);
        assert_eq!(find_field_line(SAMPLE, "version"), None);
    }

    #[test]
    fn test_whitespace_before_colon() {
        assert_eq!(find_field_line("a: 1\nenabled   : yes\n", "enabled"), Some(1));
    }

    #[test]
    fn test_prefix_of_longer_key_does_not_match() {
        assert_eq!(find_field_line("names: x\nname: y\n", "name"), Some(1));
    }

    #[test]
    fn test_field_names_match_literally() {
        assert_eq!(find_field_line("axb: 1\na.b: 2\n", "a.b"), Some(1));
        assert_eq!(find_field_line("- name: x\n", "name"), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "settings:\n  name: inner\nname: outer\n";
        assert_eq!(find_field_line(text, "name"), Some(1));
    }
}
