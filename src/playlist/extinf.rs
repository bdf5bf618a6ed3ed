//! `#EXTINF:` metadata line parsing.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Prefix that marks a metadata line.
pub const METADATA_SIGIL: &str = "#EXTINF:";

/// `key="value"` tokens: word characters and hyphens in the key, anything
/// but a double quote in the value. Embedded quotes are not escapable; that
/// is a deliberate limitation of the format as providers emit it.
static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([\w-]+)="([^"]*)""#).unwrap());

/// Attributes and display name extracted from one metadata line.
#[derive(Debug, Clone)]
pub struct ExtinfLine {
    pub attributes: HashMap<String, String>,
    pub name: String,
}

impl ExtinfLine {
    /// Parse a metadata line. Returns `None` when the line does not start
    /// with the `#EXTINF:` sigil.
    ///
    /// The line is split at the *last* comma: everything after it, trimmed,
    /// is the display name; everything before it is scanned for attributes.
    /// Commas inside attribute values are therefore allowed, at the cost of
    /// misparsing a display name that itself contains a comma. A line with
    /// no comma at all yields an empty display name.
    pub fn parse(line: &str) -> Option<Self> {
        line.strip_prefix(METADATA_SIGIL).map(Self::parse_content)
    }

    fn parse_content(content: &str) -> Self {
        let (head, name) = match content.rsplit_once(',') {
            Some((head, name)) => (head, name.trim().to_string()),
            None => (content, String::new()),
        };

        let mut attributes = HashMap::new();
        for caps in ATTR_RE.captures_iter(head) {
            // A later duplicate key overwrites an earlier one.
            attributes.insert(caps[1].to_string(), caps[2].to_string());
        }

        ExtinfLine { attributes, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let line = r#"#EXTINF:-1 tvg-id="bb" tvg-name="Breaking Bad S01E01" group-title="Series",Breaking Bad S01E01"#;
        let ext = ExtinfLine::parse(line).unwrap();

        assert_eq!(ext.name, "Breaking Bad S01E01");
        assert_eq!(ext.attributes.get("tvg-id").unwrap(), "bb");
        assert_eq!(ext.attributes.get("group-title").unwrap(), "Series");
    }

    #[test]
    fn test_not_a_metadata_line() {
        assert!(ExtinfLine::parse("#EXTM3U").is_none());
        assert!(ExtinfLine::parse("http://example/stream").is_none());
    }

    #[test]
    fn test_splits_at_last_comma() {
        // Comma inside an attribute value must not truncate the name.
        let line = r#"#EXTINF:-1 group-title="Drama, Crime",The Wire S02E03"#;
        let ext = ExtinfLine::parse(line).unwrap();

        assert_eq!(ext.name, "The Wire S02E03");
        assert_eq!(ext.attributes.get("group-title").unwrap(), "Drama, Crime");
    }

    #[test]
    fn test_comma_in_display_name_misparses() {
        // Known rightmost-comma limitation: the name loses its comma prefix.
        let line = r#"#EXTINF:-1 tvg-type="movie",Good, Bad and Ugly"#;
        let ext = ExtinfLine::parse(line).unwrap();

        assert_eq!(ext.name, "Bad and Ugly");
    }

    #[test]
    fn test_no_comma_yields_empty_name() {
        let line = r#"#EXTINF:-1 tvg-name="Channel One""#;
        let ext = ExtinfLine::parse(line).unwrap();

        assert_eq!(ext.name, "");
        assert_eq!(ext.attributes.get("tvg-name").unwrap(), "Channel One");
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let line = r#"#EXTINF:-1 tvg-name="first" tvg-name="second",X"#;
        let ext = ExtinfLine::parse(line).unwrap();

        assert_eq!(ext.attributes.get("tvg-name").unwrap(), "second");
    }

    #[test]
    fn test_minimal_line() {
        let ext = ExtinfLine::parse("#EXTINF:-1,Canal Uno").unwrap();

        assert_eq!(ext.name, "Canal Uno");
        assert!(ext.attributes.is_empty());
    }
}
