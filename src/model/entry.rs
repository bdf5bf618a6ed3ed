use std::collections::HashMap;

/// One playable item as parsed from the playlist.
///
/// Constructed per entry and consumed immediately by the classifier;
/// nothing retains it across entries.
#[derive(Debug, Clone)]
pub struct PlaylistEntry {
    /// `key="value"` attributes from the metadata line. Keys are unique;
    /// a later duplicate overwrites an earlier one.
    pub attributes: HashMap<String, String>,

    /// Free-text display name (everything after the last comma).
    pub name: String,

    /// Target reference: the stream locator from the line following the
    /// metadata line.
    pub url: String,
}

impl PlaylistEntry {
    /// Look up an attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Category hint. Providers emit either `tvg-type` or a bare `type`.
    pub fn type_hint(&self) -> Option<&str> {
        self.attr("tvg-type").or_else(|| self.attr("type"))
    }

    /// Group label (`group-title` or bare `group`).
    pub fn group(&self) -> Option<&str> {
        self.attr("group-title").or_else(|| self.attr("group"))
    }

    /// Name attribute (`tvg-name` or bare `name`), distinct from the
    /// display name.
    pub fn name_attr(&self) -> Option<&str> {
        self.attr("tvg-name").or_else(|| self.attr("name"))
    }
}
