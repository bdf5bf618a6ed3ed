//! Live channel path derivation.

use super::sanitize::{sanitize, sanitize_or};
use crate::model::{Category, PlaylistEntry};
use std::path::PathBuf;

/// Derive the relative output path for an accepted live entry:
/// `Live/<group>/<channel>.strm`. The include-live gate lives in the
/// dispatcher; by the time this runs the entry is accepted.
pub fn live_path(entry: &PlaylistEntry) -> PathBuf {
    let group = sanitize_or(entry.group().unwrap_or(""), "Live");

    let channel = {
        let from_name = sanitize(&entry.name);
        if !from_name.is_empty() {
            from_name
        } else {
            sanitize_or(entry.name_attr().unwrap_or(""), "Unknown Channel")
        }
    };

    let mut path = PathBuf::from(Category::Live.root());
    path.push(group);
    path.push(format!("{channel}.strm"));
    path
}
