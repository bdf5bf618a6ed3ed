//! Movie path derivation.

use super::sanitize::sanitize;
use crate::model::{Category, MovieLayout, PlaylistEntry};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Trailing "(YYYY)" in the display name, same 19xx/20xx range as the
/// group-label token below. Takes precedence over any year in the group
/// label.
static TRAILING_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(((19|20)\d{2})\)\s*$").unwrap());

/// A 4-digit year token anywhere in the group label.
static YEAR_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((19|20)\d{2})\b").unwrap());

const UNKNOWN_YEAR: &str = "Unknown";
const UNKNOWN_TITLE: &str = "Unknown Movie";

/// Derive the relative output path for a movie entry. Movies never reject:
/// both the year and the title have literal fallbacks.
pub fn movie_path(entry: &PlaylistEntry, layout: MovieLayout) -> PathBuf {
    let year = resolve_year(entry);
    let title = resolve_title(entry);

    let mut path = PathBuf::from(Category::Movie.root());
    match layout {
        MovieLayout::ByYear => {
            path.push(year);
            path.push(format!("{title}.strm"));
        }
        MovieLayout::Flat => {
            path.push(format!("{title}.strm"));
        }
        MovieLayout::ByFolder => {
            path.push(&title);
            path.push(format!("{title}.strm"));
        }
    }
    path
}

/// Trailing year in the display name, then any year token in the group
/// label, then the literal placeholder.
fn resolve_year(entry: &PlaylistEntry) -> String {
    if let Some(caps) = TRAILING_YEAR_RE.captures(&entry.name) {
        if let Some(year) = caps.get(1) {
            return year.as_str().to_string();
        }
    }

    if let Some(group) = entry.group() {
        if let Some(caps) = YEAR_TOKEN_RE.captures(group) {
            if let Some(year) = caps.get(1) {
                return year.as_str().to_string();
            }
        }
    }

    UNKNOWN_YEAR.to_string()
}

/// Sanitized display name, then the name attribute, then the literal
/// placeholder.
fn resolve_title(entry: &PlaylistEntry) -> String {
    let title = sanitize(&entry.name);
    if !title.is_empty() {
        return title;
    }

    if let Some(name_attr) = entry.name_attr() {
        let title = sanitize(name_attr);
        if !title.is_empty() {
            return title;
        }
    }

    UNKNOWN_TITLE.to_string()
}
