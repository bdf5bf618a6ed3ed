//! TV show path derivation.

use super::sanitize::{sanitize, sanitize_or};
use super::RejectReason;
use crate::model::{Category, PlaylistEntry};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Season/episode marker: 1-2 digit season, 1-3 digit episode, loosely
/// spaced, case-insensitive.
static EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS\s*(\d{1,2})\s*E\s*(\d{1,3})").unwrap());

/// Group labels ending in "(YYYY)" carry the canonical show name.
static GROUP_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((19|20)\d{2}\)\s*$").unwrap());

/// Derive the relative output path for a TV entry.
///
/// With a season/episode marker:
/// `TV Shows/<show>/Season <SS>/<show> S<SS>E<EE>.strm`. The show name
/// comes from the group label when that label ends in a year marker
/// (more reliable than the display name), otherwise from the display name
/// with the marker removed.
///
/// Without a marker, an entry that still carries a name attribute gets a
/// flat per-show fallback file rather than being dropped silently.
pub fn tv_path(entry: &PlaylistEntry) -> Result<PathBuf, RejectReason> {
    let group = entry.group().unwrap_or("");

    if let Some(caps) = EPISODE_RE.captures(&entry.name) {
        let (Some(whole), Some(s), Some(e)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            return Err(RejectReason::NoShowBase);
        };
        let season: u32 = s.as_str().parse().unwrap_or(0);
        let episode: u32 = e.as_str().parse().unwrap_or(0);

        let show = if !group.is_empty() && GROUP_YEAR_RE.is_match(group) {
            sanitize_or(group, "Unknown Show")
        } else {
            let mut residual = String::with_capacity(entry.name.len());
            residual.push_str(&entry.name[..whole.start()]);
            residual.push_str(&entry.name[whole.end()..]);
            let residual = sanitize(&residual);
            if residual.is_empty() {
                sanitize_or(group, "Unknown Show")
            } else {
                residual
            }
        };

        let mut path = PathBuf::from(Category::Tv.root());
        path.push(&show);
        path.push(format!("Season {season:02}"));
        path.push(format!("{show} S{season:02}E{episode:02}.strm"));
        return Ok(path);
    }

    // No marker: fall back to the name attribute so a named but
    // unparsable episode is not dropped.
    if let Some(name_attr) = entry.name_attr() {
        let show = first_nonempty(&[group, entry.name.as_str(), name_attr]);
        let Some(show) = show else {
            return Err(RejectReason::NoShowBase);
        };

        let mut path = PathBuf::from(Category::Tv.root());
        path.push(show);
        path.push(format!("{}.strm", sanitize_or(name_attr, "Unknown Episode")));
        return Ok(path);
    }

    Err(RejectReason::NoShowBase)
}

/// First candidate that survives sanitization.
fn first_nonempty(candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| sanitize(c))
        .find(|c| !c.is_empty())
}
