//! Entry classification.
//!
//! Pure mapping of (attributes, display name, options) to a relative,
//! category-rooted output path, or to a rejection. Rejection is a normal
//! outcome routed to the ignored-entry log, never an error.

mod live;
mod movie;
pub mod sanitize;
mod tv;

use crate::model::{Category, PlaylistEntry, RunOptions};
use std::path::PathBuf;

/// Why an entry was rejected. Stringified into the ignored-entry log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Live entry while live entries are excluded by configuration.
    LiveExcluded,
    /// No recognized type attribute and no default category configured.
    UnknownCategory,
    /// TV entry without a season/episode marker, a name attribute or any
    /// derivable show base.
    NoShowBase,
    /// Target line that had no preceding metadata line.
    TargetWithoutMetadata,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::LiveExcluded => "live type excluded by configuration",
            RejectReason::UnknownCategory => "unknown or missing category",
            RejectReason::NoShowBase => "no season/episode marker, name attribute or show base",
            RejectReason::TargetWithoutMetadata => "target without metadata",
        }
    }
}

/// Outcome of classifying one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Relative output path, rooted at one of the three category roots,
    /// paired with the original target reference.
    Accept { path: PathBuf, url: String },
    Reject { reason: RejectReason },
}

/// Classify one parsed entry. Category comes from the type attribute
/// (case-insensitive), falling back to the configured default category.
pub fn classify(entry: &PlaylistEntry, options: &RunOptions) -> Classification {
    let category = entry
        .type_hint()
        .and_then(Category::from_hint)
        .or(options.default_category);

    let path = match category {
        Some(Category::Tv) => match tv::tv_path(entry) {
            Ok(path) => path,
            Err(reason) => return Classification::Reject { reason },
        },
        Some(Category::Movie) => movie::movie_path(entry, options.movie_layout),
        Some(Category::Live) => {
            if !options.include_live {
                return Classification::Reject {
                    reason: RejectReason::LiveExcluded,
                };
            }
            live::live_path(entry)
        }
        None => {
            return Classification::Reject {
                reason: RejectReason::UnknownCategory,
            }
        }
    };

    Classification::Accept {
        path,
        url: entry.url.clone(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::entry;
    use super::*;
    use crate::model::RunOptions;
    use std::path::PathBuf;

    fn options() -> RunOptions {
        RunOptions::new(PathBuf::from("/out"))
    }

    #[test]
    fn test_unknown_type_without_default_rejects() {
        let e = entry(&[("tvg-type", "radio")], "Some Station", "http://x");
        let result = classify(&e, &options());
        assert_eq!(
            result,
            Classification::Reject {
                reason: RejectReason::UnknownCategory
            }
        );
    }

    #[test]
    fn test_missing_type_uses_default_category() {
        let e = entry(&[], "Heat (1995)", "http://x");
        let opts = options().with_default_category(crate::model::Category::Movie);

        match classify(&e, &opts) {
            Classification::Accept { path, .. } => {
                assert!(path.starts_with("Movies"));
            }
            other => panic!("expected accept, got {other:?}"),
        }
    }

    #[test]
    fn test_live_rejected_unless_enabled() {
        let e = entry(&[("tvg-type", "live")], "News 24", "http://x");

        assert_eq!(
            classify(&e, &options()),
            Classification::Reject {
                reason: RejectReason::LiveExcluded
            }
        );

        match classify(&e, &options().with_live(true)) {
            Classification::Accept { path, .. } => assert!(path.starts_with("Live")),
            other => panic!("expected accept, got {other:?}"),
        }
    }

    #[test]
    fn test_accepted_paths_are_category_rooted() {
        let cases = [
            entry(&[("tvg-type", "movie")], "Heat (1995)", "http://m"),
            entry(&[("tvg-type", "series")], "Show S01E01", "http://t"),
        ];
        for e in cases {
            match classify(&e, &options()) {
                Classification::Accept { path, .. } => {
                    let root = path.components().next().unwrap();
                    let root = root.as_os_str().to_string_lossy();
                    assert!(crate::model::Category::ROOTS.contains(&root.as_ref()));
                    assert!(!path.to_string_lossy().contains(".."));
                }
                other => panic!("expected accept, got {other:?}"),
            }
        }
    }
}
