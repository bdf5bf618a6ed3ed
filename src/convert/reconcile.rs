//! Delete-missing reconciliation.
//!
//! Removes previously generated marker files that the current run did not
//! produce, then prunes directories left empty. The sweep never leaves the
//! three category roots, and individual delete failures are counted, not
//! raised, so one locked file cannot abort the pass.

use crate::model::Category;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Marker-file extension the sweep is allowed to delete.
const MARKER_EXT: &str = "strm";

/// Per-item outcomes of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteStats {
    pub deleted: usize,
    pub failed: usize,
}

/// Delete marker files under the category roots whose relative path is not
/// in `managed`, then prune empty directories.
///
/// `managed` must contain every relative path classification produced in
/// the current run, including paths whose write was skipped because the
/// file already existed.
pub fn reconcile(output_root: &Path, managed: &HashSet<PathBuf>) -> DeleteStats {
    let mut stats = DeleteStats::default();

    for root_name in Category::ROOTS {
        let root = output_root.join(root_name);
        if !root.is_dir() {
            continue;
        }

        let stale = collect_stale(output_root, &root, managed);

        // Independent removals; only the counters are shared.
        let (deleted, failed) = stale
            .par_iter()
            .map(|path| match fs::remove_file(path) {
                Ok(()) => {
                    log::debug!("deleted stale marker {:?}", path);
                    (1, 0)
                }
                Err(e) => {
                    log::warn!("failed to delete {:?}: {}", path, e);
                    (0, 1)
                }
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        stats.deleted += deleted;
        stats.failed += failed;

        prune_empty_dirs(&root);
    }

    stats
}

/// Marker files under `root` not present in the managed set.
fn collect_stale(output_root: &Path, root: &Path, managed: &HashSet<PathBuf>) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKER_EXT))
        })
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(output_root).ok()?;
            if managed.contains(relative) {
                None
            } else {
                Some(entry.path().to_path_buf())
            }
        })
        .collect()
}

/// Remove directories left empty by the sweep, children before parents.
/// The category root itself stays in place even when emptied.
/// Best-effort: a failed removal is logged and skipped.
fn prune_empty_dirs(root: &Path) {
    let walker = WalkDir::new(root).min_depth(1).contents_first(true);
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        let is_empty = fs::read_dir(dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if is_empty {
            if let Err(e) = fs::remove_dir(dir) {
                log::debug!("could not remove empty dir {:?}: {}", dir, e);
            }
        }
    }
}
