//! Run orchestration: parse, classify, write, reconcile, one entry at a
//! time in file order.

use super::ignored::{IgnoredLog, IgnoredRecord};
use super::reconcile::reconcile;
use super::writer::{write_marker, WriteOutcome};
use crate::classify::{classify, Classification, RejectReason};
use crate::error::ConvertError;
use crate::model::{LastWritten, PlaylistEntry, RunOptions, RunSummary};
use crate::playlist::{open_playlist, ParsedItem};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Convert one playlist into the marker-file tree.
///
/// Sequential per entry, so the set of paths produced this run is exact by
/// the time reconciliation uses it. Returns a complete summary, or fails
/// with `InputNotFound` before any output mutation, or with an I/O error
/// after partial output (safe to re-run; writes are idempotent).
pub fn convert(input: &Path, options: &RunOptions) -> Result<RunSummary, ConvertError> {
    let (mut summary, managed) = convert_source(input, options)?;

    if options.delete_missing && !options.dry_run {
        log::info!("Reconciling output tree against {} entries", managed.len());
        let stats = reconcile(&options.output_root, &managed);
        summary.deleted = stats.deleted;
        summary.delete_failures = stats.failed;
    }

    log::info!(
        "Run complete: {} written, {} skipped, {} ignored, {} deleted",
        summary.written,
        summary.skipped,
        summary.ignored,
        summary.deleted
    );

    Ok(summary)
}

/// Parse, classify and write one playlist without reconciling, returning
/// the summary together with the set of relative paths classification
/// produced. The periodic driver unions these sets across a batch cycle
/// before running a single reconciliation pass.
pub(crate) fn convert_source(
    input: &Path,
    options: &RunOptions,
) -> Result<(RunSummary, HashSet<PathBuf>), ConvertError> {
    log::info!("Converting {:?} -> {:?}", input, options.output_root);
    if options.dry_run {
        log::info!("Dry-run: no filesystem mutation");
    }

    let entries = open_playlist(input)?;

    let mut summary = RunSummary::default();
    let mut managed: HashSet<PathBuf> = HashSet::new();
    let mut ignored_log = IgnoredLog::open(
        options.ignored_log.as_deref(),
        options.dry_run,
        &input.display().to_string(),
    );

    for item in entries {
        let item = item.map_err(|e| ConvertError::io(input, e))?;
        match item {
            ParsedItem::Orphan(url) => {
                summary.ignored += 1;
                ignored_log.record(&IgnoredRecord {
                    name: "",
                    category: None,
                    group: None,
                    tvg_name: None,
                    url: Some(&url),
                    reason: RejectReason::TargetWithoutMetadata.as_str(),
                });
            }
            ParsedItem::Entry(entry) => match classify(&entry, options) {
                Classification::Accept { path, url } => {
                    match write_marker(
                        &options.output_root,
                        &path,
                        &url,
                        options.overwrite,
                        options.dry_run,
                    )? {
                        WriteOutcome::Written | WriteOutcome::WouldWrite => {
                            summary.written += 1;
                            summary.last_written = Some(LastWritten {
                                path: path.clone(),
                                url,
                            });
                        }
                        WriteOutcome::Skipped => summary.skipped += 1,
                    }
                    // Skipped files are still current; reconciliation must
                    // keep them.
                    managed.insert(path);
                }
                Classification::Reject { reason } => {
                    summary.ignored += 1;
                    record_rejection(&mut ignored_log, &entry, reason);
                }
            },
        }
    }

    ignored_log.finish();

    Ok((summary, managed))
}

fn record_rejection(log: &mut IgnoredLog, entry: &PlaylistEntry, reason: RejectReason) {
    log.record(&IgnoredRecord {
        name: &entry.name,
        category: entry.type_hint(),
        group: entry.group(),
        tvg_name: entry.name_attr(),
        url: Some(&entry.url),
        reason: reason.as_str(),
    });
}
