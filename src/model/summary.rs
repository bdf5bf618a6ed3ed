use std::path::PathBuf;

/// The last entry a run successfully wrote (or would have written in
/// dry-run mode).
#[derive(Debug, Clone)]
pub struct LastWritten {
    /// Path relative to the output root.
    pub path: PathBuf,
    /// Target reference the marker file contains.
    pub url: String,
}

/// Counters accumulated over one conversion run, returned immutably at the
/// end.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Marker files written (or reported as "would write" in dry-run mode).
    pub written: usize,

    /// Entries skipped because the marker file already exists and
    /// overwriting is disabled.
    pub skipped: usize,

    /// Entries rejected by classification or unparsable input units.
    pub ignored: usize,

    /// Stale marker files removed by reconciliation.
    pub deleted: usize,

    /// Stale marker files reconciliation failed to remove. Never fatal.
    pub delete_failures: usize,

    /// Path/target of the last successfully written entry.
    pub last_written: Option<LastWritten>,
}

impl RunSummary {
    /// Fold another run's counters into this one. Used by the periodic
    /// driver to aggregate a batch cycle.
    pub fn merge(&mut self, other: &RunSummary) {
        self.written += other.written;
        self.skipped += other.skipped;
        self.ignored += other.ignored;
        self.deleted += other.deleted;
        self.delete_failures += other.delete_failures;
        if other.last_written.is_some() {
            self.last_written = other.last_written.clone();
        }
    }
}
