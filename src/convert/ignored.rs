//! Ignored-entry recorder.
//!
//! Appends one NDJSON record per rejected or unparsable entry. Failures to
//! append are never fatal to the run; they are logged and the recorder
//! goes quiet.

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One rejected entry, serialized as a single JSON line.
#[derive(Debug, Serialize)]
pub struct IgnoredRecord<'a> {
    /// Display name (may be empty for orphan target lines).
    pub name: &'a str,
    /// Raw category hint, if the entry carried one.
    pub category: Option<&'a str>,
    /// Group label.
    pub group: Option<&'a str>,
    /// Name attribute.
    pub tvg_name: Option<&'a str>,
    /// Target reference.
    pub url: Option<&'a str>,
    /// Short rejection reason.
    pub reason: &'a str,
}

/// Append-mode recorder, open for the lifetime of one run.
///
/// A run header (timestamp + input identifier) is written before the first
/// record, so a run that ignores nothing leaves the log untouched.
pub struct IgnoredLog {
    out: Option<BufWriter<std::fs::File>>,
    header: Option<String>,
}

impl IgnoredLog {
    /// Open the log for one run. `None` path or dry-run disables recording.
    pub fn open(path: Option<&Path>, dry_run: bool, input_id: &str) -> Self {
        let disabled = Self {
            out: None,
            header: None,
        };

        let Some(path) = path else { return disabled };
        if dry_run {
            return disabled;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                out: Some(BufWriter::new(file)),
                header: Some(format!(
                    "# run {} input={}",
                    chrono::Utc::now().to_rfc3339(),
                    input_id
                )),
            },
            Err(e) => {
                log::warn!("cannot open ignored-entry log {:?}: {}", path, e);
                disabled
            }
        }
    }

    /// Append one record. Failures disable further recording.
    pub fn record(&mut self, record: &IgnoredRecord<'_>) {
        let header = self.header.take();
        let Some(out) = self.out.as_mut() else { return };

        let result = (|| -> std::io::Result<()> {
            if let Some(header) = header {
                writeln!(out, "{header}")?;
            }
            let line = serde_json::to_string(record)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{line}")
        })();

        if let Err(e) = result {
            log::warn!("failed to append to ignored-entry log: {}", e);
            self.out = None;
        }
    }

    /// Flush pending records. Called at the end of a run; Drop covers
    /// error paths.
    pub fn finish(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                log::warn!("failed to flush ignored-entry log: {}", e);
            }
        }
        self.out = None;
    }
}

impl Drop for IgnoredLog {
    fn drop(&mut self) {
        self.finish();
    }
}
