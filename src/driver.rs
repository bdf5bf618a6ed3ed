//! Periodic driver: batch cycles over several playlist sources and an
//! interval-based loop around them.
//!
//! The conversion core is stateless between calls; everything that
//! persists across runs lives here, in an explicit job-state value.

use crate::convert::{convert_source, reconcile};
use crate::error::ConvertError;
use crate::model::{RunOptions, RunSummary};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mutable state owned by the periodic driver, passed by reference into
/// start/stop operations. The core never sees it.
#[derive(Debug, Default)]
pub struct JobState {
    /// Whether a cycle loop is currently active.
    pub running: bool,
    /// Completed cycles since the driver started.
    pub cycles: u64,
    /// When the last cycle finished.
    pub last_cycle: Option<DateTime<Utc>>,
    /// Aggregated counters of the last cycle.
    pub last_totals: Option<RunSummary>,
}

/// Convert every source into the shared output root, one run per source.
///
/// When deletion is requested it runs once, after the **last** source of
/// the cycle, against the union of every source's managed paths:
/// reconciling per source would delete what the other sources own. The
/// deletion counters land on the last summary.
pub fn run_cycle(
    inputs: &[PathBuf],
    options: &RunOptions,
) -> Result<Vec<RunSummary>, ConvertError> {
    let mut summaries = Vec::with_capacity(inputs.len());
    let mut managed_union: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        let (summary, managed) = convert_source(input, options)?;
        summaries.push(summary);
        managed_union.extend(managed);
    }

    if options.delete_missing && !options.dry_run {
        log::info!(
            "Reconciling output tree against {} entries from {} sources",
            managed_union.len(),
            inputs.len()
        );
        let stats = reconcile(&options.output_root, &managed_union);
        if let Some(last) = summaries.last_mut() {
            last.deleted = stats.deleted;
            last.delete_failures = stats.failed;
        }
    }

    Ok(summaries)
}

/// Sum a cycle's per-source summaries.
pub fn cycle_totals(summaries: &[RunSummary]) -> RunSummary {
    let mut totals = RunSummary::default();
    for summary in summaries {
        totals.merge(summary);
    }
    totals
}

/// Interval loop around [`run_cycle`].
///
/// Single-threaded: one cycle at a time against the output root, which is
/// the at-most-one-run-per-root guarantee the core expects its caller to
/// provide. A failed cycle is logged and retried on the next tick; writes
/// are idempotent, so re-running from scratch is safe.
pub struct Scheduler {
    inputs: Vec<PathBuf>,
    options: RunOptions,
    interval: Duration,
    stop: Arc<AtomicBool>,
}

impl Scheduler {
    pub fn new(inputs: Vec<PathBuf>, options: RunOptions, interval: Duration) -> Self {
        Self {
            inputs,
            options,
            interval,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle another thread can use to stop the loop after the current
    /// cycle.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run cycles until stopped.
    pub fn run(&self, state: &mut JobState) {
        state.running = true;

        while !self.stop.load(Ordering::Relaxed) {
            match run_cycle(&self.inputs, &self.options) {
                Ok(summaries) => {
                    state.cycles += 1;
                    state.last_cycle = Some(Utc::now());
                    state.last_totals = Some(cycle_totals(&summaries));
                }
                Err(e) => {
                    log::error!("cycle failed, retrying next tick: {}", e);
                }
            }

            self.sleep_until_tick();
        }

        state.running = false;
    }

    /// Sleep in short slices so a stop request stays responsive.
    fn sleep_until_tick(&self) {
        let slice = Duration::from_millis(200);
        let mut remaining = self.interval;
        while remaining > Duration::ZERO && !self.stop.load(Ordering::Relaxed) {
            let nap = remaining.min(slice);
            std::thread::sleep(nap);
            remaining = remaining.saturating_sub(nap);
        }
    }
}
