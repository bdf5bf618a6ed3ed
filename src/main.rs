use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use strmsync::driver::{run_cycle, JobState, Scheduler};
use strmsync::{Category, MovieLayout, RunOptions, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "strmsync")]
#[command(about = "Convert M3U playlists into .strm marker-file trees", long_about = None)]
struct Args {
    /// Playlist file(s). With several inputs, reconciliation runs only
    /// after the last one.
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output root for the TV Shows/, Movies/ and Live/ trees
    #[arg(short = 'o', long)]
    output: String,

    /// Accept live entries instead of ignoring them
    #[arg(long)]
    include_live: bool,

    /// Overwrite marker files that already exist
    #[arg(long)]
    overwrite: bool,

    /// Report what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Movie tree layout: by-year, flat or by-folder
    #[arg(long, default_value = "by-year")]
    movie_layout: String,

    /// Delete previously generated marker files missing from the input
    #[arg(long)]
    delete_missing: bool,

    /// Append rejected entries to this NDJSON log
    #[arg(long)]
    ignored_log: Option<String>,

    /// Category assumed for entries without a type attribute (tv, movie or live)
    #[arg(long)]
    default_category: Option<String>,

    /// Re-run every N seconds instead of converting once
    #[arg(long)]
    interval: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let inputs: Vec<PathBuf> = args
        .inputs
        .iter()
        .map(|input| PathBuf::from(shellexpand::tilde(input).as_ref()))
        .collect();
    let output = PathBuf::from(shellexpand::tilde(&args.output).as_ref());

    let movie_layout: MovieLayout = args
        .movie_layout
        .parse()
        .map_err(anyhow::Error::msg)
        .context("invalid --movie-layout")?;

    let mut options = RunOptions::new(output)
        .with_live(args.include_live)
        .with_overwrite(args.overwrite)
        .with_dry_run(args.dry_run)
        .with_movie_layout(movie_layout)
        .with_delete_missing(args.delete_missing);

    if let Some(path) = &args.ignored_log {
        options = options.with_ignored_log(PathBuf::from(shellexpand::tilde(path).as_ref()));
    }

    if let Some(hint) = &args.default_category {
        let category: Category = hint
            .parse()
            .map_err(anyhow::Error::msg)
            .context("invalid --default-category")?;
        options = options.with_default_category(category);
    }

    if let Some(seconds) = args.interval {
        log::info!("Periodic mode: converting every {}s", seconds);
        let scheduler = Scheduler::new(inputs, options, Duration::from_secs(seconds));
        let mut state = JobState::default();
        scheduler.run(&mut state);
        return Ok(());
    }

    let summaries = run_cycle(&inputs, &options)?;
    let mut totals = RunSummary::default();
    for summary in &summaries {
        totals.merge(summary);
    }

    log::info!(
        "Done: {} written, {} skipped, {} ignored, {} deleted ({} delete failures)",
        totals.written,
        totals.skipped,
        totals.ignored,
        totals.deleted,
        totals.delete_failures
    );
    if let Some(last) = &totals.last_written {
        log::info!("Last written: {:?} <- {}", last.path, last.url);
    }

    Ok(())
}
