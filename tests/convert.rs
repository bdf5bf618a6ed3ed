use std::fs;
use std::path::{Path, PathBuf};
use strmsync::{convert, Category, ConvertError, MovieLayout, RunOptions};
use tempfile::TempDir;

fn write_playlist(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write playlist");
    path
}

#[test]
fn test_movie_by_year_scenario() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let input = write_playlist(
        work.path(),
        "movies.m3u",
        "#EXTM3U\n#EXTINF:-1 tvg-type=\"movie\" group-title=\"VOD\",Title (2023)\nhttp://example/title\n",
    );

    let options = RunOptions::new(out.path().to_path_buf());
    let summary = convert(&input, &options).unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.ignored, 0);

    let marker = out.path().join("Movies/2023/Title (2023).strm");
    assert!(marker.exists());
    assert_eq!(
        fs::read_to_string(&marker).unwrap(),
        "http://example/title\n"
    );

    let last = summary.last_written.unwrap();
    assert_eq!(last.path, PathBuf::from("Movies/2023/Title (2023).strm"));
    assert_eq!(last.url, "http://example/title");
}

#[test]
fn test_second_run_skips_existing() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let input = write_playlist(
        work.path(),
        "list.m3u",
        concat!(
            "#EXTM3U\n",
            "#EXTINF:-1 tvg-type=\"movie\",Alpha (2020)\nhttp://example/a\n",
            "#EXTINF:-1 tvg-type=\"series\",Show S01E01\nhttp://example/s1e1\n",
        ),
    );

    let options = RunOptions::new(out.path().to_path_buf());
    let first = convert(&input, &options).unwrap();
    let second = convert(&input, &options).unwrap();

    assert_eq!(first.written, 2);
    assert_eq!(second.written, 0);
    assert_eq!(second.skipped, first.written);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let work = TempDir::new().unwrap();
    let dry_out = TempDir::new().unwrap();
    let real_out = TempDir::new().unwrap();

    let body = concat!(
        "#EXTM3U\n",
        "#EXTINF:-1 tvg-type=\"movie\",Alpha (2020)\nhttp://example/a\n",
        "#EXTINF:-1 tvg-type=\"live\",News 24\nhttp://example/n\n",
    );
    let input = write_playlist(work.path(), "list.m3u", body);

    let dry = convert(
        &input,
        &RunOptions::new(dry_out.path().to_path_buf()).with_dry_run(true),
    )
    .unwrap();
    let real = convert(&input, &RunOptions::new(real_out.path().to_path_buf())).unwrap();

    assert_eq!(dry.written, real.written);
    assert_eq!(dry.ignored, real.ignored);

    // Nothing on disk for the dry run.
    assert!(!dry_out.path().join("Movies").exists());
    assert_eq!(fs::read_dir(dry_out.path()).unwrap().count(), 0);
    assert!(real_out.path().join("Movies").exists());
}

#[test]
fn test_live_excluded_is_logged() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let log_path = work.path().join("ignored.ndjson");

    let input = write_playlist(
        work.path(),
        "live.m3u",
        "#EXTM3U\n#EXTINF:-1 tvg-type=\"live\" group-title=\"News\",CNN International\nhttp://example/cnn\n",
    );

    let options = RunOptions::new(out.path().to_path_buf()).with_ignored_log(log_path.clone());
    let summary = convert(&input, &options).unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(summary.ignored, 1);

    let text = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("# run "));

    let record: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(record["name"], "CNN International");
    assert_eq!(record["group"], "News");
    assert!(record["reason"].as_str().unwrap().contains("excluded"));
}

#[test]
fn test_live_included_when_enabled() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let input = write_playlist(
        work.path(),
        "live.m3u",
        "#EXTM3U\n#EXTINF:-1 tvg-type=\"live\" group-title=\"News\",CNN International\nhttp://example/cnn\n",
    );

    let options = RunOptions::new(out.path().to_path_buf()).with_live(true);
    let summary = convert(&input, &options).unwrap();

    assert_eq!(summary.written, 1);
    assert!(out
        .path()
        .join("Live/News/CNN International.strm")
        .exists());
}

#[test]
fn test_delete_missing_removes_stale_episode_and_empty_dirs() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let both = write_playlist(
        work.path(),
        "both.m3u",
        concat!(
            "#EXTM3U\n",
            "#EXTINF:-1 tvg-type=\"series\",My Show S01E01\nhttp://example/e1\n",
            "#EXTINF:-1 tvg-type=\"series\",My Show S01E02\nhttp://example/e2\n",
        ),
    );
    let only_first = write_playlist(
        work.path(),
        "one.m3u",
        "#EXTM3U\n#EXTINF:-1 tvg-type=\"series\",My Show S01E01\nhttp://example/e1\n",
    );
    let movie_only = write_playlist(
        work.path(),
        "movie.m3u",
        "#EXTM3U\n#EXTINF:-1 tvg-type=\"movie\",Alpha (2020)\nhttp://example/a\n",
    );

    let base = RunOptions::new(out.path().to_path_buf());
    convert(&both, &base).unwrap();

    let e1 = out
        .path()
        .join("TV Shows/My Show/Season 01/My Show S01E01.strm");
    let e2 = out
        .path()
        .join("TV Shows/My Show/Season 01/My Show S01E02.strm");
    assert!(e1.exists());
    assert!(e2.exists());

    // Second run: only E01 remains upstream, E02 must go; E01 untouched.
    let summary = convert(&only_first, &base.clone().with_delete_missing(true)).unwrap();
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.delete_failures, 0);
    assert!(e1.exists());
    assert!(!e2.exists());
    assert_eq!(fs::read_to_string(&e1).unwrap(), "http://example/e1\n");

    // Third run: the show is gone entirely, its directories are pruned.
    let summary = convert(&movie_only, &base.with_delete_missing(true)).unwrap();
    assert_eq!(summary.deleted, 1);
    assert!(!out.path().join("TV Shows/My Show").exists());
    assert!(out.path().join("Movies/2020/Alpha (2020).strm").exists());
}

#[test]
fn test_delete_missing_keeps_skipped_files() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let input = write_playlist(
        work.path(),
        "list.m3u",
        "#EXTM3U\n#EXTINF:-1 tvg-type=\"movie\",Alpha (2020)\nhttp://example/a\n",
    );

    let options = RunOptions::new(out.path().to_path_buf()).with_delete_missing(true);
    convert(&input, &options).unwrap();
    let second = convert(&input, &options).unwrap();

    // Present in both runs: skipped, not deleted.
    assert_eq!(second.skipped, 1);
    assert_eq!(second.deleted, 0);
    assert!(out.path().join("Movies/2020/Alpha (2020).strm").exists());
}

#[test]
fn test_orphan_target_and_unknown_type_are_ignored() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let log_path = work.path().join("ignored.ndjson");

    let input = write_playlist(
        work.path(),
        "odd.m3u",
        concat!(
            "#EXTM3U\n",
            "http://example/orphan\n",
            "#EXTINF:-1 tvg-type=\"radio\",Some Station\nhttp://example/radio\n",
        ),
    );

    let options = RunOptions::new(out.path().to_path_buf()).with_ignored_log(log_path.clone());
    let summary = convert(&input, &options).unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(summary.ignored, 2);

    let text = fs::read_to_string(&log_path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["url"], "http://example/orphan");
    assert_eq!(records[0]["reason"], "target without metadata");
    assert_eq!(records[1]["category"], "radio");
}

#[test]
fn test_default_category_applies_to_untyped_entries() {
    let work = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let input = write_playlist(
        work.path(),
        "untyped.m3u",
        "#EXTM3U\n#EXTINF:-1 group-title=\"VOD 2019\",Parasite\nhttp://example/p\n",
    );

    let options = RunOptions::new(out.path().to_path_buf())
        .with_default_category(Category::Movie)
        .with_movie_layout(MovieLayout::ByFolder);
    let summary = convert(&input, &options).unwrap();

    assert_eq!(summary.written, 1);
    assert!(out
        .path()
        .join("Movies/Parasite/Parasite.strm")
        .exists());
}

#[test]
fn test_missing_input_is_typed_error() {
    let out = TempDir::new().unwrap();
    let options = RunOptions::new(out.path().to_path_buf());

    let err = convert(Path::new("/nonexistent/playlist.m3u"), &options).unwrap_err();
    assert!(matches!(err, ConvertError::InputNotFound(_)));
    // No output was created before the failure.
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}
