use std::path::PathBuf;
use std::str::FromStr;

/// Media category an accepted entry is filed under. Each category maps to
/// one top-level folder of the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tv,
    Movie,
    Live,
}

impl Category {
    /// The three top-level output folders. Reconciliation never touches
    /// anything outside these.
    pub const ROOTS: [&'static str; 3] = ["TV Shows", "Movies", "Live"];

    /// Top-level folder for this category.
    pub fn root(self) -> &'static str {
        match self {
            Category::Tv => "TV Shows",
            Category::Movie => "Movies",
            Category::Live => "Live",
        }
    }

    /// Map a `type` attribute value to a category, case-insensitively.
    /// Returns `None` for anything unrecognized.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "tv" | "series" | "show" | "shows" => Some(Category::Tv),
            "movie" | "movies" | "vod" => Some(Category::Movie),
            "live" => Some(Category::Live),
            _ => None,
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_hint(s).ok_or_else(|| format!("unknown category: {s:?}"))
    }
}

/// How movie marker files are laid out under `Movies/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieLayout {
    /// `Movies/<year>/<title>.strm`
    #[default]
    ByYear,
    /// `Movies/<title>.strm`
    Flat,
    /// `Movies/<title>/<title>.strm`
    ByFolder,
}

impl FromStr for MovieLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "by-year" | "year" => Ok(MovieLayout::ByYear),
            "flat" => Ok(MovieLayout::Flat),
            "by-folder" | "folder" => Ok(MovieLayout::ByFolder),
            _ => Err(format!(
                "unknown movie layout: {s:?} (expected by-year, flat or by-folder)"
            )),
        }
    }
}

/// Immutable configuration for one conversion run.
///
/// Constructed by the caller, passed by reference into one `convert()`
/// call, never mutated during the run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root directory the three category trees are created under.
    pub output_root: PathBuf,

    /// Accept live entries instead of rejecting them.
    pub include_live: bool,

    /// Overwrite marker files that already exist.
    pub overwrite: bool,

    /// Compute and report outcomes without touching the filesystem.
    pub dry_run: bool,

    /// Layout of the `Movies/` tree.
    pub movie_layout: MovieLayout,

    /// Run the delete-missing reconciliation pass after writing.
    pub delete_missing: bool,

    /// Append rejected entries to this NDJSON log. `None` disables the log.
    pub ignored_log: Option<PathBuf>,

    /// Category assumed when an entry carries no usable type attribute.
    pub default_category: Option<Category>,
}

impl RunOptions {
    /// Options with conservative defaults: live excluded, no overwrite,
    /// no deletion, by-year movie layout.
    pub fn new(output_root: PathBuf) -> Self {
        Self {
            output_root,
            include_live: false,
            overwrite: false,
            dry_run: false,
            movie_layout: MovieLayout::ByYear,
            delete_missing: false,
            ignored_log: None,
            default_category: None,
        }
    }

    /// Accept live entries.
    pub fn with_live(mut self, include: bool) -> Self {
        self.include_live = include;
        self
    }

    /// Overwrite existing marker files.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Simulate the run without filesystem mutation.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the movie tree layout.
    pub fn with_movie_layout(mut self, layout: MovieLayout) -> Self {
        self.movie_layout = layout;
        self
    }

    /// Enable the delete-missing reconciliation pass.
    pub fn with_delete_missing(mut self, delete: bool) -> Self {
        self.delete_missing = delete;
        self
    }

    /// Log rejected entries to the given path.
    pub fn with_ignored_log(mut self, path: PathBuf) -> Self {
        self.ignored_log = Some(path);
        self
    }

    /// Assume this category for entries without a type attribute.
    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = Some(category);
        self
    }
}
