//! Two-state line pairing over a playlist source.

use super::extinf::{ExtinfLine, METADATA_SIGIL};
use crate::error::ConvertError;
use crate::model::PlaylistEntry;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One unit produced by the parser.
#[derive(Debug)]
pub enum ParsedItem {
    /// A metadata line paired with the target line that followed it.
    Entry(PlaylistEntry),

    /// A target line with no preceding metadata line. Counted as one
    /// ignored unit by the orchestrator.
    Orphan(String),
}

/// Lazy, finite, non-restartable sequence of parsed items.
///
/// State machine with two states: awaiting-metadata (`pending == None`)
/// and have-metadata. A new `#EXTINF:` line overwrites any unterminated
/// one; orphaned metadata is never emitted as an error. Other `#` lines
/// are comments, blank lines are ignored.
pub struct Entries<B> {
    lines: io::Lines<B>,
    pending: Option<ExtinfLine>,
}

impl<B: BufRead> Entries<B> {
    pub fn new(reader: B) -> Self {
        Self {
            lines: reader.lines(),
            pending: None,
        }
    }
}

impl<B: BufRead> Iterator for Entries<B> {
    type Item = io::Result<ParsedItem>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            // CRLF input leaves a trailing \r on each line.
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with(METADATA_SIGIL) {
                self.pending = ExtinfLine::parse(line);
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            // Target reference line.
            return match self.pending.take() {
                Some(meta) => Some(Ok(ParsedItem::Entry(PlaylistEntry {
                    attributes: meta.attributes,
                    name: meta.name,
                    url: line.to_string(),
                }))),
                None => Some(Ok(ParsedItem::Orphan(line.to_string()))),
            };
        }
    }
}

/// Open a playlist file for parsing.
///
/// Fails with `InputNotFound` before any parsing begins when the source
/// does not exist.
pub fn open_playlist(path: &Path) -> Result<Entries<BufReader<File>>, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(Entries::new(BufReader::new(file)))
}
