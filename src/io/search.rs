use crate::state::{MatchRecord, SearchError, SearchRequest};
use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const TEXT_EXTENSION: &[u8] = b".txt";

enum LineMatcher {
    Regex(RegexMatcher),
    /// Lowercased term.
    Literal(String),
}

impl LineMatcher {
    fn new(request: &SearchRequest) -> Result<Self, SearchError> {
        if request.use_regex() {
            let matcher = RegexMatcherBuilder::new()
                .case_insensitive(true)
                .build(request.term())?;
            Ok(Self::Regex(matcher))
        } else {
            Ok(Self::Literal(request.term().to_lowercase()))
        }
    }

    fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Regex(matcher) => matches!(matcher.is_match(line.as_bytes()), Ok(true)),
            Self::Literal(term) => line.to_lowercase().contains(term.as_str()),
        }
    }
}

/// Walks `request.root_path()` and returns every matching line of every
/// `.txt` file, in walk order then line order.
///
/// Fails before touching the tree if the root is missing or the pattern does
/// not compile. Any error opening or reading a candidate file aborts the
/// whole search.
pub fn search(request: &SearchRequest) -> Result<Vec<MatchRecord>, SearchError> {
    let root = request.root_path();
    if !root.exists() {
        return Err(SearchError::DirectoryNotFound(root.to_path_buf()));
    }

    let matcher = LineMatcher::new(request)?;
    let mut results = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        // Depth 0 is the root itself; depth 1 entries live directly in it.
        if entry.depth() == 0 {
            continue;
        }
        if !request.search_subfolders() && entry.depth() > 1 {
            continue;
        }
        if !is_text_file(&entry) {
            continue;
        }

        scan_file(entry.path(), &matcher, &mut results)?;
    }

    tracing::debug!(
        root = %root.display(),
        term = request.term(),
        matches = results.len(),
        "search finished"
    );

    Ok(results)
}

fn is_text_file(entry: &DirEntry) -> bool {
    if !entry
        .file_name()
        .as_encoded_bytes()
        .ends_with(TEXT_EXTENSION)
    {
        return false;
    }
    match entry.file_type() {
        Some(ft) if ft.is_dir() => false,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => true,
    }
}

/// Splits one `read_until(b'\n')` chunk into lines, treating `\n`, `\r\n`
/// and a lone `\r` as terminators. Terminators are not included.
fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    let chunk = if chunk.ends_with("\r\n") {
        &chunk[..chunk.len() - 1]
    } else {
        chunk
    };
    chunk
        .split_inclusive(['\r', '\n'])
        .map(|piece| piece.trim_end_matches(['\r', '\n']))
}

fn scan_file(
    path: &Path,
    matcher: &LineMatcher,
    results: &mut Vec<MatchRecord>,
) -> Result<(), SearchError> {
    let io_error = |source| SearchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(io_error)? == 0 {
            break;
        }
        let chunk = std::str::from_utf8(&buf)
            .map_err(|e| io_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        for line in split_lines(chunk) {
            line_number += 1;
            if matcher.is_match(line) {
                results.push(MatchRecord {
                    file_path: path.to_path_buf(),
                    line_number,
                    line_text: line.trim_end().to_string(),
                });
            }
        }
    }

    Ok(())
}
