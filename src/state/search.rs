use std::fmt;
use std::path::{Path, PathBuf};

/// Flags the search form exposes alongside the term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub search_subfolders: bool,
    pub use_regex: bool,
}

/// A fully specified search. Fields are private so a request cannot change
/// after it has been validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    root_path: PathBuf,
    term: String,
    options: SearchOptions,
}

impl SearchRequest {
    pub fn new(
        root_path: impl Into<PathBuf>,
        term: impl Into<String>,
        options: SearchOptions,
    ) -> Result<Self, SearchError> {
        let term = term.into();
        if term.is_empty() {
            return Err(SearchError::EmptySearchTerm);
        }
        Ok(Self {
            root_path: root_path.into(),
            term,
            options,
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn search_subfolders(&self) -> bool {
        self.options.search_subfolders
    }

    pub fn use_regex(&self) -> bool {
        self.options.use_regex
    }
}

/// One matching line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub file_path: PathBuf,
    /// 1-based, counted per file.
    pub line_number: usize,
    /// Line content with trailing whitespace removed.
    pub line_text: String,
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found in '{}' at line {}: {}",
            self.file_path.display(),
            self.line_number,
            self.line_text
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("The search folder does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Please enter a term to search for.")]
    EmptySearchTerm,

    #[error("Invalid regular expression: {0}")]
    Pattern(#[from] grep_regex::Error),

    #[error("Could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
