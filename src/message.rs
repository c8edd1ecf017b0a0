use crate::state::{MatchRecord, SearchError};
use std::path::PathBuf;

/// Every user intent and background event the app reacts to.
#[derive(Debug)]
pub enum Message {
    // Form
    Search,
    ChooseFolder,
    FolderChosen(PathBuf),

    // Results
    SelectResult(usize),
    ActivateResult,

    // Notices
    DismissNotice,

    // Worker
    SearchFinished(Result<Vec<MatchRecord>, SearchError>),
}
