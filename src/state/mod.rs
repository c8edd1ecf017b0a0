pub mod mode;
pub mod results;
pub mod search;
pub mod ui;

pub use mode::{AppMode, Notice, NoticeKind};
pub use results::ResultsState;
pub use search::{MatchRecord, SearchError, SearchOptions, SearchRequest};
pub use ui::UIState;
