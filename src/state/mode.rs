#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message box. Nothing else reacts to input while one is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Notice(Notice),
}

impl AppMode {
    pub fn is_blocked(&self) -> bool {
        matches!(self, AppMode::Notice(_))
    }
}
