// UI state - form input and busy flag

pub struct UIState {
    pub search_term: String,
    pub search_in_progress: bool,
    pub focus_input: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            search_in_progress: false,
            focus_input: true,
        }
    }
}
