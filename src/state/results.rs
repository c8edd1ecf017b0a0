// Results state - last search output and the highlighted row
use crate::state::MatchRecord;

pub struct ResultsState {
    pub records: Vec<MatchRecord>,
    pub selected_index: Option<usize>,
    /// Set once a search has completed, so an empty list can say so.
    pub searched: bool,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selected_index: None,
            searched: false,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.selected_index = None;
        self.searched = false;
    }

    pub fn set_records(&mut self, records: Vec<MatchRecord>) {
        self.records = records;
        self.selected_index = None;
        self.searched = true;
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.selected_index = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_record(&self) -> Option<&MatchRecord> {
        self.selected_index.and_then(|idx| self.records.get(idx))
    }
}
