use crate::config::Settings;
use crate::io::worker::{spawn_worker, IoCommand, IoResult};
use crate::message::Message;
use crate::state::{
    AppMode, MatchRecord, Notice, NoticeKind, ResultsState, SearchError, SearchRequest, UIState,
};
use eframe::egui;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};

pub struct TxtSeek {
    // Persisted form state
    pub settings: Settings,
    pub settings_path: PathBuf,

    pub mode: AppMode,
    pub ui: UIState,
    pub results: ResultsState,

    // Worker channels
    command_tx: Sender<IoCommand>,
    result_rx: Receiver<IoResult>,
}

impl TxtSeek {
    pub fn new(ctx: egui::Context, settings: Settings, settings_path: PathBuf) -> Self {
        let (command_tx, result_rx) = spawn_worker(ctx);

        Self {
            settings,
            settings_path,
            mode: AppMode::Normal,
            ui: UIState::new(),
            results: ResultsState::new(),
            command_tx,
            result_rx,
        }
    }

    pub fn dispatch(&mut self, message: Message) {
        match message {
            Message::Search => self.start_search(),
            Message::ChooseFolder => self.choose_folder(),
            Message::FolderChosen(path) => self.folder_chosen(path),
            Message::SelectResult(index) => self.select_result(index),
            Message::ActivateResult => self.activate_selected(),
            Message::DismissNotice => self.mode = AppMode::Normal,
            Message::SearchFinished(result) => self.search_finished(result),
        }
    }

    fn start_search(&mut self) {
        if self.ui.search_in_progress {
            return;
        }

        let request = match SearchRequest::new(
            self.settings.folder(),
            self.ui.search_term.clone(),
            self.settings.search_options(),
        ) {
            Ok(request) => request,
            Err(e) => {
                self.show_error(e.to_string());
                return;
            }
        };

        tracing::debug!(
            root = %request.root_path().display(),
            term = request.term(),
            subfolders = request.search_subfolders(),
            regex = request.use_regex(),
            "Starting search"
        );

        self.results.clear();
        if self.command_tx.send(IoCommand::Search(request)).is_err() {
            self.show_error("The search worker has stopped.".to_string());
            return;
        }
        self.ui.search_in_progress = true;
    }

    fn search_finished(&mut self, result: Result<Vec<MatchRecord>, SearchError>) {
        self.ui.search_in_progress = false;
        match result {
            Ok(records) => {
                let count = records.len();
                self.results.set_records(records);
                if count > 0 {
                    self.show_info(format!("Found {} match(es).", count));
                }
            }
            Err(e) => {
                self.results.clear();
                self.show_error(e.to_string());
            }
        }
    }

    fn choose_folder(&mut self) {
        let current = self.settings.folder();
        let start = if current.is_dir() {
            current
        } else {
            directories::UserDirs::new()
                .map(|ud| ud.home_dir().to_path_buf())
                .unwrap_or_else(|| env::current_dir().unwrap_or_default())
        };

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Choose Search Folder")
            .set_directory(&start)
            .pick_folder()
        {
            self.dispatch(Message::FolderChosen(path));
        }
    }

    fn folder_chosen(&mut self, path: PathBuf) {
        // The settings file stores the folder as a JSON string.
        let folder_path = match path.into_os_string().into_string() {
            Ok(folder_path) => folder_path,
            Err(raw) => {
                tracing::warn!("Rejected non-UTF-8 folder {:?}", raw);
                self.show_error(
                    "The chosen folder name is not valid UTF-8 and can't be used.".to_string(),
                );
                return;
            }
        };
        self.settings.folder_path = folder_path;
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            tracing::warn!("{}", e);
            self.show_error(e.to_string());
        }
    }

    fn select_result(&mut self, index: usize) {
        if self.results.select(index) {
            self.activate_selected();
        }
    }

    fn activate_selected(&mut self) {
        let Some(record) = self.results.selected_record() else {
            return;
        };
        let path = record.file_path.clone();
        self.open_file(&path);
    }

    fn open_file(&mut self, path: &Path) {
        if !path.exists() {
            self.show_error("The file does not exist.".to_string());
            return;
        }
        if let Err(e) = open::that(path) {
            self.show_error(format!("Could not open file: {}", e));
        }
    }

    pub(crate) fn poll_worker(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            let message = match result {
                IoResult::SearchCompleted(records) => Message::SearchFinished(Ok(records)),
                IoResult::SearchFailed(e) => Message::SearchFinished(Err(e)),
            };
            self.dispatch(message);
        }
    }

    fn show_error(&mut self, message: String) {
        self.mode = AppMode::Notice(Notice {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message,
        });
    }

    fn show_info(&mut self, message: String) {
        self.mode = AppMode::Notice(Notice {
            kind: NoticeKind::Info,
            title: "Results".to_string(),
            message,
        });
    }
}

impl eframe::App for TxtSeek {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        // Deferred actions
        let mut pending = Vec::new();
        self.handle_input(ctx, &mut pending);
        let blocked = self.mode.is_blocked();

        egui::TopBottomPanel::top("form_panel").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| self.render_form(ui, &mut pending));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| self.render_results(ui, &mut pending));
        });

        self.render_notice_modal(ctx, &mut pending);

        for message in pending {
            self.dispatch(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SETTINGS_FILE;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    fn app_in(folder: &Path, settings_dir: &Path) -> TxtSeek {
        let settings = Settings {
            folder_path: folder.to_string_lossy().into_owned(),
            ..Settings::default()
        };
        TxtSeek::new(
            egui::Context::default(),
            settings,
            settings_dir.join(SETTINGS_FILE),
        )
    }

    fn wait_for_search(app: &mut TxtSeek) {
        for _ in 0..1000 {
            app.poll_worker();
            if !app.ui.search_in_progress {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("search did not finish");
    }

    fn notice(app: &TxtSeek) -> &Notice {
        match &app.mode {
            AppMode::Notice(notice) => notice,
            AppMode::Normal => panic!("expected a notice"),
        }
    }

    #[test]
    fn test_empty_term_shows_error_without_searching() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.dispatch(Message::Search);

        assert!(!app.ui.search_in_progress);
        let notice = notice(&app);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Please enter a term to search for.");
    }

    #[test]
    fn test_search_lists_matches_and_reports_count() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "apple\nbanana\nApple pie\n").unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.ui.search_term = "apple".to_string();

        app.dispatch(Message::Search);
        assert!(app.ui.search_in_progress);
        wait_for_search(&mut app);

        assert_eq!(app.results.records.len(), 2);
        assert_eq!(
            app.results.records[1].to_string(),
            format!(
                "Found in '{}' at line 3: Apple pie",
                dir.path().join("notes.txt").display()
            )
        );
        let notice = notice(&app);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.message, "Found 2 match(es).");

        app.dispatch(Message::DismissNotice);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_no_matches_is_not_a_notice() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "nothing here\n").unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.ui.search_term = "zebra".to_string();

        app.dispatch(Message::Search);
        wait_for_search(&mut app);

        assert!(app.results.records.is_empty());
        assert!(app.results.searched);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_missing_folder_shows_error() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir.path().join("missing"), dir.path());
        app.ui.search_term = "apple".to_string();

        app.dispatch(Message::Search);
        wait_for_search(&mut app);

        assert!(app.results.records.is_empty());
        let notice = notice(&app);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("does not exist"));
    }

    #[test]
    fn test_regex_checkbox_is_honoured() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "apple\n").unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.settings.use_regex = true;
        app.ui.search_term = "(".to_string();

        app.dispatch(Message::Search);
        wait_for_search(&mut app);

        assert!(notice(&app).message.starts_with("Invalid regular expression"));
    }

    #[test]
    fn test_second_search_ignored_while_busy() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.ui.search_term = "x".to_string();
        app.ui.search_in_progress = true;

        app.dispatch(Message::Search);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.result_rx.try_recv().is_err());
    }

    #[test]
    fn test_folder_choice_writes_settings() {
        let dir = TempDir::new().unwrap();
        let chosen = dir.path().join("chosen");
        fs::create_dir(&chosen).unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.settings.search_subfolders = true;

        app.dispatch(Message::FolderChosen(chosen.clone()));

        let saved = Settings::load_from(&dir.path().join(SETTINGS_FILE));
        assert_eq!(saved.folder_path, chosen.to_string_lossy());
        assert!(saved.search_subfolders);
        assert!(!saved.use_regex);
        assert_eq!(app.settings, saved);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_folder_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let dir = TempDir::new().unwrap();
        let mut app = app_in(dir.path(), dir.path());
        let before = app.settings.clone();
        let mut raw = dir.path().as_os_str().to_owned().into_vec();
        raw.extend_from_slice(b"/bad\xff");

        app.dispatch(Message::FolderChosen(PathBuf::from(OsString::from_vec(raw))));

        assert_eq!(app.settings, before);
        assert!(!dir.path().join(SETTINGS_FILE).exists());
        let notice = notice(&app);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("not valid UTF-8"));
    }

    #[test]
    fn test_selecting_deleted_file_shows_error() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.results.set_records(vec![MatchRecord {
            file_path: dir.path().join("gone.txt"),
            line_number: 1,
            line_text: "x".to_string(),
        }]);

        app.dispatch(Message::SelectResult(0));

        assert_eq!(app.results.selected_index, Some(0));
        assert_eq!(notice(&app).message, "The file does not exist.");
    }

    #[test]
    fn test_activate_without_selection_does_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(dir.path(), dir.path());
        app.dispatch(Message::ActivateResult);
        assert_eq!(app.mode, AppMode::Normal);
    }
}
