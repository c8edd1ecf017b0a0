// Keyboard handling for TxtSeek

use crate::app::TxtSeek;
use crate::message::Message;
use crate::state::AppMode;
use eframe::egui;

const HANDLED_KEYS: [egui::Key; 2] = [egui::Key::Enter, egui::Key::Escape];

impl TxtSeek {
    pub(crate) fn handle_input(&self, ctx: &egui::Context, pending: &mut Vec<Message>) {
        for key in HANDLED_KEYS {
            if ctx.input(|i| i.key_pressed(key)) {
                if let Some(message) = handle_key(key, &self.mode) {
                    pending.push(message);
                }
            }
        }
    }
}

pub fn handle_key(key: egui::Key, mode: &AppMode) -> Option<Message> {
    match (mode, key) {
        (AppMode::Notice(_), egui::Key::Enter | egui::Key::Escape) => Some(Message::DismissNotice),
        (AppMode::Normal, egui::Key::Enter) => Some(Message::ActivateResult),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Notice, NoticeKind};

    fn notice_mode() -> AppMode {
        AppMode::Notice(Notice {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: "boom".to_string(),
        })
    }

    #[test]
    fn test_enter_opens_selected_result() {
        assert!(matches!(
            handle_key(egui::Key::Enter, &AppMode::Normal),
            Some(Message::ActivateResult)
        ));
        assert!(handle_key(egui::Key::Escape, &AppMode::Normal).is_none());
    }

    #[test]
    fn test_notice_swallows_enter() {
        assert!(matches!(
            handle_key(egui::Key::Enter, &notice_mode()),
            Some(Message::DismissNotice)
        ));
        assert!(matches!(
            handle_key(egui::Key::Escape, &notice_mode()),
            Some(Message::DismissNotice)
        ));
    }
}
