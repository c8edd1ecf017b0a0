// Notice rendering: the blocking message box for errors and result counts

use crate::app::TxtSeek;
use crate::message::Message;
use crate::state::{AppMode, NoticeKind};
use crate::style;
use eframe::egui;

impl TxtSeek {
    pub(crate) fn render_notice_modal(&self, ctx: &egui::Context, pending: &mut Vec<Message>) {
        let AppMode::Notice(notice) = &self.mode else {
            return;
        };

        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice_modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                let color = match notice.kind {
                    NoticeKind::Info => ui.visuals().text_color(),
                    NoticeKind::Error => style::ERROR_COLOR,
                };
                ui.label(egui::RichText::new(notice.message.as_str()).color(color));
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        pending.push(Message::DismissNotice);
                    }
                });
            });
    }
}
