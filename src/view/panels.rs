// Panel rendering for TxtSeek
// Search form, results table and status bar

use crate::app::TxtSeek;
use crate::message::Message;
use crate::style;
use eframe::egui;

impl TxtSeek {
    pub(crate) fn render_form(&mut self, ui: &mut egui::Ui, pending: &mut Vec<Message>) {
        ui.add_space(4.0);
        ui.label("Enter the term to search for:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.ui.search_term).desired_width(f32::INFINITY),
        );
        if self.ui.focus_input {
            response.request_focus();
            self.ui.focus_input = false;
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.ui.search_in_progress, egui::Button::new("Search"))
                .clicked()
            {
                pending.push(Message::Search);
            }
            if ui.button("Choose Folder").clicked() {
                pending.push(Message::ChooseFolder);
            }
            if self.ui.search_in_progress {
                ui.spinner();
                ui.label("Searching...");
            }
        });

        ui.checkbox(&mut self.settings.search_subfolders, "Search in subfolders");
        ui.checkbox(&mut self.settings.use_regex, "Use regular expressions");
        ui.add_space(4.0);
    }

    pub(crate) fn render_results(&self, ui: &mut egui::Ui, pending: &mut Vec<Message>) {
        if self.results.records.is_empty() {
            if self.results.searched {
                ui.label(style::NO_MATCHES_LABEL);
            }
            return;
        }

        use egui_extras::{Column, TableBuilder};
        let selected = self.results.selected_index;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .auto_shrink([false, false])
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().clip(true))
            .body(|body| {
                body.rows(style::ROW_HEIGHT, self.results.records.len(), |mut row| {
                    let index = row.index();
                    let record = &self.results.records[index];
                    row.set_selected(selected == Some(index));
                    row.col(|ui| {
                        let response = style::truncated_label_with_sense(
                            ui,
                            record.to_string(),
                            egui::Sense::click(),
                        )
                        .on_hover_text(record.file_path.display().to_string());
                        if response.clicked() {
                            pending.push(Message::SelectResult(index));
                        }
                    });
                });
            });
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} match(es)", self.results.records.len()));
            ui.separator();
            style::truncated_label(ui, format!("Folder: {}", self.settings.folder_path));
        });
    }
}
