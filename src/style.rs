use eframe::egui;

pub const WINDOW_TITLE: &str = "Search Text in Files";
pub const WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 22.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 260.0;
pub const MODAL_MAX_WIDTH: f32 = 420.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

// --- Colors ---
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);

// --- Labels ---
pub const NO_MATCHES_LABEL: &str = "No matches found.";

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(WINDOW_SIZE[0])
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
