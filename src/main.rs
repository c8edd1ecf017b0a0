mod app;
mod config;
mod input;
mod io;
mod message;
mod state;
mod style;
mod view;

use app::TxtSeek;
use config::Settings;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings_path = Settings::settings_path();
    let settings = Settings::load_from(&settings_path);
    tracing::debug!(?settings, "Loaded settings");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(style::WINDOW_SIZE)
            .with_title(style::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        style::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(TxtSeek::new(
                cc.egui_ctx.clone(),
                settings,
                settings_path,
            )))
        }),
    )
}
