mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod stats;
mod ui;
mod view;

use app::DashboardApp;
use config::DashboardConfig;
use data::cache::DatasetCache;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let cache = DatasetCache::new(config.data_path.clone());
    let app = DashboardApp::new(cache, config.filter_column);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title)
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    eframe::run_native(
        config.window_title,
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the svg logo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
