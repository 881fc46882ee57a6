use eframe::egui;

use crate::data::cache::DatasetCache;
use crate::data::model::CategoricalColumn;
use crate::state::{AppState, Tab};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    cache: DatasetCache,
    pub state: AppState,
}

impl DashboardApp {
    /// Resolve the load once; the outcome fixes the state for the session.
    pub fn new(cache: DatasetCache, column: CategoricalColumn) -> Self {
        let state = AppState::from_cache(&cache, column);
        Self { cache, state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dashboard = match &mut self.state {
            AppState::Error { message } => {
                // ---- Error: title and one message, nothing else ----
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::page_title(ui);
                    ui.add_space(8.0);
                    panels::error_message(ui, message);
                });
                return;
            }
            AppState::Loaded(dashboard) => dashboard,
        };

        // ---- Left side panel: filter ----
        let source = self.cache.path().display().to_string();
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, dashboard, &source);
            });

        // ---- Central panel: metrics and tabs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::page_title(ui);
            panels::page_intro(ui);
            panels::summary_tiles(ui, &dashboard.view().summary);
            ui.separator();
            panels::tab_bar(ui, &mut dashboard.tab);
            ui.add_space(8.0);

            let view = dashboard.view();
            match dashboard.tab {
                Tab::MainAnalysis => {
                    ui.heading(format!("📈 Odds Ratio for: {}", view.selection));
                    plot::odds_ratio_bars(ui, &view.bars);
                }
                Tab::Demographics => {
                    ui.columns(2, |columns| {
                        columns[0].heading("Setting Distribution");
                        plot::setting_pie(&mut columns[0], &view.pie);
                        columns[1].heading("Sample Size vs Odds Ratio");
                        plot::sample_size_scatter(&mut columns[1], &view.scatter);
                    });
                }
                Tab::RawData => {
                    ui.heading("📋 Dataset Explorer");
                    table::raw_data_table(ui, &view.table);
                }
            }
        });
    }
}
