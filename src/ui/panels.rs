use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{Dashboard, Tab};
use crate::stats::{format_stat, Summary};

// ---------------------------------------------------------------------------
// Left side panel – logo and risk-factor filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, dashboard: &mut Dashboard, source: &str) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.svg");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(100.0)
                .max_height(100.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("🔍 Filter Options");
    ui.separator();

    ui.label("Select a Risk Factor:");
    let view = dashboard.view();
    let mut chosen = None;
    egui::ComboBox::from_id_salt("risk_factor")
        .selected_text(view.selection.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &view.options {
                if ui
                    .selectable_label(*option == view.selection, option.to_string())
                    .clicked()
                {
                    chosen = Some(option.clone());
                }
            }
        });
    let status = format!(
        "{} records loaded, {} visible",
        view.total_rows, view.summary.rows
    );

    if let Some(selection) = chosen {
        dashboard.select(selection);
    }

    ui.separator();
    ui.label(RichText::new(status).weak());
    ui.label(RichText::new(format!("Source: {source}")).small().weak());
}

// ---------------------------------------------------------------------------
// Page header and metric tiles
// ---------------------------------------------------------------------------

pub fn page_title(ui: &mut Ui) {
    ui.heading(RichText::new("❤ Interactive Hypertension Meta-Analysis").size(26.0).strong());
}

pub fn page_intro(ui: &mut Ui) {
    ui.label(
        "Welcome to the advanced dashboard! Filter the data from the sidebar \
         and explore the interactive tabs below.",
    );
    ui.add_space(8.0);
}

/// Four metric tiles side by side.
pub fn summary_tiles(ui: &mut Ui, summary: &Summary) {
    ui.heading("💡 Quick Summary");
    let tiles = [
        ("Total Studies/Papers", summary.studies.to_string()),
        ("Total Data Points", summary.rows.to_string()),
        ("Average OR", format_stat(summary.mean_or)),
        ("Max OR", format_stat(summary.max_or)),
    ];
    ui.columns(tiles.len(), |columns: &mut [Ui]| {
        for (ui, (label, value)) in columns.iter_mut().zip(tiles) {
            metric(ui, label, &value);
        }
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(28.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

pub fn tab_bar(ui: &mut Ui, current: &mut Tab) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(*current == tab, RichText::new(tab.label()).size(15.0))
                .clicked()
            {
                *current = tab;
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Error surface
// ---------------------------------------------------------------------------

/// The single message shown when the dashboard could not load.
pub fn error_message(ui: &mut Ui, message: &str) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(0x3d, 0x0b, 0x0b))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(format!("⚠ {message}")).color(Color32::from_rgb(0xff, 0x8a, 0x8a)));
        });
}
