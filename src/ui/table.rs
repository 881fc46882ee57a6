use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{text_color_on, REDS};
use crate::view::table::{format_cell, TableView, TABLE_HEADERS};

use super::plot::no_data;

/// Raw-data table with the OR column shaded on the subset's own scale.
pub fn raw_data_table(ui: &mut Ui, table: &TableView) {
    if table.rows.is_empty() {
        no_data(ui);
        return;
    }

    if let Some(scale) = table.scale {
        ui.label(
            RichText::new(format!("OR shading: {} → {}", scale.min, scale.max))
                .small()
                .weak(),
        );
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(80.0), TABLE_HEADERS.len() - 2)
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .header(22.0, |mut header| {
            for title in TABLE_HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(22.0, table.rows.len(), |mut row| {
                let r = &table.rows[row.index()];
                row.col(|ui| {
                    ui.label(r.author.as_deref().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(r.year.map(|y| y.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(r.setting.as_deref().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(format_cell(r.sample_size));
                });
                row.col(|ui| {
                    let text = format_cell(r.odds_ratio);
                    match r.shade {
                        Some(shade) => {
                            let background = REDS.sample(shade);
                            ui.painter().rect_filled(ui.max_rect(), 0.0, background);
                            ui.label(RichText::new(text).color(text_color_on(background)));
                        }
                        None => {
                            ui.label(text);
                        }
                    }
                });
                row.col(|ui| {
                    ui.label(format_cell(r.p_value));
                });
            });
        });
}
