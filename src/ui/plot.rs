use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, pos2, Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::{set2, ColorMap, BAR_COLOR, VIRIDIS};
use crate::view::charts::{BarDatum, PieSlice, ScatterSeries};

const CHART_HEIGHT: f32 = 340.0;

/// Placeholder for a chart whose subset has nothing to draw.
pub fn no_data(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new("No data for this selection.").italics().weak());
}

// ---------------------------------------------------------------------------
// Odds ratio per author (Main Analysis)
// ---------------------------------------------------------------------------

pub fn odds_ratio_bars(ui: &mut Ui, bars: &[BarDatum]) {
    if bars.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = bars.iter().map(|b| b.author.clone()).collect();
    let chart = BarChart::new(
        bars.iter()
            .enumerate()
            .map(|(i, b)| {
                Bar::new(i as f64, b.odds_ratio.unwrap_or(0.0))
                    .name(&b.author)
                    .width(0.7)
            })
            .collect(),
    )
    .color(BAR_COLOR)
    .name("OR");

    Plot::new("odds_ratio_bars")
        .height(CHART_HEIGHT)
        .x_axis_label("Author")
        .y_axis_label("OR")
        .x_axis_formatter(move |mark, _range| {
            // only whole positions carry a bar
            let x = mark.value;
            if x < 0.0 || (x - x.round()).abs() > 1e-6 {
                return String::new();
            }
            labels.get(x.round() as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Setting distribution (Demographics, left)
// ---------------------------------------------------------------------------

/// Pie of row counts per setting, starting at 12 o'clock and running
/// counter-clockwise, each slice labelled with its percentage.
pub fn setting_pie(ui: &mut Ui, slices: &[PieSlice]) {
    if slices.is_empty() {
        no_data(ui);
        return;
    }

    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    // leave room around the disc for the category labels
    let radius = rect.width().min(rect.height()) * 0.35;
    let label_color = ui.visuals().text_color();
    let font = FontId::proportional(13.0);

    let mut start = FRAC_PI_2;
    let mut edges = Vec::with_capacity(slices.len());
    for (i, slice) in slices.iter().enumerate() {
        let sweep = slice.fraction as f32 * TAU;
        painter.add(Shape::mesh(wedge(center, radius, start, sweep, set2(i))));
        edges.push(start);

        let mid = start + sweep / 2.0;
        painter.text(
            polar(center, radius * 0.6, mid),
            Align2::CENTER_CENTER,
            slice.percent_label(),
            font.clone(),
            Color32::BLACK,
        );
        let label_pos = polar(center, radius * 1.1, mid);
        let align = if label_pos.x >= center.x {
            Align2::LEFT_CENTER
        } else {
            Align2::RIGHT_CENTER
        };
        painter.text(label_pos, align, &slice.setting, font.clone(), label_color);

        start += sweep;
    }

    let counts: Vec<String> = slices
        .iter()
        .map(|s| format!("{}: {} rows", s.setting, s.count))
        .collect();
    response.on_hover_text(counts.join("\n"));

    if slices.len() > 1 {
        let stroke = Stroke::new(1.5, Color32::WHITE);
        for angle in edges {
            painter.line_segment([center, polar(center, radius, angle)], stroke);
        }
    }
}

/// Screen position at `angle` (radians, counter-clockwise from 3 o'clock).
fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    pos2(
        center.x + radius * angle.cos(),
        center.y - radius * angle.sin(),
    )
}

/// Triangle fan from the centre; arcs wider than a half turn are not
/// convex, so a mesh is used instead of a polygon.
fn wedge(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> Mesh {
    let steps = ((sweep / TAU) * 128.0).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for k in 0..=steps {
        let angle = start + sweep * k as f32 / steps as f32;
        mesh.colored_vertex(polar(center, radius, angle), color);
    }
    for k in 1..=steps {
        mesh.add_triangle(0, k, k + 1);
    }
    mesh
}

// ---------------------------------------------------------------------------
// Sample size vs odds ratio (Demographics, right)
// ---------------------------------------------------------------------------

pub fn sample_size_scatter(ui: &mut Ui, series: &[ScatterSeries]) {
    if series.is_empty() {
        no_data(ui);
        return;
    }

    let colors = ColorMap::new(series.iter().map(|s| s.setting.as_str()), VIRIDIS);

    Plot::new("sample_size_vs_or")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Sample Size")
        .y_axis_label("Odds Ratio (OR)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let points: PlotPoints = s.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&s.setting)
                        .color(colors.color_for(&s.setting))
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}
