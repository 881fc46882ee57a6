//! Everything the window shows for one selection, computed without egui.
//!
//! [`render`] is the whole load-independent pipeline: filter, summarise,
//! and build the data behind every chart. The UI calls it again whenever
//! the selection changes and only draws what it returns.

pub mod charts;
pub mod table;

use crate::data::filter::{apply, list_options, Selection};
use crate::data::model::{CategoricalColumn, Dataset};
use crate::stats::{summarize, Summary};

use charts::{bar_series, pie_slices, scatter_series, BarDatum, PieSlice, ScatterSeries};
use table::{table_view, TableView};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub selection: Selection,
    /// Drop-down entries, `All` first.
    pub options: Vec<Selection>,
    /// Rows in the whole table, for the status line.
    pub total_rows: usize,
    pub summary: Summary,
    pub bars: Vec<BarDatum>,
    pub pie: Vec<PieSlice>,
    pub scatter: Vec<ScatterSeries>,
    pub table: TableView,
}

pub fn render(dataset: &Dataset, column: CategoricalColumn, selection: &Selection) -> ViewModel {
    let subset = apply(dataset, column, selection);

    ViewModel {
        selection: selection.clone(),
        options: list_options(dataset, column),
        total_rows: dataset.len(),
        summary: summarize(&subset),
        bars: bar_series(&subset),
        pie: pie_slices(&subset),
        scatter: scatter_series(&subset),
        table: table_view(&subset),
    }
}
