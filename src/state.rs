use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::data::filter::Selection;
use crate::data::model::{CategoricalColumn, Dataset};
use crate::view::{render, ViewModel};

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    MainAnalysis,
    Demographics,
    RawData,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::MainAnalysis, Tab::Demographics, Tab::RawData];

    pub fn label(self) -> &'static str {
        match self {
            Tab::MainAnalysis => "📊 Main Analysis",
            Tab::Demographics => "🌍 Demographics",
            Tab::RawData => "📋 Raw Data",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The state is decided once, from the session's load outcome. There is no
/// transition out of `Error`: a missing file stays missing for the session.
#[derive(Debug)]
pub enum AppState {
    Loaded(Dashboard),
    Error { message: String },
}

impl AppState {
    pub fn from_cache(cache: &DatasetCache, column: CategoricalColumn) -> Self {
        match cache.get() {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("{} has no data rows", cache.path().display());
                }
                AppState::Loaded(Dashboard::new(dataset, column))
            }
            Err(e) => {
                // warn, not error: failures are shown in the window only
                log::warn!("Dashboard unavailable: {e}");
                AppState::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Loaded-state data: the shared table plus what is currently on screen.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    column: CategoricalColumn,
    view: ViewModel,
    pub tab: Tab,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, column: CategoricalColumn) -> Self {
        let view = render(&dataset, column, &Selection::All);
        Self {
            dataset,
            column,
            view,
            tab: Tab::default(),
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Change the filter and recompute the view. Re-selecting the current
    /// value is a no-op.
    pub fn select(&mut self, selection: Selection) {
        if selection == self.view.selection {
            return;
        }
        log::debug!("{} = {selection}", self.column);
        self.view = render(&self.dataset, self.column, &selection);
    }
}
