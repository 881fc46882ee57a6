use std::path::PathBuf;

use crate::data::model::CategoricalColumn;

/// Data file read from the working directory at startup.
pub const DATA_FILE: &str = "Final_Remastered_Meta_Data.csv";

/// Fixed settings for one dashboard session. There is no file or
/// environment override; `Default` is the configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Column behind the sidebar drop-down.
    pub filter_column: CategoricalColumn,
    pub window_title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            filter_column: CategoricalColumn::RiskFactor,
            window_title: "Hypertension Dashboard",
            inner_size: [1280.0, 860.0],
            min_inner_size: [720.0, 480.0],
        }
    }
}
