use std::collections::HashSet;

use crate::data::filter::Subset;
use crate::data::model::CategoricalColumn;

/// Placeholder shown for a statistic that has no defined value.
pub const NOT_AVAILABLE: &str = "n/a";

/// The four headline numbers above the tabs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// Distinct non-missing study identifiers.
    pub studies: usize,
    /// Rows in the subset.
    pub rows: usize,
    /// Mean odds ratio, rounded to 2 decimals. `None` when no row has one.
    pub mean_or: Option<f64>,
    /// Max odds ratio, rounded to 2 decimals. `None` when no row has one.
    pub max_or: Option<f64>,
}

/// Missing odds ratios are skipped, so an empty subset (or one where every
/// OR is missing) leaves mean and max undefined rather than failing.
pub fn summarize(subset: &Subset<'_>) -> Summary {
    let mut studies = HashSet::new();
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut max: Option<f64> = None;

    for record in subset.iter() {
        if let Some(id) = record.category(CategoricalColumn::StudyId) {
            studies.insert(id);
        }
        if let Some(or) = record.odds_ratio {
            sum += or;
            count += 1;
            max = Some(max.map_or(or, |m: f64| m.max(or)));
        }
    }

    let mean = (count > 0).then(|| sum / count as f64);

    Summary {
        studies: studies.len(),
        rows: subset.len(),
        mean_or: mean.map(round2),
        max_or: max.map(round2),
    }
}

/// Round half away from zero to 2 decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Metric tile text for an optional statistic.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, Selection};
    use crate::data::fixtures::{meta_table, record};
    use crate::data::model::Dataset;

    #[test]
    fn summarizes_whole_table() {
        let dataset = meta_table();
        let summary = summarize(&Subset::all(&dataset));

        assert_eq!(summary.studies, 6);
        assert_eq!(summary.rows, 7);
        // (1.85 + 2.40 + 3.10 + 1.20 + 1.60 + 2.75) / 6 = 2.15
        assert_eq!(summary.mean_or, Some(2.15));
        assert_eq!(summary.max_or, Some(3.1));
    }

    #[test]
    fn smoking_selection_counts_only_smoking_rows() {
        let dataset = meta_table();
        let subset = apply(
            &dataset,
            CategoricalColumn::RiskFactor,
            &Selection::Value("Smoking".into()),
        );
        let summary = summarize(&subset);

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.studies, 3);
        assert_eq!(summary.mean_or, Some(2.57));
        assert_eq!(summary.max_or, Some(3.1));
    }

    #[test]
    fn empty_subset_has_placeholders() {
        let dataset = Dataset::default();
        let summary = summarize(&Subset::all(&dataset));

        assert_eq!(summary, Summary::default());
        assert_eq!(format_stat(summary.mean_or), "n/a");
        assert_eq!(format_stat(summary.max_or), "n/a");
    }

    #[test]
    fn single_row_mean_equals_max() {
        let dataset = Dataset::from_records(vec![record(
            "S1",
            "Khan",
            Some("Smoking"),
            "Urban",
            100.0,
            1.874,
        )]);
        let summary = summarize(&Subset::all(&dataset));

        assert_eq!(summary.mean_or, summary.max_or);
        assert_eq!(summary.mean_or, Some(1.87));
    }

    #[test]
    fn rows_without_or_still_count() {
        let dataset = meta_table();
        let subset = apply(
            &dataset,
            CategoricalColumn::RiskFactor,
            &Selection::Value("Obesity".into()),
        );
        let summary = summarize(&subset);

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.mean_or, Some(2.4));
    }
}
