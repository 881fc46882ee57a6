use crate::data::filter::Subset;
use crate::data::model::CategoricalColumn;

/// Label used for rows whose author cell is empty.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

// ---------------------------------------------------------------------------
// Bar view
// ---------------------------------------------------------------------------

/// One bar of the odds-ratio chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub author: String,
    /// `None` keeps the slot but draws no bar.
    pub odds_ratio: Option<f64>,
}

/// One bar per row, in subset order.
///
/// Authors with several rows get several bars; nothing is summed or
/// deduplicated, so the bar count always equals the row count.
pub fn bar_series(subset: &Subset<'_>) -> Vec<BarDatum> {
    subset
        .iter()
        .map(|r| BarDatum {
            author: r
                .category(CategoricalColumn::Author)
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
            odds_ratio: r.odds_ratio,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pie view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub setting: String,
    pub count: usize,
    /// Share of the counted rows, in `(0, 1]`.
    pub fraction: f64,
}

impl PieSlice {
    /// Percentage label with one decimal, e.g. `"42.9%"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

/// Row count per setting, largest first; ties keep first-appearance order.
/// Rows without a setting are left out of both the slices and the total.
pub fn pie_slices(subset: &Subset<'_>) -> Vec<PieSlice> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for setting in subset
        .iter()
        .filter_map(|r| r.category(CategoricalColumn::Setting))
    {
        match counts.iter_mut().find(|(s, _)| s == setting) {
            Some((_, n)) => *n += 1,
            None => counts.push((setting.to_string(), 1)),
        }
    }
    // stable sort keeps first appearance among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .map(|(setting, count)| PieSlice {
            setting,
            count,
            fraction: count as f64 / total as f64,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter view
// ---------------------------------------------------------------------------

/// Points of one setting: `[sample size, odds ratio]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub setting: String,
    pub points: Vec<[f64; 2]>,
}

/// Sample size against odds ratio, one series per setting in order of
/// first appearance. Rows missing any of the three values are not plotted.
pub fn scatter_series(subset: &Subset<'_>) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in subset.iter() {
        let (Some(setting), Some(x), Some(y)) =
            (record.category(CategoricalColumn::Setting), record.sample_size, record.odds_ratio)
        else {
            continue;
        };
        match series.iter_mut().find(|s| s.setting == setting) {
            Some(s) => s.points.push([x, y]),
            None => series.push(ScatterSeries {
                setting: setting.to_string(),
                points: vec![[x, y]],
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, Selection};
    use crate::data::fixtures::{meta_table, record};
    use crate::data::model::Dataset;

    #[test]
    fn one_bar_per_row_including_duplicate_authors() {
        let dataset = meta_table();
        let subset = apply(
            &dataset,
            CategoricalColumn::RiskFactor,
            &Selection::Value("Smoking".into()),
        );
        let bars = bar_series(&subset);

        assert_eq!(bars.len(), subset.len());
        let authors: Vec<&str> = bars.iter().map(|b| b.author.as_str()).collect();
        assert_eq!(authors, ["Khan", "Rahman", "Khan"]);
        assert_eq!(bars[1].odds_ratio, Some(3.10));
    }

    #[test]
    fn missing_author_and_or_keep_their_slot() {
        let mut row = record("S1", "x", Some("Smoking"), "Urban", 10.0, 1.0);
        row.author = None;
        row.odds_ratio = None;
        let dataset = Dataset::from_records(vec![row]);

        let bars = bar_series(&Subset::all(&dataset));
        assert_eq!(
            bars,
            vec![BarDatum {
                author: UNKNOWN_AUTHOR.to_string(),
                odds_ratio: None
            }]
        );
    }

    #[test]
    fn pie_orders_by_count_then_first_appearance() {
        let dataset = meta_table();
        let slices = pie_slices(&Subset::all(&dataset));

        let order: Vec<(&str, usize)> = slices.iter().map(|s| (s.setting.as_str(), s.count)).collect();
        assert_eq!(
            order,
            [("Urban", 2), ("Rural", 2), ("Clinical", 2), ("Community", 1)]
        );
        assert_eq!(slices[3].percent_label(), "14.3%");

        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pie_of_empty_subset_is_empty() {
        let dataset = Dataset::default();
        assert!(pie_slices(&Subset::all(&dataset)).is_empty());
    }

    #[test]
    fn scatter_groups_by_setting_and_skips_incomplete_rows() {
        let dataset = meta_table();
        let series = scatter_series(&Subset::all(&dataset));

        let settings: Vec<&str> = series.iter().map(|s| s.setting.as_str()).collect();
        // the Community row has no OR, so it never opens a series
        assert_eq!(settings, ["Urban", "Rural", "Clinical"]);
        assert_eq!(series[0].points, vec![[1200.0, 1.85], [1200.0, 2.40]]);
        assert_eq!(series[1].points, vec![[350.0, 3.10], [500.0, 1.60]]);

        let plotted: usize = series.iter().map(|s| s.points.len()).sum();
        assert_eq!(plotted, 6);
    }

    /// Two complete rows, one without a setting, one without a sample size.
    fn gappy_table() -> Dataset {
        let mut no_setting = record("S3", "Ahmed", Some("Smoking"), "x", 800.0, 1.20);
        no_setting.setting = None;
        let mut no_size = record("S4", "Begum", Some("Smoking"), "Rural", 0.0, 1.60);
        no_size.sample_size = None;

        Dataset::from_records(vec![
            record("S1", "Khan", Some("Smoking"), "Urban", 1200.0, 1.85),
            record("S2", "Rahman", Some("Smoking"), "Urban", 350.0, 3.10),
            no_setting,
            no_size,
        ])
    }

    #[test]
    fn pie_leaves_out_rows_without_setting() {
        let dataset = gappy_table();
        let slices = pie_slices(&Subset::all(&dataset));

        let counted: usize = slices.iter().map(|s| s.count).sum();
        assert_eq!(counted, 3);
        let labels: Vec<(&str, String)> = slices
            .iter()
            .map(|s| (s.setting.as_str(), s.percent_label()))
            .collect();
        assert_eq!(
            labels,
            [("Urban", "66.7%".to_string()), ("Rural", "33.3%".to_string())]
        );
    }

    #[test]
    fn scatter_drops_rows_without_setting_or_sample_size() {
        let dataset = gappy_table();
        let series = scatter_series(&Subset::all(&dataset));

        assert_eq!(
            series,
            vec![ScatterSeries {
                setting: "Urban".to_string(),
                points: vec![[1200.0, 1.85], [350.0, 3.10]],
            }]
        );
    }
}
