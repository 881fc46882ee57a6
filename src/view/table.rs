use crate::data::filter::Subset;

/// Bounds of the OR colour gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientScale {
    pub min: f64,
    pub max: f64,
}

impl GradientScale {
    /// Position of `value` on the scale, clamped to `[0, 1]`.
    /// A degenerate scale (min == max) puts everything at 0.
    pub fn position(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            0.0
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        }
    }
}

/// Min and max of the finite values, or `None` if there are none.
pub fn compute_gradient_scale(values: impl IntoIterator<Item = f64>) -> Option<GradientScale> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some(GradientScale { min: v, max: v }),
            Some(s) => Some(GradientScale {
                min: s.min.min(v),
                max: s.max.max(v),
            }),
        })
}

/// One line of the raw-data table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub author: Option<String>,
    pub year: Option<i32>,
    pub setting: Option<String>,
    pub sample_size: Option<f64>,
    pub odds_ratio: Option<f64>,
    pub p_value: Option<f64>,
    /// Where the OR sits on the subset's gradient; `None` without an OR.
    pub shade: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub scale: Option<GradientScale>,
}

pub const TABLE_HEADERS: [&str; 6] = ["Author", "Year", "Setting", "Sample Size", "OR", "P-Value"];

/// The six displayed columns, with the OR gradient scaled to this subset
/// only, not the whole table.
pub fn table_view(subset: &Subset<'_>) -> TableView {
    let scale = compute_gradient_scale(subset.iter().filter_map(|r| r.odds_ratio));

    let rows = subset
        .iter()
        .map(|r| TableRow {
            author: r.author.clone(),
            year: r.year,
            setting: r.setting.clone(),
            sample_size: r.sample_size,
            odds_ratio: r.odds_ratio,
            p_value: r.p_value,
            shade: r.odds_ratio.zip(scale).map(|(or, s)| s.position(or)),
        })
        .collect();

    TableView { rows, scale }
}

/// Cell text: whole numbers without decimals, missing cells blank.
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, Selection};
    use crate::data::fixtures::{meta_table, record};
    use crate::data::model::{CategoricalColumn, Dataset};

    #[test]
    fn scale_endpoints_are_subset_min_and_max() {
        let scale = compute_gradient_scale([1.2, 3.4, 5.6]).unwrap();
        assert_eq!(scale, GradientScale { min: 1.2, max: 5.6 });
        assert_eq!(scale.position(1.2), 0.0);
        assert_eq!(scale.position(5.6), 1.0);
    }

    #[test]
    fn scale_ignores_non_finite_and_handles_empty() {
        assert_eq!(compute_gradient_scale(Vec::<f64>::new()), None);
        assert_eq!(
            compute_gradient_scale([f64::NAN, 2.0]),
            Some(GradientScale { min: 2.0, max: 2.0 })
        );
    }

    #[test]
    fn degenerate_scale_maps_to_zero() {
        let scale = GradientScale { min: 2.0, max: 2.0 };
        assert_eq!(scale.position(2.0), 0.0);
    }

    #[test]
    fn table_gradient_follows_the_filter() {
        let dataset = Dataset::from_records(vec![
            record("S1", "Khan", Some("Smoking"), "Urban", 100.0, 1.2),
            record("S2", "Rahman", Some("Smoking"), "Rural", 200.0, 3.4),
            record("S3", "Ahmed", Some("Smoking"), "Urban", 300.0, 5.6),
            record("S4", "Begum", Some("Obesity"), "Urban", 400.0, 9.9),
        ]);

        let whole = table_view(&Subset::all(&dataset));
        assert_eq!(whole.scale, Some(GradientScale { min: 1.2, max: 9.9 }));

        let smoking = table_view(&apply(
            &dataset,
            CategoricalColumn::RiskFactor,
            &Selection::Value("Smoking".into()),
        ));
        assert_eq!(smoking.scale, Some(GradientScale { min: 1.2, max: 5.6 }));
        let shades: Vec<Option<f64>> = smoking.rows.iter().map(|r| r.shade).collect();
        assert_eq!(shades[0], Some(0.0));
        assert_eq!(shades[2], Some(1.0));
    }

    #[test]
    fn row_without_or_has_no_shade() {
        let dataset = meta_table();
        let view = table_view(&Subset::all(&dataset));
        assert_eq!(view.rows.len(), 7);
        assert_eq!(view.rows[6].odds_ratio, None);
        assert_eq!(view.rows[6].shade, None);
    }

    #[test]
    fn cells_format_whole_numbers_plainly() {
        assert_eq!(format_cell(Some(1200.0)), "1200");
        assert_eq!(format_cell(Some(0.003)), "0.003");
        assert_eq!(format_cell(None), "");
    }
}
