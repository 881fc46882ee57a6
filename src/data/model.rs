use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// CategoricalColumn – text columns that can drive a filter or grouping
// ---------------------------------------------------------------------------

/// The text columns of the dataset, named by their CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalColumn {
    StudyId,
    Author,
    RiskFactor,
    Setting,
}

impl CategoricalColumn {
    /// Header name in the source file.
    pub fn header(self) -> &'static str {
        match self {
            CategoricalColumn::StudyId => "Study_ID",
            CategoricalColumn::Author => "Author",
            CategoricalColumn::RiskFactor => "Standard_Risk_Factor",
            CategoricalColumn::Setting => "Standard_Setting",
        }
    }
}

impl fmt::Display for CategoricalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Every header the dashboard reads. Anything else in the file is ignored.
pub const REQUIRED_HEADERS: [&str; 8] = [
    "Study_ID",
    "Author",
    "Year",
    "Standard_Risk_Factor",
    "Standard_Setting",
    "Clean_Sample_Size",
    "OR",
    "P_Value",
];

// ---------------------------------------------------------------------------
// Record – one row of the meta-analysis table
// ---------------------------------------------------------------------------

/// One (study, risk factor) observation. Any cell may be missing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Record {
    #[serde(rename = "Study_ID", default)]
    pub study_id: Option<String>,
    #[serde(rename = "Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(rename = "Standard_Risk_Factor", default)]
    pub risk_factor: Option<String>,
    #[serde(rename = "Standard_Setting", default)]
    pub setting: Option<String>,
    #[serde(rename = "Clean_Sample_Size", default, deserialize_with = "lenient_number")]
    pub sample_size: Option<f64>,
    #[serde(rename = "OR", default, deserialize_with = "lenient_number")]
    pub odds_ratio: Option<f64>,
    #[serde(rename = "P_Value", default, deserialize_with = "lenient_number")]
    pub p_value: Option<f64>,
}

impl Record {
    /// Value of a categorical column for this row.
    pub fn category(&self, column: CategoricalColumn) -> Option<&str> {
        let value = match column {
            CategoricalColumn::StudyId => &self.study_id,
            CategoricalColumn::Author => &self.author,
            CategoricalColumn::RiskFactor => &self.risk_factor,
            CategoricalColumn::Setting => &self.setting,
        };
        value.as_deref()
    }
}

/// Unparseable or non-finite numbers load as missing.
fn lenient_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = csv::invalid_option(de)?;
    Ok(value.filter(|v| v.is_finite()))
}

/// Accepts `2019` as well as `2019.0`, which is what a float-typed year
/// column looks like once it has been written back out.
fn lenient_year<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.as_deref().and_then(parse_year))
}

fn parse_year(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64)
        .map(|v| v as i32)
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full table, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    /// Rows the loader could not decode at all.
    pub skipped_rows: usize,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset {
            records,
            skipped_rows: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_accepts_float_notation() {
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year("2019.0"), Some(2019));
        assert_eq!(parse_year("2019.5"), None);
        assert_eq!(parse_year("unknown"), None);
    }

    #[test]
    fn category_reads_the_matching_field() {
        let record = Record {
            study_id: Some("S1".into()),
            author: Some("Khan".into()),
            risk_factor: Some("Smoking".into()),
            ..Record::default()
        };
        assert_eq!(record.category(CategoricalColumn::StudyId), Some("S1"));
        assert_eq!(record.category(CategoricalColumn::Author), Some("Khan"));
        assert_eq!(record.category(CategoricalColumn::RiskFactor), Some("Smoking"));
        assert_eq!(record.category(CategoricalColumn::Setting), None);
    }
}
