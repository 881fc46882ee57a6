use std::collections::BTreeSet;
use std::fmt;

use super::model::{CategoricalColumn, Dataset, Record};

// ---------------------------------------------------------------------------
// Selection – one entry of the sidebar drop-down
// ---------------------------------------------------------------------------

/// The active filter: either the "All" sentinel or one concrete value.
///
/// The sentinel is its own variant, so a category that happens to be
/// called "All" still filters normally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Value(v) => f.write_str(v),
        }
    }
}

/// `All` followed by the sorted, distinct, non-missing values of `column`.
pub fn list_options(dataset: &Dataset, column: CategoricalColumn) -> Vec<Selection> {
    let distinct: BTreeSet<&str> = dataset
        .records()
        .iter()
        .filter_map(|r| r.category(column))
        .collect();

    std::iter::once(Selection::All)
        .chain(distinct.into_iter().map(|v| Selection::Value(v.to_string())))
        .collect()
}

// ---------------------------------------------------------------------------
// Subset – read-only projection of the dataset
// ---------------------------------------------------------------------------

/// Rows of a dataset that passed a filter, in their original order.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> Subset<'a> {
    /// Every row of the dataset.
    pub fn all(dataset: &'a Dataset) -> Self {
        Subset {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return the rows whose `column` equals the selection.
///
/// * [`Selection::All`] → every row
/// * a row with a missing value in `column` never matches a concrete value
pub fn apply<'a>(dataset: &'a Dataset, column: CategoricalColumn, selection: &Selection) -> Subset<'a> {
    let wanted = match selection {
        Selection::All => return Subset::all(dataset),
        Selection::Value(v) => v.as_str(),
    };

    let indices = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.category(column) == Some(wanted))
        .map(|(i, _)| i)
        .collect();

    Subset { dataset, indices }
}
