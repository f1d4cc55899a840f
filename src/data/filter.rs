use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::{Dataset, SalesRecord};

// ---------------------------------------------------------------------------
// Filter selection: which regions, categories and dates are in view
// ---------------------------------------------------------------------------

/// The user's current filter choice.
///
/// An empty region or category set selects nothing; there is no implicit
/// "select all". An inverted interval (`start > end`) also selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    /// Inclusive lower bound on order date.
    pub start: NaiveDate,
    /// Inclusive upper bound on order date.
    pub end: NaiveDate,
}

impl FilterSelection {
    /// Everything selected: all regions, all categories, full date span.
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection {
            regions: dataset.regions.clone(),
            categories: dataset.categories.clone(),
            start: dataset.date_span.0,
            end: dataset.date_span.1,
        }
    }

    /// Whether a single record passes all three predicates.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.regions.contains(&record.region)
            && self.categories.contains(&record.category)
            && self.start <= record.order_date
            && record.order_date <= self.end
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Read-only subset of a [`Dataset`], as ascending row indices.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Row indices into the dataset's records, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        let records = &self.dataset.records;
        self.indices.iter().map(move |&i| &records[i])
    }

    /// Drop the borrow and keep only the indices, for caching in UI state.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

/// Return the records of `dataset` that pass every predicate of `selection`.
pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    if selection.regions.is_empty()
        || selection.categories.is_empty()
        || selection.start > selection.end
    {
        return FilteredView {
            dataset,
            indices: Vec::new(),
        };
    }

    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect();

    FilteredView { dataset, indices }
}
