use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::color::ColorMap;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{apply, FilterSelection};
use crate::data::loader::{load_file, DateOrder};
use crate::data::model::Dataset;

/// A multi-select filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Region,
    Category,
}

impl Dimension {
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Region => "Region",
            Dimension::Category => "Category",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: Dataset,

    /// Current filter choice.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters.
    pub visible_indices: Vec<usize>,

    /// Aggregates of the visible records; `None` when nothing is visible.
    pub summary: Option<Summary>,

    /// Colour per category for the scatter chart.
    pub category_colors: ColorMap,

    /// Date convention used for files opened from the menu.
    pub date_order: DateOrder,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, date_order: DateOrder) -> Self {
        let mut state = Self {
            selection: FilterSelection::all(&dataset),
            visible_indices: Vec::new(),
            summary: None,
            category_colors: ColorMap::new(&dataset.categories),
            dataset,
            date_order,
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Swap in a newly loaded dataset and reset filters to it.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = FilterSelection::all(&dataset);
        self.category_colors = ColorMap::new(&dataset.categories);
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// Load a file; on failure keep the current dataset and report the error.
    pub fn open_file(&mut self, path: &Path) {
        match load_file(path, self.date_order) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute the filtered view and its summary from scratch.
    pub fn refilter(&mut self) {
        let view = apply(&self.dataset, &self.selection);
        self.summary = summarize(&view);
        self.visible_indices = view.into_indices();
        log::debug!(
            "{} of {} records visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    /// All values of a dimension present in the dataset.
    pub fn options(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Region => &self.dataset.regions,
            Dimension::Category => &self.dataset.categories,
        }
    }

    /// Currently selected values of a dimension.
    pub fn selected(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Region => &self.selection.regions,
            Dimension::Category => &self.selection.categories,
        }
    }

    fn selected_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::Region => &mut self.selection.regions,
            Dimension::Category => &mut self.selection.categories,
        }
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle(&mut self, dim: Dimension, value: &str) {
        let selected = self.selected_mut(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every value of a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        let all = self.options(dim).clone();
        *self.selected_mut(dim) = all;
        self.refilter();
    }

    /// Deselect every value of a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selected_mut(dim).clear();
        self.refilter();
    }

    /// Set the date interval, clamped into the dataset's span.
    ///
    /// `start > end` is kept as given and filters to nothing.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let (min, max) = self.dataset.date_span;
        self.selection.start = start.clamp(min, max);
        self.selection.end = end.clamp(min, max);
        self.refilter();
    }

    /// Back to all regions, all categories, full span.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::all(&self.dataset);
        self.refilter();
    }
}
