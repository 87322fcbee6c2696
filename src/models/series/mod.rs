// Chart series model
// Fixed example datasets for the line chart and the statistics strip

use super::view_mode::ViewMode;

/// A labelled numeric series. `labels[i]` names `values[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesDataset {
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
}

impl SeriesDataset {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pairs of (label, value)
    pub fn points(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }
}

/// Hourly samples for a single day
pub const DAY_SERIES: SeriesDataset = SeriesDataset {
    labels: &["00:00", "06:00", "12:00", "18:00", "23:00"],
    values: &[2.0, 3.0, 2.0, 2.5, 2.0],
};

/// One sample per weekday, Sunday first
pub const WEEK_SERIES: SeriesDataset = SeriesDataset {
    labels: &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    values: &[10.0, 12.0, 15.0, 11.0, 14.0, 13.0, 9.0],
};

/// Samples on selected days of the month
pub const MONTH_SERIES: SeriesDataset = SeriesDataset {
    labels: &["01", "05", "10", "15", "20", "25"],
    values: &[60.0, 50.0, 70.0, 55.0, 65.0, 58.0],
};

/// Table lookup backing the chart. Every mode has exactly one dataset.
pub fn dataset_for(mode: ViewMode) -> &'static SeriesDataset {
    match mode {
        ViewMode::Day => &DAY_SERIES,
        ViewMode::Week => &WEEK_SERIES,
        ViewMode::Month => &MONTH_SERIES,
    }
}

/// Figures shown in the statistics strip under the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl StatsSummary {
    /// Fixed figures. These are not derived from any series.
    pub const fn placeholder() -> Self {
        Self {
            average: 2.2,
            max: 4.4,
            min: 1.8,
        }
    }

    /// (label, value) pairs in display order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [("Average", self.average), ("Max", self.max), ("Min", self.min)]
    }
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self::placeholder()
    }
}
