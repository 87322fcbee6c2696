//! Pure derivations from screen state to what the chart card displays.
//!
//! Nothing here touches egui, so labels and datasets are testable without a
//! rendering context.

use chrono::NaiveDate;

use crate::models::series::{dataset_for, SeriesDataset, StatsSummary};
use crate::models::view_mode::ViewMode;
use crate::services::navigation::TrackerState;
use crate::utils::date::week_of_month;

/// Header shown between the prev/next chevrons.
///
/// * Day: `18, Mar 2024`
/// * Week: `Week 3 of March` (seven-day blocks from the 1st, not ISO weeks)
/// * Month: `March, 2024`
pub fn render_header(mode: ViewMode, date: NaiveDate) -> String {
    match mode {
        ViewMode::Day => date.format("%d, %b %Y").to_string(),
        ViewMode::Week => format!("Week {} of {}", week_of_month(date), date.format("%B")),
        ViewMode::Month => date.format("%B, %Y").to_string(),
    }
}

/// Dataset plotted for the given mode.
pub fn render_series(mode: ViewMode) -> &'static SeriesDataset {
    dataset_for(mode)
}

/// Everything the chart card needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCardModel {
    pub header: String,
    pub series: &'static SeriesDataset,
    pub stats: StatsSummary,
}

impl ChartCardModel {
    pub fn from_state(state: &TrackerState) -> Self {
        Self {
            header: render_header(state.mode(), state.current_date()),
            series: render_series(state.mode()),
            stats: StatsSummary::placeholder(),
        }
    }
}
