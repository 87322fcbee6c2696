mod lifecycle;
mod shortcuts;

use crate::models::progress::{RingGeometry, StepProgress};
use crate::services::navigation::TrackerState;
use crate::ui_egui::theme::TrackerTheme;
use crate::ui_egui::views::{ChartOptions, HeaderBar};

const SCREEN_TITLE: &str = "Steps tracking";

pub struct StepTrackerApp {
    /// Active granularity and displayed date
    state: TrackerState,
    /// Snapshot shown by the ring and the summary cards
    progress: StepProgress,
    ring: RingGeometry,
    header: HeaderBar,
    chart_options: ChartOptions,
    /// Currently applied theme colors
    active_theme: TrackerTheme,
}

impl eframe::App for StepTrackerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
