use egui::{Align2, FontId, Rounding, Sense, Vec2};

use crate::models::series::StatsSummary;
use crate::ui_egui::theme::TrackerTheme;

const STRIP_HEIGHT: f32 = 60.0;

/// Average / Max / Min strip below the chart card.
pub struct StatsStrip;

impl StatsStrip {
    pub fn show(ui: &mut egui::Ui, stats: &StatsSummary, theme: &TrackerTheme) {
        let size = Vec2::new(ui.available_width(), STRIP_HEIGHT);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(6.0), theme.stats_background);

        let entries = stats.entries();
        let column_width = rect.width() / entries.len() as f32;
        for (i, (label, value)) in entries.iter().enumerate() {
            let x = rect.left() + column_width * (i as f32 + 0.5);
            painter.text(
                egui::pos2(x, rect.center().y - 8.0),
                Align2::CENTER_CENTER,
                format!("{value:.1}"),
                FontId::proportional(20.0),
                theme.text_primary,
            );
            painter.text(
                egui::pos2(x, rect.center().y + 14.0),
                Align2::CENTER_CENTER,
                *label,
                FontId::proportional(12.0),
                theme.text_primary,
            );
        }
    }
}
