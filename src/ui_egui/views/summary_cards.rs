use egui::{Margin, RichText, Rounding, Stroke};

use crate::models::progress::StepProgress;
use crate::ui_egui::theme::TrackerTheme;

const CARD_WIDTH: f32 = 120.0;
const CARD_HEIGHT: f32 = 60.0;

/// Goal and achievement cards stacked beside the progress ring.
pub struct SummaryCards;

impl SummaryCards {
    pub fn show(ui: &mut egui::Ui, progress: &StepProgress, theme: &TrackerTheme) {
        ui.vertical(|ui| {
            ui.add_space(10.0);
            Self::card(ui, theme, "Goal", "🎯", progress.goal, "steps");
            ui.add_space(20.0);
            Self::card(ui, theme, "Achievement", "⭐", progress.streak_days, "days");
        });
    }

    fn card(
        ui: &mut egui::Ui,
        theme: &TrackerTheme,
        title: &str,
        icon: &str,
        value: u32,
        unit: &str,
    ) {
        egui::Frame::none()
            .fill(theme.card_background)
            .rounding(Rounding::same(4.0))
            .stroke(Stroke::new(1.0, theme.card_border))
            .inner_margin(Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT) - egui::vec2(20.0, 16.0));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(title).size(12.0).color(theme.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(icon).size(12.0));
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(value.to_string())
                            .size(16.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(unit).size(12.0).color(theme.text_primary));
                });
            });
    }
}
