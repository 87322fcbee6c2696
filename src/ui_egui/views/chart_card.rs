use egui::{Margin, RichText, Rounding, Sense, Stroke};

use super::line_chart::{ChartOptions, LineChart};
use crate::services::presentation::ChartCardModel;
use crate::ui_egui::commands::ScreenCommand;
use crate::ui_egui::theme::TrackerTheme;

const HEADER_LABEL_WIDTH: f32 = 200.0;

/// Card holding the prev/next date header and the line chart.
pub struct ChartCard;

impl ChartCard {
    pub fn show(
        ui: &mut egui::Ui,
        model: &ChartCardModel,
        options: &ChartOptions,
        theme: &TrackerTheme,
    ) -> Option<ScreenCommand> {
        let mut command = None;

        egui::Frame::none()
            .fill(theme.card_background)
            .rounding(Rounding::same(10.0))
            .stroke(Stroke::new(1.0, theme.card_border))
            .inner_margin(Margin::same(15.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let side = ((ui.available_width() - HEADER_LABEL_WIDTH) / 2.0 - 16.0).max(0.0);
                    ui.add_space(side);

                    if Self::chevron(ui, "⏴", "Previous (←)", theme).clicked() {
                        command = Some(ScreenCommand::Previous);
                    }

                    ui.allocate_ui_with_layout(
                        egui::vec2(HEADER_LABEL_WIDTH, 24.0),
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(
                                RichText::new(&model.header)
                                    .size(16.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                        },
                    );

                    if Self::chevron(ui, "⏵", "Next (→)", theme).clicked() {
                        command = Some(ScreenCommand::Next);
                    }
                });

                ui.add_space(10.0);
                LineChart::show(ui, model.series, options);
            });

        command
    }

    fn chevron(ui: &mut egui::Ui, glyph: &str, hint: &str, theme: &TrackerTheme) -> egui::Response {
        let response = ui
            .add(
                egui::Label::new(RichText::new(glyph).size(16.0).color(theme.text_primary))
                    .sense(Sense::click()),
            )
            .on_hover_text(hint);
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response
    }
}
