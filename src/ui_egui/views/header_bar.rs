use egui::{RichText, Sense, Stroke};

use crate::ui_egui::theme::TrackerTheme;

/// Result of interacting with the title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Back,
}

/// Title bar with an optional back affordance on the left.
#[derive(Debug, Clone)]
pub struct HeaderBar {
    pub title: String,
    pub show_back: bool,
}

impl HeaderBar {
    pub fn new(title: impl Into<String>, show_back: bool) -> Self {
        Self {
            title: title.into(),
            show_back,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: &TrackerTheme) -> HeaderAction {
        let mut action = HeaderAction::None;

        ui.horizontal(|ui| {
            ui.set_min_height(44.0);
            if self.show_back {
                let back = ui
                    .add(
                        egui::Label::new(
                            RichText::new("⏴").size(20.0).color(theme.text_primary),
                        )
                        .sense(Sense::click()),
                    )
                    .on_hover_text("Back (Esc)");
                if back.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if back.clicked() {
                    action = HeaderAction::Back;
                }
                ui.add_space(8.0);
            }

            ui.label(
                RichText::new(&self.title)
                    .size(18.0)
                    .strong()
                    .color(theme.text_primary),
            );
        });

        let rect = ui.max_rect();
        ui.painter().hline(
            rect.x_range(),
            ui.min_rect().bottom() + 2.0,
            Stroke::new(1.0, theme.card_border),
        );

        action
    }
}
