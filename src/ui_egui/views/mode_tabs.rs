use egui::{Align2, FontId, Pos2, Sense, Stroke, Vec2};

use crate::models::view_mode::ViewMode;
use crate::ui_egui::theme::TrackerTheme;

const TAB_HEIGHT: f32 = 32.0;
const INDICATOR_HALF_WIDTH: f32 = 8.0;

/// Day / Week / Month tab strip. Returns the tab that was clicked, if any.
pub struct ModeTabs;

impl ModeTabs {
    pub fn show(ui: &mut egui::Ui, active: ViewMode, theme: &TrackerTheme) -> Option<ViewMode> {
        let mut clicked = None;
        let tab_width = (ui.available_width() / ViewMode::ALL.len() as f32).max(60.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for mode in ViewMode::ALL {
                let is_active = mode == active;
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(tab_width, TAB_HEIGHT), Sense::click());
                let painter = ui.painter();

                let (text_color, border_color) = if is_active {
                    (theme.text_primary, theme.text_primary)
                } else {
                    (theme.text_secondary, theme.tab_inactive_border)
                };

                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    mode.label(),
                    FontId::proportional(14.0),
                    text_color,
                );
                painter.hline(rect.x_range(), rect.bottom() - 1.0, Stroke::new(2.0, border_color));

                if is_active {
                    let tip = Pos2::new(rect.center().x, rect.bottom() - INDICATOR_HALF_WIDTH);
                    painter.add(egui::Shape::convex_polygon(
                        vec![
                            tip,
                            Pos2::new(tip.x + INDICATOR_HALF_WIDTH, rect.bottom()),
                            Pos2::new(tip.x - INDICATOR_HALF_WIDTH, rect.bottom()),
                        ],
                        theme.text_primary,
                        Stroke::NONE,
                    ));
                }

                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    clicked = Some(mode);
                }
            }
        });

        clicked
    }
}
