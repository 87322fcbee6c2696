//! Circular step-progress indicator.

use egui::{Align2, FontId, Pos2, Sense, Stroke, Vec2};

use crate::models::progress::{RingGeometry, StepProgress};
use crate::ui_egui::theme::TrackerTheme;

/// Segments used for a complete circle; partial arcs use a proportional share.
const FULL_CIRCLE_SEGMENTS: usize = 96;

pub struct ProgressRing;

impl ProgressRing {
    pub fn show(
        ui: &mut egui::Ui,
        geometry: &RingGeometry,
        progress: &StepProgress,
        theme: &TrackerTheme,
    ) -> egui::Response {
        let size = Vec2::splat(geometry.canvas_size);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();

        painter.circle_stroke(
            center,
            geometry.radius,
            Stroke::new(geometry.stroke_width, theme.ring_track),
        );

        let sweep = geometry.sweep_radians(progress);
        let points = arc_points(center, geometry.radius, sweep);
        if points.len() >= 2 {
            let stroke = Stroke::new(geometry.stroke_width, theme.accent);
            painter.add(egui::Shape::line(points.clone(), stroke));

            // round caps
            let cap_radius = geometry.stroke_width / 2.0;
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                painter.circle_filled(*first, cap_radius, theme.accent);
                painter.circle_filled(*last, cap_radius, theme.accent);
            }
        }

        painter.text(
            center - Vec2::new(0.0, 8.0),
            Align2::CENTER_CENTER,
            progress.current.to_string(),
            FontId::proportional(18.0),
            theme.text_primary,
        );
        painter.text(
            center + Vec2::new(0.0, 12.0),
            Align2::CENTER_CENTER,
            "steps",
            FontId::proportional(12.0),
            theme.text_primary,
        );

        let hint = if progress.goal_reached() {
            format!("Goal of {} steps reached", progress.goal)
        } else {
            format!(
                "{} of {} steps ({:.0}%), {} to go",
                progress.current,
                progress.goal,
                progress.fraction() * 100.0,
                progress.remaining()
            )
        };
        response.on_hover_text(hint)
    }
}

/// Points along an arc starting at 12 o'clock and running clockwise for
/// `sweep` radians. Empty when there is nothing to draw.
pub fn arc_points(center: Pos2, radius: f32, sweep: f32) -> Vec<Pos2> {
    if sweep <= 0.0 {
        return Vec::new();
    }

    let sweep = sweep.min(std::f32::consts::TAU);
    let share = sweep / std::f32::consts::TAU;
    let segments = ((FULL_CIRCLE_SEGMENTS as f32 * share).ceil() as usize).max(2);
    let start = -std::f32::consts::FRAC_PI_2;

    (0..=segments)
        .map(|i| {
            let angle = start + sweep * (i as f32 / segments as f32);
            Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
