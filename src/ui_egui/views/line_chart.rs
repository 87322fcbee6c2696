//! Painter-based line chart for a [`SeriesDataset`].
//!
//! The chart owns all scaling: values are plotted from zero up to the series
//! maximum with labels spaced evenly along the x axis.

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::models::series::SeriesDataset;
use crate::ui_egui::theme::TrackerTheme;

const GRID_LINES: usize = 4;
const Y_AXIS_WIDTH: f32 = 36.0;
const X_AXIS_HEIGHT: f32 = 20.0;
const PLOT_PADDING: f32 = 10.0;

/// Display options handed to the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub background: Color32,
    pub line_color: Color32,
    pub label_color: Color32,
    pub point_stroke_color: Color32,
    pub point_radius: f32,
    pub point_stroke_width: f32,
    /// Opacity of the area under the line
    pub fill_opacity: f32,
    pub corner_radius: f32,
    pub decimal_places: usize,
    pub height: f32,
}

impl ChartOptions {
    pub fn from_theme(theme: &TrackerTheme) -> Self {
        Self {
            background: theme.chart_background,
            line_color: theme.accent,
            label_color: theme.text_secondary,
            point_stroke_color: theme.accent_outline,
            point_radius: 5.0,
            point_stroke_width: 2.0,
            fill_opacity: 0.3,
            corner_radius: 10.0,
            decimal_places: 1,
            height: 220.0,
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from_theme(&TrackerTheme::light())
    }
}

/// Upper bound of the y axis. Never zero so flat series still plot.
pub fn y_axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Screen positions of `values` inside `rect`. The y axis runs from zero at
/// the bottom of `rect` to the series maximum at the top; a single sample is
/// centred horizontally.
pub fn plot_points(values: &[f64], rect: Rect) -> Vec<Pos2> {
    let y_max = y_axis_max(values);
    let last_index = values.len().saturating_sub(1);

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if last_index == 0 {
                rect.center().x
            } else {
                rect.left() + rect.width() * (i as f32 / last_index as f32)
            };
            let ratio = (value.max(0.0) / y_max) as f32;
            Pos2::new(x, rect.bottom() - ratio * rect.height())
        })
        .collect()
}

pub struct LineChart;

impl LineChart {
    pub fn show(ui: &mut egui::Ui, dataset: &SeriesDataset, options: &ChartOptions) -> egui::Response {
        let size = Vec2::new(ui.available_width(), options.height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, Rounding::same(options.corner_radius), options.background);

        let plot_rect = Rect::from_min_max(
            Pos2::new(rect.left() + Y_AXIS_WIDTH, rect.top() + PLOT_PADDING),
            Pos2::new(rect.right() - PLOT_PADDING, rect.bottom() - X_AXIS_HEIGHT),
        );
        let label_font = FontId::proportional(10.0);
        let y_max = y_axis_max(dataset.values);

        for step in 0..=GRID_LINES {
            let fraction = step as f32 / GRID_LINES as f32;
            let y = plot_rect.bottom() - fraction * plot_rect.height();
            painter.hline(
                plot_rect.x_range(),
                y,
                Stroke::new(1.0, options.label_color.gamma_multiply(0.2)),
            );
            painter.text(
                Pos2::new(plot_rect.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                options.format_value(y_max * f64::from(fraction)),
                label_font.clone(),
                options.label_color,
            );
        }

        let points = plot_points(dataset.values, plot_rect);

        for ((label, _), point) in dataset.points().zip(&points) {
            painter.text(
                Pos2::new(point.x, plot_rect.bottom() + 4.0),
                Align2::CENTER_TOP,
                label,
                label_font.clone(),
                options.label_color,
            );
        }

        let fill = options.line_color.gamma_multiply(options.fill_opacity);
        for window in points.windows(2) {
            let (a, b) = (window[0], window[1]);
            painter.add(egui::Shape::convex_polygon(
                vec![
                    a,
                    b,
                    Pos2::new(b.x, plot_rect.bottom()),
                    Pos2::new(a.x, plot_rect.bottom()),
                ],
                fill,
                Stroke::NONE,
            ));
        }

        if points.len() >= 2 {
            painter.add(egui::Shape::line(
                points.clone(),
                Stroke::new(2.0, options.line_color),
            ));
        }

        for point in &points {
            painter.circle(
                *point,
                options.point_radius,
                options.line_color,
                Stroke::new(options.point_stroke_width, options.point_stroke_color),
            );
        }

        response
    }
}
