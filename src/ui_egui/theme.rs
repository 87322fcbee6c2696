//! Theme module for the step tracker screen
//!
//! Defines the TrackerTheme structure and applies it to an egui context.

use egui::Color32;

/// Colors used across the step tracker screen
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Screen background color
    pub app_background: Color32,

    /// Goal, achievement and chart card fill
    pub card_background: Color32,

    /// Card outline
    pub card_border: Color32,

    /// Headings, step counts and active tab text
    pub text_primary: Color32,

    /// Inactive tab text and axis labels
    pub text_secondary: Color32,

    /// Progress ring and chart line
    pub accent: Color32,

    /// Data point outline on the chart
    pub accent_outline: Color32,

    /// Unfilled part of the progress ring
    pub ring_track: Color32,

    /// Underline of inactive tabs
    pub tab_inactive_border: Color32,

    /// Plot area behind the chart line
    pub chart_background: Color32,

    /// Statistics strip fill
    pub stats_background: Color32,
}

impl TrackerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(255, 255, 255),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(238, 238, 238),
            text_primary: Color32::from_rgb(31, 37, 135),
            text_secondary: Color32::from_rgb(102, 102, 102),
            accent: Color32::from_rgb(246, 162, 26),
            accent_outline: Color32::from_rgb(255, 167, 38),
            ring_track: Color32::from_rgb(253, 236, 209),
            tab_inactive_border: Color32::from_rgb(217, 217, 217),
            chart_background: Color32::from_rgb(246, 246, 246),
            stats_background: Color32::from_rgb(180, 180, 180),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            card_background: Color32::from_rgb(40, 40, 40),
            card_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(200, 205, 255),
            text_secondary: Color32::from_rgb(170, 170, 170),
            accent: Color32::from_rgb(246, 162, 26),
            accent_outline: Color32::from_rgb(255, 167, 38),
            ring_track: Color32::from_rgb(70, 55, 30),
            tab_inactive_border: Color32::from_rgb(80, 80, 80),
            chart_background: Color32::from_rgb(35, 35, 38),
            stats_background: Color32::from_rgb(70, 70, 70),
        }
    }

    pub fn for_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_fill = self.card_background;
        visuals.widgets.hovered.bg_fill = self.chart_background;
        visuals.widgets.active.bg_fill = self.chart_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for TrackerTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = TrackerTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.text_primary, Color32::from_rgb(0x1F, 0x25, 0x87));
        assert_eq!(theme.accent, Color32::from_rgb(0xF6, 0xA2, 0x1A));
    }

    #[test]
    fn test_dark_theme() {
        let theme = TrackerTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_for_name() {
        assert!(TrackerTheme::for_name("DARK").is_dark);
        assert!(!TrackerTheme::for_name("light").is_dark);
        assert!(!TrackerTheme::for_name("anything else").is_dark);
    }
}
