// Settings module
// Screen configuration loaded from config.toml at startup

use serde::{Deserialize, Serialize};

use super::progress::StepProgress;
use super::view_mode::ViewMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// "light" or "dark"
    pub theme: String,
    pub initial_view: ViewMode,
    pub window_width: f32,
    pub window_height: f32,
    /// Snapshot shown by the ring and cards. Never written back.
    pub progress: StepProgress,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            initial_view: ViewMode::Day,
            window_width: 420.0,
            window_height: 860.0,
            progress: StepProgress::default(),
        }
    }
}

impl ScreenConfig {
    pub const MIN_WINDOW_WIDTH: f32 = 320.0;
    pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        let theme = self.theme.to_ascii_lowercase();
        if theme != "light" && theme != "dark" {
            return Err(format!(
                "Invalid theme '{}': must be 'light' or 'dark'",
                self.theme
            ));
        }

        if !self.window_width.is_finite() || self.window_width < Self::MIN_WINDOW_WIDTH {
            return Err(format!(
                "Invalid window_width {}: must be at least {}",
                self.window_width,
                Self::MIN_WINDOW_WIDTH
            ));
        }

        if !self.window_height.is_finite() || self.window_height < Self::MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Invalid window_height {}: must be at least {}",
                self.window_height,
                Self::MIN_WINDOW_HEIGHT
            ));
        }

        if self.progress.goal == 0 {
            return Err("Invalid progress.goal: must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let config = ScreenConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_dark());
        assert_eq!(config.initial_view, ViewMode::Day);
    }

    #[test]
    fn test_theme_is_case_insensitive() {
        let config = ScreenConfig {
            theme: "Dark".to_string(),
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.is_dark());
    }

    #[test]
    fn test_invalid_theme() {
        let config = ScreenConfig {
            theme: "sepia".to_string(),
            ..ScreenConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("sepia"));
    }

    #[test]
    fn test_window_too_small() {
        let config = ScreenConfig {
            window_width: 100.0,
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ScreenConfig {
            window_height: f32::NAN,
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_goal_rejected() {
        let config = ScreenConfig {
            progress: StepProgress::new(10, 0, 0),
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
