// View mode model
// The chart granularity selected by the Day/Week/Month tabs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    #[serde(alias = "Day", alias = "days")]
    Day,
    #[serde(alias = "Week", alias = "weeks")]
    Week,
    #[serde(alias = "Month", alias = "months")]
    Month,
}

impl ViewMode {
    /// Tab order, left to right.
    pub const ALL: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}', expected day, week or month")]
pub struct ParseViewModeError(pub String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(ViewMode::Day),
            "week" | "weeks" => Ok(ViewMode::Week),
            "month" | "months" => Ok(ViewMode::Month),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}
