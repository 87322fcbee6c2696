//! View-mode and date-cursor state for the step tracker screen.
//!
//! [`TrackerState`] is owned by the screen and only changes through its
//! setters. Navigation steps by the unit of the active [`ViewMode`].

use chrono::{Datelike, NaiveDate};

use crate::models::view_mode::ViewMode;
use crate::utils::date::{shift_days, shift_months_to_anchor};

/// The anchor date of the displayed period.
///
/// Month steps land on `anchor_day` clamped to the target month, so a cursor
/// on Jan 31 visits Feb 29 and returns to Mar 31 rather than drifting to the
/// 29th. Day and week steps re-anchor on the day they land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    date: NaiveDate,
    anchor_day: u32,
}

impl DateCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            anchor_day: date.day(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn anchor_day(&self) -> u32 {
        self.anchor_day
    }

    pub fn advance(&mut self, mode: ViewMode) {
        self.shift(mode, 1);
    }

    pub fn retreat(&mut self, mode: ViewMode) {
        self.shift(mode, -1);
    }

    /// Move to `date` and re-anchor on its day of month.
    pub fn reset(&mut self, date: NaiveDate) {
        *self = Self::new(date);
    }

    fn shift(&mut self, mode: ViewMode, steps: i32) {
        let shifted = match mode {
            ViewMode::Day => shift_days(self.date, i64::from(steps)),
            ViewMode::Week => shift_days(self.date, i64::from(steps) * 7),
            ViewMode::Month => shift_months_to_anchor(self.date, steps, self.anchor_day),
        };

        let Some(next) = shifted else {
            log::warn!(
                "Cannot move {} {} from {}: outside the supported calendar range",
                steps,
                mode,
                self.date
            );
            return;
        };

        self.date = next;
        if mode != ViewMode::Month {
            self.anchor_day = next.day();
        }
    }
}

/// Per-screen state: the active granularity and the displayed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerState {
    mode: ViewMode,
    cursor: DateCursor,
}

impl TrackerState {
    pub fn new(mode: ViewMode, date: NaiveDate) -> Self {
        Self {
            mode,
            cursor: DateCursor::new(date),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn cursor(&self) -> &DateCursor {
        &self.cursor
    }

    pub fn current_date(&self) -> NaiveDate {
        self.cursor.date()
    }

    /// Select a view mode. Returns `false` when `mode` was already active.
    /// The cursor is left untouched either way.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            return false;
        }
        log::debug!("View mode {} -> {}", self.mode, mode);
        self.mode = mode;
        true
    }

    /// Next period of the active mode
    pub fn advance(&mut self) {
        self.cursor.advance(self.mode);
        log::debug!("Advanced {} view to {}", self.mode, self.cursor.date());
    }

    /// Previous period of the active mode
    pub fn retreat(&mut self) {
        self.cursor.retreat(self.mode);
        log::debug!("Retreated {} view to {}", self.mode, self.cursor.date());
    }

    pub fn reset_to(&mut self, date: NaiveDate) {
        self.cursor.reset(date);
        log::debug!("Cursor reset to {}", date);
    }
}
