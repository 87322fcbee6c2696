// Screen commands
//
// Every input on the screen (tabs, chevrons, header back button, keyboard)
// is turned into a ScreenCommand and applied to the TrackerState in one place.

use chrono::NaiveDate;

use crate::models::view_mode::ViewMode;
use crate::services::navigation::{DateCursor, TrackerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    SelectMode(ViewMode),
    Previous,
    Next,
    Today,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Updated,
    Unchanged,
    /// The screen should be dismissed
    Close,
}

impl ScreenCommand {
    /// Keyboard binding for a key pressed without modifiers
    pub fn for_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::D => Some(Self::SelectMode(ViewMode::Day)),
            egui::Key::W => Some(Self::SelectMode(ViewMode::Week)),
            egui::Key::M => Some(Self::SelectMode(ViewMode::Month)),
            egui::Key::ArrowLeft => Some(Self::Previous),
            egui::Key::ArrowRight => Some(Self::Next),
            egui::Key::T => Some(Self::Today),
            egui::Key::Escape => Some(Self::Back),
            _ => None,
        }
    }

    pub fn apply(self, state: &mut TrackerState, today: NaiveDate) -> CommandOutcome {
        match self {
            Self::SelectMode(mode) => {
                if state.set_mode(mode) {
                    CommandOutcome::Updated
                } else {
                    CommandOutcome::Unchanged
                }
            }
            Self::Previous => {
                let before = *state.cursor();
                state.retreat();
                Self::moved(before, state)
            }
            Self::Next => {
                let before = *state.cursor();
                state.advance();
                Self::moved(before, state)
            }
            Self::Today => {
                let before = *state.cursor();
                state.reset_to(today);
                Self::moved(before, state)
            }
            Self::Back => CommandOutcome::Close,
        }
    }

    fn moved(before: DateCursor, state: &TrackerState) -> CommandOutcome {
        if *state.cursor() == before {
            CommandOutcome::Unchanged
        } else {
            CommandOutcome::Updated
        }
    }
}
