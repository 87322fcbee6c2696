use super::StepTrackerApp;
use crate::ui_egui::commands::ScreenCommand;

const SHORTCUT_KEYS: [egui::Key; 7] = [
    egui::Key::D,
    egui::Key::W,
    egui::Key::M,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::T,
    egui::Key::Escape,
];

impl StepTrackerApp {
    /// Keyboard shortcuts pressed this frame, in binding order.
    pub(super) fn collect_shortcuts(&self, ctx: &egui::Context) -> Vec<ScreenCommand> {
        ctx.input(|i| {
            if i.modifiers.ctrl || i.modifiers.command || i.modifiers.alt {
                return Vec::new();
            }
            SHORTCUT_KEYS
                .iter()
                .filter(|key| i.key_pressed(**key))
                .filter_map(|key| ScreenCommand::for_key(*key))
                .collect()
        })
    }
}
