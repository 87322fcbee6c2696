use super::{StepTrackerApp, SCREEN_TITLE};
use crate::models::progress::RingGeometry;
use crate::models::settings::ScreenConfig;
use crate::services::navigation::TrackerState;
use crate::services::presentation::ChartCardModel;
use crate::ui_egui::commands::{CommandOutcome, ScreenCommand};
use crate::ui_egui::theme::TrackerTheme;
use crate::ui_egui::views::{
    ChartCard, ChartOptions, HeaderAction, HeaderBar, ModeTabs, ProgressRing, StatsStrip,
    SummaryCards,
};
use chrono::Local;

impl StepTrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ScreenConfig) -> Self {
        let active_theme = TrackerTheme::for_name(&config.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Opening step tracker: view={}, progress={}/{}",
            config.initial_view,
            config.progress.current,
            config.progress.goal
        );

        Self {
            state: TrackerState::new(config.initial_view, Local::now().date_naive()),
            progress: config.progress,
            ring: RingGeometry::standard(),
            header: HeaderBar::new(SCREEN_TITLE, true),
            chart_options: ChartOptions::from_theme(&active_theme),
            active_theme,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = self.collect_shortcuts(ctx);

        egui::TopBottomPanel::top("header_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::symmetric(16.0, 6.0)),
            )
            .show(ctx, |ui| {
                if self.header.show(ui, &self.active_theme) == HeaderAction::Back {
                    commands.push(ScreenCommand::Back);
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::symmetric(20.0, 10.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    commands.extend(self.render_body(ui));
                });
            });

        self.apply_commands(ctx, commands);
    }

    fn render_body(&self, ui: &mut egui::Ui) -> Vec<ScreenCommand> {
        let mut commands = Vec::new();
        let theme = &self.active_theme;

        ui.horizontal(|ui| {
            ProgressRing::show(ui, &self.ring, &self.progress, theme);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                SummaryCards::show(ui, &self.progress, theme);
            });
        });

        ui.add_space(20.0);
        if let Some(mode) = ModeTabs::show(ui, self.state.mode(), theme) {
            commands.push(ScreenCommand::SelectMode(mode));
        }
        ui.add_space(20.0);

        let model = ChartCardModel::from_state(&self.state);
        if let Some(command) = ChartCard::show(ui, &model, &self.chart_options, theme) {
            commands.push(command);
        }

        ui.add_space(35.0);
        StatsStrip::show(ui, &model.stats, theme);

        commands
    }

    fn apply_commands(&mut self, ctx: &egui::Context, commands: Vec<ScreenCommand>) {
        if commands.is_empty() {
            return;
        }

        let today = Local::now().date_naive();
        for command in commands {
            match command.apply(&mut self.state, today) {
                CommandOutcome::Updated => ctx.request_repaint(),
                CommandOutcome::Unchanged => {}
                CommandOutcome::Close => {
                    log::info!("Back pressed, closing step tracker");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    return;
                }
            }
        }
    }
}
