mod app;
pub mod commands;
pub mod theme;
pub mod views;

pub use app::StepTrackerApp;
