// Module exports for models

pub mod progress;
pub mod series;
pub mod settings;
pub mod view_mode;
