// Service module exports

pub mod navigation;
pub mod presentation;
pub mod settings;
