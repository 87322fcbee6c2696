mod service;

pub use service::ConfigService;
