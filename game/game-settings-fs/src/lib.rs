#![deny(clippy::all)]

pub mod display_config;
pub mod scenario_path;

pub use display_config::{load_display_config, save_display_config};
pub use scenario_path::FsScenarioPathResolver;
