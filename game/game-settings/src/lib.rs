#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod persist;
pub mod scenario_path;
pub mod settings;
pub mod slot;
pub mod types;

pub use config::SettingsDisplayConfig;
pub use error::SettingsError;
pub use scenario_path::{NoopScenarioPathResolver, ScenarioPathResolver};
pub use settings::GameSettings;
pub use slot::{FactionSlot, SlotIndex, MAX_PLAYERS};
pub use types::{ControlType, GameFlags, NetworkPlayerStatus, PathFinderType};
