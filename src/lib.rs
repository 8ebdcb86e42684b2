#![deny(clippy::all)]

//! Match settings shared by every peer of a game session and the
//! requirement texts shown for producible content.

pub use doc_tree;
pub use game_requirements as requirements;
pub use game_settings as settings;
pub use game_settings_fs as settings_fs;

#[cfg(test)]
mod tests;
