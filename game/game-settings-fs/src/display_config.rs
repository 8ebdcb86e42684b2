use std::path::Path;

use game_settings::SettingsDisplayConfig;

/// Reads the display config, a missing file yields the defaults.
pub fn load_display_config(path: &Path) -> anyhow::Result<SettingsDisplayConfig> {
    match std::fs::read_to_string(path) {
        Ok(json) => SettingsDisplayConfig::from_json_string(&json),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                target: "game-settings",
                "no display config at {}, using defaults",
                path.display()
            );
            Ok(SettingsDisplayConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn save_display_config(path: &Path, config: &SettingsDisplayConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_json_string()?)?;
    Ok(())
}
