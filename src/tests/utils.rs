use game_settings::{ControlType, GameSettings, NetworkPlayerStatus};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An eight player lobby: a local host, one remote player in slot 2 and a
/// player in slot 5 that dropped.
pub fn lobby() -> GameSettings {
    let mut settings = GameSettings::new();
    settings.set_game_name("friday night");
    settings.set_game_uuid("5f0c6a1e-7d41-4d7e-9a57-3f1cf6f0b0aa");
    settings.set_map("conflict");
    settings.set_tileset("forest");
    settings.set_tech("megapack");
    settings.set_faction_count(8);
    settings.set_map_crc(0xdead_beef);
    settings.set_tech_crc(42);
    settings.set_faction_crc_list(vec![
        ("magic".to_string(), 1),
        ("tech".to_string(), 2),
    ]);

    for i in 0..8 {
        settings.set_faction_type_name(i, "tech").unwrap();
        settings.set_team(i, i % 2).unwrap();
        settings
            .set_faction_control(i, ControlType::CpuUltra)
            .unwrap();
    }
    settings.set_faction_control(0, ControlType::Human).unwrap();
    settings.set_network_player_name(0, "host").unwrap();

    settings.set_faction_control(2, ControlType::Network).unwrap();
    settings.set_network_player_name(2, "remote").unwrap();
    settings.set_network_player_language(2, "deutsch").unwrap();
    settings.set_network_player_platform(2, "Linux").unwrap();

    settings.set_network_player_name(5, "dropped").unwrap();
    settings
        .set_network_player_status(5, NetworkPlayerStatus::Disconnected)
        .unwrap();
    settings
}
