use std::fmt::Display;

use crate::{
    config::SettingsDisplayConfig,
    error::SettingsError,
    slot::{FactionSlot, PerSlot, SlotIndex},
    types::{ControlType, GameFlags, NetworkPlayerStatus, PathFinderType},
};

pub const HEADLESS_FACTION_NAME: &str = "headless-server";
pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_NETWORK_FRAME_PERIOD: i32 = 20;
pub const DEFAULT_AI_ACCEPT_SWITCH_TEAM_PERCENT_CHANCE: i32 = 30;
pub const DEFAULT_RESOURCE_MULTIPLIER_INDEX: i32 = 1;
pub const DEFAULT_FALLBACK_CPU_MULTIPLIER: i32 = 1;
/// No master server admin is present.
pub const NO_ADMIN: i32 = -1;

/// Generates a bounds checked getter/setter pair for a per-slot field.
macro_rules! slot_accessors {
    ($($(#[$doc:meta])* copy $field:ident: $ty:ty => $get:ident, $set:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $get(&self, index: i32) -> Result<$ty, SettingsError> {
                let slot = SlotIndex::new(index, stringify!($get))?;
                Ok(self.$field[slot])
            }

            pub fn $set(&mut self, index: i32, value: $ty) -> Result<(), SettingsError> {
                let slot = SlotIndex::new(index, stringify!($set))?;
                self.$field[slot] = value;
                Ok(())
            }
        )*
    };
    ($($(#[$doc:meta])* str $field:ident => $get:ident, $set:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $get(&self, index: i32) -> Result<&str, SettingsError> {
                let slot = SlotIndex::new(index, stringify!($get))?;
                Ok(&self.$field[slot])
            }

            pub fn $set(&mut self, index: i32, value: impl Into<String>) -> Result<(), SettingsError> {
                let slot = SlotIndex::new(index, stringify!($set))?;
                self.$field[slot] = value.into();
                Ok(())
            }
        )*
    };
}

macro_rules! scalar_accessors {
    ($(copy $field:ident: $ty:ty => $set:ident;)*) => {
        $(
            pub fn $field(&self) -> $ty {
                self.$field
            }

            pub fn $set(&mut self, value: $ty) {
                self.$field = value;
            }
        )*
    };
    ($(str $field:ident => $set:ident;)*) => {
        $(
            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn $set(&mut self, value: impl Into<String>) {
                self.$field = value.into();
            }
        )*
    };
}

/// Everything needed to start a match and keep all peers in sync about it.
///
/// Per-slot values are only reachable through index checked accessors,
/// an index outside of `0..MAX_PLAYERS` is always an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub(crate) game_uuid: String,
    pub(crate) game_name: String,
    pub(crate) description: String,
    pub(crate) map: String,
    pub(crate) tileset: String,
    pub(crate) tech: String,
    pub(crate) scenario: String,
    pub(crate) scenario_dir: String,

    pub(crate) faction_type_names: PerSlot<String>,
    pub(crate) network_player_names: PerSlot<String>,
    pub(crate) network_player_platforms: PerSlot<String>,
    pub(crate) network_player_statuses: PerSlot<NetworkPlayerStatus>,
    pub(crate) network_player_languages: PerSlot<String>,
    pub(crate) network_player_game_statuses: PerSlot<i32>,
    pub(crate) faction_controls: PerSlot<ControlType>,
    /// Index into the resource multiplier table, not a ratio.
    pub(crate) resource_multiplier_indices: PerSlot<i32>,
    pub(crate) network_player_uuids: PerSlot<String>,
    pub(crate) teams: PerSlot<i32>,
    pub(crate) start_location_indices: PerSlot<i32>,

    pub(crate) this_faction_index: i32,
    pub(crate) faction_count: i32,
    pub(crate) map_filter: i32,
    pub(crate) fallback_cpu_multiplier: i32,

    pub(crate) default_units: bool,
    pub(crate) default_resources: bool,
    pub(crate) default_victory_conditions: bool,

    pub(crate) fog_of_war: bool,
    pub(crate) allow_observers: bool,
    pub(crate) enable_observer_mode_at_end_game: bool,
    pub(crate) enable_server_controlled_ai: bool,
    pub(crate) network_frame_period: i32,
    pub(crate) network_pause_game_for_lagged_clients: bool,
    pub(crate) path_finder_type: PathFinderType,

    pub(crate) flags: GameFlags,

    pub(crate) map_crc: u32,
    pub(crate) tileset_crc: u32,
    pub(crate) tech_crc: u32,
    pub(crate) faction_crc_list: Vec<(String, u32)>,

    /// 0 to 100
    pub(crate) ai_accept_switch_team_percent_chance: i32,
    pub(crate) masterserver_admin: i32,
    pub(crate) masterserver_admin_faction_index: i32,

    pub(crate) network_allow_native_language_techtree: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_uuid: String::new(),
            game_name: String::new(),
            description: String::new(),
            map: String::new(),
            tileset: String::new(),
            tech: String::new(),
            scenario: String::new(),
            scenario_dir: String::new(),

            faction_type_names: PerSlot::default(),
            network_player_names: PerSlot::default(),
            network_player_platforms: PerSlot::default(),
            network_player_statuses: PerSlot::default(),
            network_player_languages: PerSlot::filled(DEFAULT_LANGUAGE.to_string()),
            network_player_game_statuses: PerSlot::default(),
            faction_controls: PerSlot::default(),
            resource_multiplier_indices: PerSlot::filled(DEFAULT_RESOURCE_MULTIPLIER_INDEX),
            network_player_uuids: PerSlot::default(),
            teams: PerSlot::default(),
            start_location_indices: PerSlot::from_fn(i32::from),

            this_faction_index: 0,
            faction_count: 0,
            map_filter: 0,
            fallback_cpu_multiplier: DEFAULT_FALLBACK_CPU_MULTIPLIER,

            default_units: false,
            default_resources: false,
            default_victory_conditions: false,

            fog_of_war: true,
            allow_observers: false,
            enable_observer_mode_at_end_game: false,
            enable_server_controlled_ai: false,
            network_frame_period: DEFAULT_NETWORK_FRAME_PERIOD,
            network_pause_game_for_lagged_clients: false,
            path_finder_type: PathFinderType::Basic,

            flags: GameFlags::empty(),

            map_crc: 0,
            tileset_crc: 0,
            tech_crc: 0,
            faction_crc_list: Vec::new(),

            ai_accept_switch_team_percent_chance: DEFAULT_AI_ACCEPT_SWITCH_TEAM_PERCENT_CHANCE,
            masterserver_admin: NO_ADMIN,
            masterserver_admin_faction_index: NO_ADMIN,

            network_allow_native_language_techtree: true,
        }
    }
}

impl GameSettings {
    pub fn new() -> Self {
        Self::default()
    }

    scalar_accessors! {
        str game_uuid => set_game_uuid;
        str game_name => set_game_name;
        str description => set_description;
        str map => set_map;
        str tileset => set_tileset;
        str tech => set_tech;
        str scenario => set_scenario;
        str scenario_dir => set_scenario_dir;
    }

    scalar_accessors! {
        copy this_faction_index: i32 => set_this_faction_index;
        copy faction_count: i32 => set_faction_count;
        copy map_filter: i32 => set_map_filter;
        copy fallback_cpu_multiplier: i32 => set_fallback_cpu_multiplier;
        copy default_units: bool => set_default_units;
        copy default_resources: bool => set_default_resources;
        copy default_victory_conditions: bool => set_default_victory_conditions;
        copy fog_of_war: bool => set_fog_of_war;
        copy allow_observers: bool => set_allow_observers;
        copy enable_observer_mode_at_end_game: bool => set_enable_observer_mode_at_end_game;
        copy enable_server_controlled_ai: bool => set_enable_server_controlled_ai;
        copy network_frame_period: i32 => set_network_frame_period;
        copy network_pause_game_for_lagged_clients: bool => set_network_pause_game_for_lagged_clients;
        copy path_finder_type: PathFinderType => set_path_finder_type;
        copy flags: GameFlags => set_flags;
        copy map_crc: u32 => set_map_crc;
        copy tileset_crc: u32 => set_tileset_crc;
        copy tech_crc: u32 => set_tech_crc;
        copy ai_accept_switch_team_percent_chance: i32 => set_ai_accept_switch_team_percent_chance;
        copy masterserver_admin: i32 => set_masterserver_admin;
        copy masterserver_admin_faction_index: i32 => set_masterserver_admin_faction_index;
        copy network_allow_native_language_techtree: bool => set_network_allow_native_language_techtree;
    }

    pub fn faction_crc_list(&self) -> &[(String, u32)] {
        &self.faction_crc_list
    }

    pub fn set_faction_crc_list(&mut self, list: Vec<(String, u32)>) {
        self.faction_crc_list = list;
    }

    pub fn is_flag_enabled(&self, flag: GameFlags) -> bool {
        self.flags.contains(flag)
    }

    /// The faction type of a slot, `-1` names the headless server.
    pub fn faction_type_name(&self, index: i32) -> Result<&str, SettingsError> {
        match FactionSlot::new(index, "faction_type_name")? {
            FactionSlot::Headless => Ok(HEADLESS_FACTION_NAME),
            FactionSlot::Slot(slot) => Ok(&self.faction_type_names[slot]),
        }
    }

    pub fn set_faction_type_name(
        &mut self,
        index: i32,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        let slot = SlotIndex::new(index, "set_faction_type_name")?;
        self.faction_type_names[slot] = value.into();
        Ok(())
    }

    slot_accessors! {
        /// The raw player name, see [`Self::display_player_name`] for UI.
        str network_player_names => network_player_name, set_network_player_name;
        str network_player_platforms => network_player_platform, set_network_player_platform;
        str network_player_languages => network_player_language, set_network_player_language;
        /// An opaque id that identifies the player across reconnects.
        str network_player_uuids => network_player_uuid, set_network_player_uuid;
    }

    slot_accessors! {
        copy network_player_statuses: NetworkPlayerStatus => network_player_status, set_network_player_status;
        /// The UI/game phase the player's client is in.
        copy network_player_game_statuses: i32 => network_player_game_status, set_network_player_game_status;
        copy faction_controls: ControlType => faction_control, set_faction_control;
        copy resource_multiplier_indices: i32 => resource_multiplier_index, set_resource_multiplier_index;
        copy teams: i32 => team, set_team;
        copy start_location_indices: i32 => start_location_index, set_start_location_index;
    }

    /// The player name as shown to users.
    pub fn display_player_name(
        &self,
        index: i32,
        config: &SettingsDisplayConfig,
    ) -> Result<String, SettingsError> {
        let slot = SlotIndex::new(index, "display_player_name")?;
        let name = &self.network_player_names[slot];
        Ok(
            if self.network_player_statuses[slot] == NetworkPlayerStatus::Disconnected {
                format!("{}{}", config.player_disconnected_text, name)
            } else {
                name.clone()
            },
        )
    }

    pub fn is_network_game(&self) -> bool {
        SlotIndex::all().any(|slot| {
            self.faction_controls[slot].is_network()
                || self.network_player_statuses[slot] == NetworkPlayerStatus::Disconnected
        })
    }

    /// All non-empty player languages in slot order, never empty.
    ///
    /// If no slot has a language a single empty entry is returned.
    pub fn unique_network_player_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for language in self
            .network_player_languages
            .iter()
            .filter(|language| !language.is_empty())
        {
            if !languages.contains(language) {
                languages.push(language.clone());
            }
        }
        if languages.is_empty() {
            languages.push(String::new());
        }
        languages
    }

    fn slot_of_start_location(&self, start_location: i32) -> Option<SlotIndex> {
        self.start_location_indices
            .iter_slots()
            .find_map(|(slot, &location)| (location == start_location).then_some(slot))
    }

    /// The lowest slot that spawns at `start_location`, or `-1`.
    pub fn faction_index_for_start_location(
        &self,
        start_location: i32,
    ) -> Result<i32, SettingsError> {
        SlotIndex::new(start_location, "faction_index_for_start_location")?;
        Ok(self
            .slot_of_start_location(start_location)
            .map(i32::from)
            .unwrap_or(-1))
    }

    /// Empty if no slot spawns at `start_location`.
    pub fn network_player_name_by_start_location(&self, start_location: i32) -> String {
        self.slot_of_start_location(start_location)
            .map(|slot| self.network_player_names[slot].clone())
            .unwrap_or_default()
    }

    /// Empty if no slot spawns at `start_location`.
    pub fn network_player_platform_by_start_location(&self, start_location: i32) -> String {
        self.slot_of_start_location(start_location)
            .map(|slot| self.network_player_platforms[slot].clone())
            .unwrap_or_default()
    }
}

impl Display for GameSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game ID = {}", self.game_uuid)?;
        writeln!(f, "gameName = {}", self.game_name)?;
        writeln!(f, "description = {}", self.description)?;
        writeln!(f, "mapFilterIndex = {}", self.map_filter)?;
        writeln!(f, "map = {}", self.map)?;
        writeln!(f, "tileset = {}", self.tileset)?;
        writeln!(f, "tech = {}", self.tech)?;
        writeln!(f, "scenario = {}", self.scenario)?;
        writeln!(f, "scenarioDir = {}", self.scenario_dir)?;
        for slot in SlotIndex::all() {
            writeln!(f, "player index = {slot}")?;
            writeln!(f, "factionTypeName = {}", self.faction_type_names[slot])?;
            writeln!(f, "networkPlayerName = {}", self.network_player_names[slot])?;
            writeln!(
                f,
                "networkPlayerPlatform = {}",
                self.network_player_platforms[slot]
            )?;
            writeln!(
                f,
                "networkPlayerLanguage = {}",
                self.network_player_languages[slot]
            )?;
            writeln!(f, "factionControl = {}", self.faction_controls[slot] as i32)?;
            writeln!(
                f,
                "resourceMultiplierIndex = {}",
                self.resource_multiplier_indices[slot]
            )?;
            writeln!(f, "team = {}", self.teams[slot])?;
            writeln!(
                f,
                "startLocationIndex = {}",
                self.start_location_indices[slot]
            )?;
            writeln!(f, "networkPlayerUUID = {}", self.network_player_uuids[slot])?;
        }
        writeln!(f, "thisFactionIndex = {}", self.this_faction_index)?;
        writeln!(f, "factionCount = {}", self.faction_count)?;
        writeln!(f, "defaultUnits = {}", self.default_units as i32)?;
        writeln!(f, "defaultResources = {}", self.default_resources as i32)?;
        writeln!(
            f,
            "defaultVictoryConditions = {}",
            self.default_victory_conditions as i32
        )?;
        writeln!(f, "fogOfWar = {}", self.fog_of_war as i32)?;
        writeln!(f, "allowObservers = {}", self.allow_observers as i32)?;
        writeln!(
            f,
            "enableObserverModeAtEndGame = {}",
            self.enable_observer_mode_at_end_game as i32
        )?;
        writeln!(
            f,
            "enableServerControlledAI = {}",
            self.enable_server_controlled_ai as i32
        )?;
        writeln!(f, "networkFramePeriod = {}", self.network_frame_period)?;
        writeln!(
            f,
            "networkPauseGameForLaggedClients = {}",
            self.network_pause_game_for_lagged_clients as i32
        )?;
        writeln!(f, "pathFinderType = {}", self.path_finder_type as i32)?;
        writeln!(f, "flagTypes1 = {}", self.flags.bits())?;
        writeln!(f, "mapCRC = {}", self.map_crc)?;
        writeln!(f, "tilesetCRC = {}", self.tileset_crc)?;
        writeln!(f, "techCRC = {}", self.tech_crc)?;
        for (name, crc) in &self.faction_crc_list {
            writeln!(f, "factionCRCList name [{name}] CRC = {crc}")?;
        }
        writeln!(
            f,
            "aiAcceptSwitchTeamPercentChance = {}",
            self.ai_accept_switch_team_percent_chance
        )?;
        writeln!(f, "masterserver_admin = {}", self.masterserver_admin)?;
        writeln!(
            f,
            "masterserver_admin_factionIndex = {}",
            self.masterserver_admin_faction_index
        )?;
        writeln!(
            f,
            "networkAllowNativeLanguageTechtree = {}",
            self.network_allow_native_language_techtree as i32
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::{
        config::SettingsDisplayConfig,
        error::SettingsError,
        slot::MAX_PLAYERS,
        types::{ControlType, GameFlags, NetworkPlayerStatus},
    };

    use super::{GameSettings, DEFAULT_LANGUAGE, HEADLESS_FACTION_NAME};

    const N: i32 = MAX_PLAYERS as i32;

    #[test]
    fn defaults() {
        let settings = GameSettings::new();
        for i in 0..N {
            assert_eq!(settings.faction_type_name(i), Ok(""));
            assert_eq!(settings.network_player_language(i), Ok(DEFAULT_LANGUAGE));
            assert_eq!(settings.faction_control(i), Ok(ControlType::Closed));
            assert_eq!(settings.start_location_index(i), Ok(i));
            assert_eq!(settings.team(i), Ok(0));
            assert_eq!(settings.resource_multiplier_index(i), Ok(1));
            assert_eq!(settings.network_player_game_status(i), Ok(0));
            assert_eq!(
                settings.network_player_status(i),
                Ok(NetworkPlayerStatus::None)
            );
        }
        assert!(settings.fog_of_war());
        assert_eq!(settings.network_frame_period(), 20);
        assert_eq!(settings.ai_accept_switch_team_percent_chance(), 30);
        assert_eq!(settings.masterserver_admin(), -1);
        assert_eq!(settings.masterserver_admin_faction_index(), -1);
        assert!(settings.network_allow_native_language_techtree());
        assert_eq!(settings.flags(), GameFlags::empty());
        assert!(settings.faction_crc_list().is_empty());
    }

    #[test]
    fn slot_setters_round_trip() {
        let mut settings = GameSettings::new();
        for i in 0..N {
            settings.set_faction_type_name(i, format!("faction{i}")).unwrap();
            settings.set_network_player_name(i, format!("p{i}")).unwrap();
            settings.set_network_player_platform(i, "linux").unwrap();
            settings.set_network_player_language(i, "deutsch").unwrap();
            settings.set_network_player_uuid(i, format!("uuid-{i}")).unwrap();
            settings.set_network_player_game_status(i, i + 3).unwrap();
            settings
                .set_network_player_status(i, NetworkPlayerStatus::Ready)
                .unwrap();
            settings.set_faction_control(i, ControlType::Human).unwrap();
            settings.set_resource_multiplier_index(i, 50 + i).unwrap();
            settings.set_team(i, i % 2).unwrap();
            settings.set_start_location_index(i, N - 1 - i).unwrap();
        }
        for i in 0..N {
            assert_eq!(settings.faction_type_name(i).unwrap(), format!("faction{i}"));
            assert_eq!(settings.network_player_name(i).unwrap(), format!("p{i}"));
            assert_eq!(settings.network_player_platform(i), Ok("linux"));
            assert_eq!(settings.network_player_language(i), Ok("deutsch"));
            assert_eq!(settings.network_player_uuid(i).unwrap(), format!("uuid-{i}"));
            assert_eq!(settings.network_player_game_status(i), Ok(i + 3));
            assert_eq!(
                settings.network_player_status(i),
                Ok(NetworkPlayerStatus::Ready)
            );
            assert_eq!(settings.faction_control(i), Ok(ControlType::Human));
            assert_eq!(settings.resource_multiplier_index(i), Ok(50 + i));
            assert_eq!(settings.team(i), Ok(i % 2));
            assert_eq!(settings.start_location_index(i), Ok(N - 1 - i));
        }
    }

    #[test]
    fn out_of_range_slots_fail() {
        let mut settings = GameSettings::new();
        let snapshot = settings.clone();
        for i in [-2, -1, N, N + 1, i32::MAX] {
            let is_oor = |res: Result<(), SettingsError>| {
                matches!(res, Err(SettingsError::OutOfRangeSlot { index, .. }) if index == i)
            };
            assert!(is_oor(settings.network_player_name(i).map(|_| ())));
            assert!(is_oor(settings.network_player_platform(i).map(|_| ())));
            assert!(is_oor(settings.network_player_language(i).map(|_| ())));
            assert!(is_oor(settings.network_player_uuid(i).map(|_| ())));
            assert!(is_oor(settings.network_player_status(i).map(|_| ())));
            assert!(is_oor(settings.network_player_game_status(i).map(|_| ())));
            assert!(is_oor(settings.faction_control(i).map(|_| ())));
            assert!(is_oor(settings.resource_multiplier_index(i).map(|_| ())));
            assert!(is_oor(settings.team(i).map(|_| ())));
            assert!(is_oor(settings.start_location_index(i).map(|_| ())));
            assert!(is_oor(
                settings
                    .display_player_name(i, &SettingsDisplayConfig::default())
                    .map(|_| ())
            ));
            assert!(is_oor(settings.faction_index_for_start_location(i).map(|_| ())));

            assert!(is_oor(settings.set_faction_type_name(i, "x")));
            assert!(is_oor(settings.set_network_player_name(i, "x")));
            assert!(is_oor(settings.set_network_player_platform(i, "x")));
            assert!(is_oor(settings.set_network_player_language(i, "x")));
            assert!(is_oor(settings.set_network_player_uuid(i, "x")));
            assert!(is_oor(
                settings.set_network_player_status(i, NetworkPlayerStatus::Ready)
            ));
            assert!(is_oor(settings.set_network_player_game_status(i, 1)));
            assert!(is_oor(settings.set_faction_control(i, ControlType::Human)));
            assert!(is_oor(settings.set_resource_multiplier_index(i, 2)));
            assert!(is_oor(settings.set_team(i, 1)));
            assert!(is_oor(settings.set_start_location_index(i, 1)));

            if i != -1 {
                assert!(is_oor(settings.faction_type_name(i).map(|_| ())));
            }
        }
        assert_eq!(settings, snapshot);
    }

    #[test]
    fn error_names_the_accessor() {
        let settings = GameSettings::new();
        assert_eq!(
            settings.team(9),
            Err(SettingsError::OutOfRangeSlot {
                index: 9,
                context: "team"
            })
        );
        let msg = settings.faction_control(-5).unwrap_err().to_string();
        assert!(msg.contains("faction_control"), "{msg}");
        assert!(msg.contains("-5"), "{msg}");
    }

    #[test]
    fn headless_faction_name() {
        let settings = GameSettings::new();
        assert_eq!(settings.faction_type_name(-1), Ok(HEADLESS_FACTION_NAME));
    }

    #[test]
    fn network_game_detection() {
        let mut settings = GameSettings::new();
        assert!(!settings.is_network_game());

        for ctrl in ControlType::iter() {
            settings.set_faction_control(4, ctrl).unwrap();
            assert_eq!(settings.is_network_game(), ctrl.is_network(), "{ctrl:?}");
        }
        settings.set_faction_control(4, ControlType::Human).unwrap();
        settings
            .set_network_player_status(7, NetworkPlayerStatus::Disconnected)
            .unwrap();
        assert!(settings.is_network_game());
        settings
            .set_network_player_status(7, NetworkPlayerStatus::BeRightBack)
            .unwrap();
        assert!(!settings.is_network_game());
    }

    #[test]
    fn unique_languages() {
        let mut settings = GameSettings::new();
        assert_eq!(settings.unique_network_player_languages(), vec!["english"]);

        for i in 0..N {
            settings.set_network_player_language(i, "").unwrap();
        }
        assert_eq!(settings.unique_network_player_languages(), vec![""]);

        settings.set_network_player_language(5, "spanish").unwrap();
        settings.set_network_player_language(1, "german").unwrap();
        settings.set_network_player_language(6, "german").unwrap();
        settings.set_network_player_language(7, "spanish").unwrap();
        assert_eq!(
            settings.unique_network_player_languages(),
            vec!["german", "spanish"]
        );
    }

    #[test]
    fn start_location_lookups() {
        let mut settings = GameSettings::new();
        for i in 0..N {
            settings.set_start_location_index(i, 0).unwrap();
            settings.set_network_player_name(i, format!("p{i}")).unwrap();
            settings.set_network_player_platform(i, format!("os{i}")).unwrap();
        }
        settings.set_start_location_index(3, 5).unwrap();
        settings.set_start_location_index(6, 5).unwrap();

        assert_eq!(settings.faction_index_for_start_location(0), Ok(0));
        assert_eq!(settings.faction_index_for_start_location(5), Ok(3));
        assert_eq!(settings.faction_index_for_start_location(2), Ok(-1));

        assert_eq!(settings.network_player_name_by_start_location(5), "p3");
        assert_eq!(settings.network_player_platform_by_start_location(5), "os3");
        assert_eq!(settings.network_player_name_by_start_location(2), "");
        assert_eq!(settings.network_player_name_by_start_location(-7), "");
        assert_eq!(settings.network_player_platform_by_start_location(100), "");
    }

    #[test]
    fn display_name_prefix() {
        let mut settings = GameSettings::new();
        let config = SettingsDisplayConfig {
            player_disconnected_text: "[dc] ".to_string(),
        };
        settings.set_network_player_name(2, "bob").unwrap();
        assert_eq!(settings.display_player_name(2, &config).unwrap(), "bob");
        settings
            .set_network_player_status(2, NetworkPlayerStatus::Disconnected)
            .unwrap();
        assert_eq!(settings.display_player_name(2, &config).unwrap(), "[dc] bob");
        assert_eq!(settings.network_player_name(2), Ok("bob"));
    }

    #[test]
    fn flags() {
        let mut settings = GameSettings::new();
        settings.set_flags(GameFlags::ALLOW_TEAM_SWITCHING | GameFlags::NETWORK_SYNCH_CHECKS);
        assert!(settings.is_flag_enabled(GameFlags::ALLOW_TEAM_SWITCHING));
        assert!(!settings.is_flag_enabled(GameFlags::SHOW_MAP_RESOURCES));
        assert!(!settings
            .is_flag_enabled(GameFlags::ALLOW_TEAM_SWITCHING | GameFlags::SHOW_MAP_RESOURCES));
    }

    #[test]
    fn copies_are_independent() {
        let mut live = GameSettings::new();
        live.set_map("conflict");
        let snapshot = live.clone();
        live.set_team(0, 3).unwrap();
        assert_eq!(snapshot.team(0), Ok(0));
        assert_ne!(snapshot, live);
    }

    #[test]
    fn text_dump() {
        let mut settings = GameSettings::new();
        settings.set_game_uuid("abc");
        settings.set_faction_crc_list(vec![("magic".to_string(), 99)]);
        let dump = settings.to_string();
        assert!(dump.starts_with("Game ID = abc\n"));
        assert!(dump.contains("factionCRCList name [magic] CRC = 99\n"));
        assert_eq!(dump.matches("player index = ").count(), MAX_PLAYERS);
        assert!(dump.ends_with("networkAllowNativeLanguageTechtree = 1\n"));
    }
}
