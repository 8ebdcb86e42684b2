use doc_tree::{Attribute, DocNode};
use num_traits::FromPrimitive;

use crate::{
    error::SettingsError,
    scenario_path::ScenarioPathResolver,
    settings::GameSettings,
    slot::{PerSlot, SlotIndex},
    types::GameFlags,
};

pub const GAME_SETTINGS_NODE: &str = "GameSettings";
pub const WIRE_ROOT_NODE: &str = "root";
/// Game name of documents written before matches had names.
pub const LEGACY_GAME_NAME: &str = "oldSavegame";

/// An attribute that documents of older versions may lack, and the
/// text it reads as in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTolerance {
    pub attribute: &'static str,
    pub default: &'static str,
}

/// The only attributes that are allowed to be missing, everything else is required.
pub const OPTIONAL_ATTRIBUTES: &[VersionTolerance] = &[
    VersionTolerance {
        attribute: "gameUUID",
        default: "",
    },
    VersionTolerance {
        attribute: "gameName",
        default: LEGACY_GAME_NAME,
    },
    VersionTolerance {
        attribute: "masterserver_admin_factionIndex",
        default: "-1",
    },
    VersionTolerance {
        attribute: "networkAllowNativeLanguageTechtree",
        default: "1",
    },
    VersionTolerance {
        attribute: "fallbackCpuMultiplier",
        default: "1",
    },
];

/// Per-slot children that may be missing (for some or all slots).
/// An absent child keeps the slot at its constructed default.
pub const OPTIONAL_SLOT_CHILDREN: &[&str] = &[
    "networkPlayerGameStatus",
    "networkPlayerUUID",
    "networkPlayerPlatform",
];

fn write_slots<T>(
    node: &mut DocNode,
    child: &str,
    attribute: &str,
    values: &PerSlot<T>,
    to_text: impl Fn(&T) -> String,
) {
    for value in values.iter() {
        node.add_child(child).add_attribute(attribute, to_text(value));
    }
}

fn parse_string(attr: Attribute<'_>) -> Result<String, SettingsError> {
    Ok(attr.value().to_string())
}

fn parse_int(attr: Attribute<'_>) -> Result<i32, SettingsError> {
    Ok(attr.int_value()?)
}

fn parse_enum<T: FromPrimitive>(attr: Attribute<'_>) -> Result<T, SettingsError> {
    T::from_i32(attr.int_value()?).ok_or_else(|| SettingsError::InvalidValue {
        attribute: attr.name().to_string(),
        value: attr.value().to_string(),
    })
}

struct SettingsReader<'a> {
    node: &'a DocNode,
}

impl<'a> SettingsReader<'a> {
    fn attr(&self, name: &'static str) -> Result<Attribute<'a>, SettingsError> {
        if self.node.has_attribute(name) {
            return Ok(self.node.get_attribute(name)?);
        }
        OPTIONAL_ATTRIBUTES
            .iter()
            .find(|tolerance| tolerance.attribute == name)
            .map(|tolerance| {
                log::debug!(
                    target: "game-settings",
                    "attribute {name} is missing, using \"{}\"",
                    tolerance.default
                );
                Attribute::new(tolerance.attribute, tolerance.default)
            })
            .ok_or_else(|| SettingsError::MissingRequiredField(name.to_string()))
    }

    fn string(&self, name: &'static str) -> Result<String, SettingsError> {
        parse_string(self.attr(name)?)
    }

    fn int(&self, name: &'static str) -> Result<i32, SettingsError> {
        parse_int(self.attr(name)?)
    }

    fn uint(&self, name: &'static str) -> Result<u32, SettingsError> {
        Ok(self.attr(name)?.uint_value()?)
    }

    fn bool(&self, name: &'static str) -> Result<bool, SettingsError> {
        Ok(self.attr(name)?.bool_value()?)
    }

    fn enum_value<T: FromPrimitive>(&self, name: &'static str) -> Result<T, SettingsError> {
        parse_enum(self.attr(name)?)
    }

    /// `None` if the child is optional and absent for this slot.
    fn slot_attr(
        &self,
        child: &str,
        attribute: &str,
        slot: SlotIndex,
    ) -> Result<Option<Attribute<'a>>, SettingsError> {
        if !self.node.has_child_at_index(child, slot.get()) {
            if OPTIONAL_SLOT_CHILDREN.contains(&child) {
                log::debug!(
                    target: "game-settings",
                    "{child} is missing for slot {slot}, keeping the default"
                );
                return Ok(None);
            }
            return Err(SettingsError::MissingRequiredField(format!(
                "{child}[{slot}]"
            )));
        }
        let node = self.node.get_child_at(child, slot.get())?;
        Ok(Some(node.get_attribute(attribute)?))
    }

    fn read_slots<T>(
        &self,
        child: &str,
        attribute: &str,
        target: &mut PerSlot<T>,
        parse: impl Fn(Attribute<'a>) -> Result<T, SettingsError>,
    ) -> Result<(), SettingsError> {
        for slot in SlotIndex::all() {
            if let Some(attr) = self.slot_attr(child, attribute, slot)? {
                target[slot] = parse(attr)?;
            }
        }
        Ok(())
    }

    fn faction_crc_list(&self) -> Result<Vec<(String, u32)>, SettingsError> {
        self.node
            .children_named("factionCRCList")
            .map(|item| -> Result<(String, u32), SettingsError> {
                Ok((
                    item.get_attribute("key")?.value().to_string(),
                    item.get_attribute("value")?.uint_value()?,
                ))
            })
            .collect()
    }
}

fn resolve_scenario_dir(scenario_dir: String, resolver: &dyn ScenarioPathResolver) -> String {
    if scenario_dir.is_empty() || resolver.exists(&scenario_dir) {
        return scenario_dir;
    }
    let local = resolver.find_valid_local(&scenario_dir);
    if local != scenario_dir {
        log::debug!(
            target: "game-settings",
            "scenario dir {scenario_dir} does not exist, using {local}"
        );
    } else {
        log::warn!(
            target: "game-settings",
            "scenario dir {scenario_dir} was not found locally"
        );
    }
    local
}

impl GameSettings {
    /// Appends a [`GAME_SETTINGS_NODE`] child holding the whole record to `root`.
    pub fn save_game(&self, root: &mut DocNode) {
        let node = root.add_child(GAME_SETTINGS_NODE);

        node.add_attribute("gameUUID", &self.game_uuid);
        node.add_attribute("gameName", &self.game_name);
        node.add_attribute("description", &self.description);
        node.add_attribute("map", &self.map);
        node.add_attribute("tileset", &self.tileset);
        node.add_attribute("tech", &self.tech);
        node.add_attribute("scenario", &self.scenario);
        node.add_attribute("scenarioDir", &self.scenario_dir);

        write_slots(
            node,
            "factionTypeNames",
            "name",
            &self.faction_type_names,
            String::clone,
        );
        write_slots(
            node,
            "networkPlayerNames",
            "name",
            &self.network_player_names,
            String::clone,
        );
        write_slots(
            node,
            "networkPlayerPlatform",
            "name",
            &self.network_player_platforms,
            String::clone,
        );
        write_slots(
            node,
            "networkPlayerStatuses",
            "status",
            &self.network_player_statuses,
            |&v| (v as i32).to_string(),
        );
        write_slots(
            node,
            "networkPlayerGameStatus",
            "game_status",
            &self.network_player_game_statuses,
            i32::to_string,
        );
        write_slots(
            node,
            "networkPlayerLanguages",
            "name",
            &self.network_player_languages,
            String::clone,
        );
        write_slots(
            node,
            "factionControls",
            "control",
            &self.faction_controls,
            |&v| (v as i32).to_string(),
        );
        write_slots(
            node,
            "resourceMultiplierIndex",
            "multiplier",
            &self.resource_multiplier_indices,
            i32::to_string,
        );

        node.add_attribute("thisFactionIndex", self.this_faction_index);
        node.add_attribute("factionCount", self.faction_count);

        write_slots(node, "teams", "team", &self.teams, i32::to_string);
        write_slots(
            node,
            "startLocationIndex",
            "location",
            &self.start_location_indices,
            i32::to_string,
        );
        write_slots(
            node,
            "networkPlayerUUID",
            "value",
            &self.network_player_uuids,
            String::clone,
        );

        node.add_attribute("mapFilterIndex", self.map_filter);
        node.add_attribute("defaultUnits", self.default_units as i32);
        node.add_attribute("defaultResources", self.default_resources as i32);
        node.add_attribute(
            "defaultVictoryConditions",
            self.default_victory_conditions as i32,
        );
        node.add_attribute("fogOfWar", self.fog_of_war as i32);
        node.add_attribute("allowObservers", self.allow_observers as i32);
        node.add_attribute(
            "enableObserverModeAtEndGame",
            self.enable_observer_mode_at_end_game as i32,
        );
        node.add_attribute(
            "enableServerControlledAI",
            self.enable_server_controlled_ai as i32,
        );
        node.add_attribute("networkFramePeriod", self.network_frame_period);
        node.add_attribute(
            "networkPauseGameForLaggedClients",
            self.network_pause_game_for_lagged_clients as i32,
        );
        node.add_attribute("pathFinderType", self.path_finder_type as i32);
        node.add_attribute("flagTypes1", self.flags.bits());
        node.add_attribute("mapCRC", self.map_crc);
        node.add_attribute("tilesetCRC", self.tileset_crc);
        node.add_attribute("techCRC", self.tech_crc);

        for (key, value) in &self.faction_crc_list {
            let item = node.add_child("factionCRCList");
            item.add_attribute("key", key);
            item.add_attribute("value", value);
        }

        node.add_attribute(
            "aiAcceptSwitchTeamPercentChance",
            self.ai_accept_switch_team_percent_chance,
        );
        node.add_attribute("masterserver_admin", self.masterserver_admin);
        node.add_attribute(
            "masterserver_admin_factionIndex",
            self.masterserver_admin_faction_index,
        );
        node.add_attribute(
            "networkAllowNativeLanguageTechtree",
            self.network_allow_native_language_techtree as i32,
        );
        node.add_attribute("fallbackCpuMultiplier", self.fallback_cpu_multiplier);
    }

    /// Reads the [`GAME_SETTINGS_NODE`] child of `root`.
    ///
    /// Fails on the first missing required field or malformed value, only
    /// [`OPTIONAL_ATTRIBUTES`] and [`OPTIONAL_SLOT_CHILDREN`] may be absent.
    pub fn load_game(
        root: &DocNode,
        resolver: &dyn ScenarioPathResolver,
    ) -> Result<Self, SettingsError> {
        let node = root
            .get_child(GAME_SETTINGS_NODE)
            .map_err(|_| SettingsError::MissingRequiredField(GAME_SETTINGS_NODE.to_string()))?;
        let reader = SettingsReader { node };
        let mut settings = Self::default();

        settings.game_uuid = reader.string("gameUUID")?;
        settings.game_name = reader.string("gameName")?;
        settings.description = reader.string("description")?;
        settings.map = reader.string("map")?;
        settings.tileset = reader.string("tileset")?;
        settings.tech = reader.string("tech")?;
        settings.scenario = reader.string("scenario")?;
        settings.scenario_dir = resolve_scenario_dir(reader.string("scenarioDir")?, resolver);

        reader.read_slots(
            "factionTypeNames",
            "name",
            &mut settings.faction_type_names,
            parse_string,
        )?;
        reader.read_slots(
            "networkPlayerNames",
            "name",
            &mut settings.network_player_names,
            parse_string,
        )?;
        reader.read_slots(
            "networkPlayerPlatform",
            "name",
            &mut settings.network_player_platforms,
            parse_string,
        )?;
        reader.read_slots(
            "networkPlayerStatuses",
            "status",
            &mut settings.network_player_statuses,
            parse_enum,
        )?;
        reader.read_slots(
            "networkPlayerGameStatus",
            "game_status",
            &mut settings.network_player_game_statuses,
            parse_int,
        )?;
        reader.read_slots(
            "networkPlayerLanguages",
            "name",
            &mut settings.network_player_languages,
            parse_string,
        )?;
        reader.read_slots(
            "factionControls",
            "control",
            &mut settings.faction_controls,
            parse_enum,
        )?;
        reader.read_slots(
            "resourceMultiplierIndex",
            "multiplier",
            &mut settings.resource_multiplier_indices,
            parse_int,
        )?;
        reader.read_slots(
            "networkPlayerUUID",
            "value",
            &mut settings.network_player_uuids,
            parse_string,
        )?;

        settings.this_faction_index = reader.int("thisFactionIndex")?;
        settings.faction_count = reader.int("factionCount")?;

        reader.read_slots("teams", "team", &mut settings.teams, parse_int)?;
        reader.read_slots(
            "startLocationIndex",
            "location",
            &mut settings.start_location_indices,
            parse_int,
        )?;

        settings.map_filter = reader.int("mapFilterIndex")?;
        settings.default_units = reader.bool("defaultUnits")?;
        settings.default_resources = reader.bool("defaultResources")?;
        settings.default_victory_conditions = reader.bool("defaultVictoryConditions")?;
        settings.fog_of_war = reader.bool("fogOfWar")?;
        settings.allow_observers = reader.bool("allowObservers")?;
        settings.enable_observer_mode_at_end_game =
            reader.bool("enableObserverModeAtEndGame")?;
        settings.enable_server_controlled_ai = reader.bool("enableServerControlledAI")?;
        settings.network_frame_period = reader.int("networkFramePeriod")?;
        settings.network_pause_game_for_lagged_clients =
            reader.bool("networkPauseGameForLaggedClients")?;
        settings.path_finder_type = reader.enum_value("pathFinderType")?;
        settings.flags = GameFlags::from_bits_retain(reader.uint("flagTypes1")?);
        settings.map_crc = reader.uint("mapCRC")?;
        settings.tileset_crc = reader.uint("tilesetCRC")?;
        settings.tech_crc = reader.uint("techCRC")?;
        settings.faction_crc_list = reader.faction_crc_list()?;

        settings.ai_accept_switch_team_percent_chance =
            reader.int("aiAcceptSwitchTeamPercentChance")?;
        settings.masterserver_admin = reader.int("masterserver_admin")?;
        settings.masterserver_admin_faction_index =
            reader.int("masterserver_admin_factionIndex")?;
        settings.network_allow_native_language_techtree =
            reader.bool("networkAllowNativeLanguageTechtree")?;
        settings.fallback_cpu_multiplier = reader.int("fallbackCpuMultiplier")?;

        Ok(settings)
    }

    /// The record as JSON encoded document, ready for the network transport.
    pub fn to_wire_json(&self) -> anyhow::Result<String> {
        let mut root = DocNode::new(WIRE_ROOT_NODE);
        self.save_game(&mut root);
        root.to_json_string()
    }

    pub fn from_wire_json(
        json_str: &str,
        resolver: &dyn ScenarioPathResolver,
    ) -> anyhow::Result<Self> {
        let root = DocNode::from_json_string(json_str)?;
        Ok(Self::load_game(&root, resolver)?)
    }
}
