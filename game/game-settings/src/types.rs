use bitflags::bitflags;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// Who or what controls a slot. The discriminant is the wire value.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromPrimitive,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum ControlType {
    #[default]
    Closed = 0,
    CpuEasy,
    Cpu,
    CpuUltra,
    CpuZeta,
    Network,
    NetworkUnassigned,
    Human,
    NetworkCpuEasy,
    NetworkCpu,
    NetworkCpuUltra,
    NetworkCpuZeta,
}

impl ControlType {
    /// A remote human occupies or may occupy the slot.
    pub fn is_network(self) -> bool {
        matches!(self, Self::Network | Self::NetworkUnassigned)
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    FromPrimitive,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum NetworkPlayerStatus {
    #[default]
    None = 0,
    PickSettings,
    BeRightBack,
    Ready,
    Disconnected,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    FromPrimitive,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum PathFinderType {
    #[default]
    Basic = 0,
    RoutePlanner,
}

/// Optional match behaviour, persisted as `flagTypes1`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameFlags(u32);
bitflags! {
    impl GameFlags: u32 {
        const SHOW_MAP_RESOURCES = (1 << 0);
        const ALLOW_TEAM_SWITCHING = (1 << 1);
        const ALLOW_IN_GAME_JOINING = (1 << 2);
        const NETWORK_SYNCH_CHECKS_VERBOSE = (1 << 3);
        const NETWORK_SYNCH_CHECKS = (1 << 4);
        const ALLOW_SHARED_TEAM_UNITS = (1 << 5);
        const ALLOW_SHARED_TEAM_RESOURCES = (1 << 6);
    }
}
