use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use crate::error::SettingsError;

/// How many participants a single match can have.
pub const MAX_PLAYERS: usize = 8;

/// A validated slot (faction) index, always in `0..MAX_PLAYERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// `context` names the caller and ends up in the error on failure.
    pub fn new(index: i32, context: &'static str) -> Result<Self, SettingsError> {
        usize::try_from(index)
            .ok()
            .filter(|&index| index < MAX_PLAYERS)
            .map(Self)
            .ok_or(SettingsError::OutOfRangeSlot { index, context })
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..MAX_PLAYERS).map(Self)
    }
}

impl Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<SlotIndex> for i32 {
    fn from(value: SlotIndex) -> Self {
        // MAX_PLAYERS is tiny, never truncates
        value.0 as i32
    }
}

/// The slot a faction read refers to.
///
/// A server without a seated player addresses itself with the index `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactionSlot {
    Headless,
    Slot(SlotIndex),
}

impl FactionSlot {
    pub const HEADLESS_INDEX: i32 = -1;

    pub fn new(index: i32, context: &'static str) -> Result<Self, SettingsError> {
        if index == Self::HEADLESS_INDEX {
            Ok(Self::Headless)
        } else {
            SlotIndex::new(index, context).map(Self::Slot)
        }
    }
}

/// One value per slot, addressable only through [`SlotIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerSlot<T>([T; MAX_PLAYERS]);

impl<T> PerSlot<T> {
    pub fn from_fn(mut f: impl FnMut(SlotIndex) -> T) -> Self {
        Self(std::array::from_fn(|i| f(SlotIndex(i))))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn iter_slots(&self) -> impl Iterator<Item = (SlotIndex, &T)> {
        self.0.iter().enumerate().map(|(i, v)| (SlotIndex(i), v))
    }
}

impl<T: Clone> PerSlot<T> {
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T: Default> Default for PerSlot<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<SlotIndex> for PerSlot<T> {
    type Output = T;

    fn index(&self, index: SlotIndex) -> &Self::Output {
        &self.0[index.0]
    }
}

impl<T> IndexMut<SlotIndex> for PerSlot<T> {
    fn index_mut(&mut self, index: SlotIndex) -> &mut Self::Output {
        &mut self.0[index.0]
    }
}
