//! In-memory catalogue: groups of entries keyed by their leading character.
//!
//! A [`Registry`] is built fresh for every run, filled by the parsers and
//! consumed by the renderer.

pub mod orientation;
pub mod parser;
pub mod render;

use std::collections::BTreeMap;

use crate::types::{Entry, GroupKey};

/// Entries sharing one group key, rendered under one section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    key: GroupKey,
    entries: Vec<Entry>,
}

impl Group {
    /// Create an empty group for `key`.
    pub const fn new(key: GroupKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    /// The section key.
    pub const fn key(&self) -> GroupKey {
        self.key
    }

    /// Append an entry in discovery order.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Entries in their current order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Sort entries by their full field list.
    pub fn sort(&mut self) {
        self.entries.sort();
    }

    /// Number of entries in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the group has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key to group mapping for one run.
///
/// Groups are stored in render order, so iteration yields letters, then
/// digits, then everything else.
#[derive(Debug, Default)]
pub struct Registry {
    groups: BTreeMap<GroupKey, Group>,
}

impl Registry {
    /// Create a new empty registry.
    pub const fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Get the group for a key, if it exists.
    pub fn get(&self, key: GroupKey) -> Option<&Group> {
        self.groups.get(&key)
    }

    /// Get a mutable reference to the group for a key, creating it if needed.
    pub fn group_mut(&mut self, key: GroupKey) -> &mut Group {
        self.groups.entry(key).or_insert_with(|| Group::new(key))
    }

    /// Append an entry under its own derived key.
    ///
    /// Returns the key used, or `None` when the entry has no primary field.
    pub fn insert(&mut self, entry: Entry) -> Option<GroupKey> {
        let key = entry.group_key()?;
        self.group_mut(key).push(entry);
        Some(key)
    }

    /// Group keys in render order.
    pub fn keys(&self) -> impl Iterator<Item = GroupKey> + '_ {
        self.groups.keys().copied()
    }

    /// Groups in render order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Sort every group's entries in place.
    pub fn sort_entries(&mut self) {
        for group in self.groups.values_mut() {
            group.sort();
        }
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Group::len).sum()
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
