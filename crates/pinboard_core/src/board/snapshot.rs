//! Named full-state checkpoints of the pin collection.
//!
//! # Responsibility
//! - Store independent copies of the pin collection keyed by name.
//! - Keep checkpoints outside the linear undo history.
//!
//! # Invariants
//! - A stored checkpoint never changes after `save`, whatever happens to the
//!   live collection (collection values are immutable once created).
//! - Checkpoints are never pruned or expired automatically.

use crate::model::pin::{Pin, Pins};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named checkpoint dictionary.
#[derive(Debug, Default)]
pub struct Snapshots {
    entries: BTreeMap<String, Pins>,
}

impl Snapshots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a checkpoint under `name`, silently overwriting an existing one.
    pub fn save(&mut self, name: impl Into<String>, pins: &Pins) {
        self.entries.insert(name.into(), pins.clone());
    }

    /// Returns the checkpoint stored under `name`, if any.
    ///
    /// Loading is non-destructive; the returned value can be restored any
    /// number of times.
    pub fn get(&self, name: &str) -> Option<Pins> {
        self.entries.get(name).cloned()
    }

    /// Removes the checkpoint under `name`. Returns whether one existed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns checkpoint names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Converts to the durable-schema shape (owned pin vectors per name).
    pub fn to_persisted(&self) -> BTreeMap<String, Vec<Pin>> {
        self.entries
            .iter()
            .map(|(name, pins)| (name.clone(), (**pins).clone()))
            .collect()
    }

    /// Rebuilds the dictionary from the durable-schema shape.
    pub fn from_persisted(entries: BTreeMap<String, Vec<Pin>>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, pins)| (name, Arc::new(pins)))
                .collect(),
        }
    }
}
