//! Collection operations over the ordered pin sequence.
//!
//! # Responsibility
//! - Produce a fresh `Pins` value for every successful mutation.
//! - Keep insertion order stable; order carries no meaning beyond display.
//!
//! # Invariants
//! - A previously returned `Pins` value is never mutated afterwards, so
//!   history and snapshots can retain it by reference.
//! - `id` stays unique within the collection at every observable point.

use crate::model::pin::{Pin, PinId, PinPatch, Pins};
use std::sync::Arc;

/// Appends a pin to the end of the collection.
pub fn add_pin(pins: &Pins, pin: Pin) -> Pins {
    let mut next = Vec::with_capacity(pins.len() + 1);
    next.extend(pins.iter().cloned());
    next.push(pin);
    Arc::new(next)
}

/// Patch-merges the mutable fields of the pin with `id`.
///
/// Returns `None` when no pin carries `id`; the caller treats that as a
/// silent no-op so stale references never crash anything.
pub fn update_pin(pins: &Pins, id: PinId, patch: &PinPatch) -> Option<Pins> {
    if !pins.iter().any(|pin| pin.id == id) {
        return None;
    }
    let next = pins
        .iter()
        .map(|pin| {
            if pin.id == id {
                pin.with_patch(patch)
            } else {
                pin.clone()
            }
        })
        .collect::<Vec<_>>();
    Some(Arc::new(next))
}

/// Filters the pin with `id` out of the collection.
///
/// Returns `None` when no pin carries `id`.
pub fn remove_pin(pins: &Pins, id: PinId) -> Option<Pins> {
    if !pins.iter().any(|pin| pin.id == id) {
        return None;
    }
    let next = pins
        .iter()
        .filter(|pin| pin.id != id)
        .cloned()
        .collect::<Vec<_>>();
    Some(Arc::new(next))
}
