//! Canvas domain model.
//!
//! # Responsibility
//! - Define the canonical pin and viewport data structures.
//! - Keep tracked (pins) and untracked (view) state in separate types so the
//!   undo boundary is structural, not conventional.
//!
//! # Invariants
//! - Every pin is identified by a stable `PinId`.
//! - Collection values are never mutated in place; every edit produces a new
//!   `Pins` value.

pub mod pin;
pub mod view;
