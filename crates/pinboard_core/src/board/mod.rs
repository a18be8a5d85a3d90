//! Board state holders: object store operations, undo history, snapshots.
//!
//! # Responsibility
//! - Provide value-producing collection operations over pins.
//! - Track linear undo/redo with burst coalescing.
//! - Manage named, independent full-state checkpoints.
//!
//! # Invariants
//! - Only pin collection values flow through history; viewport and snapshot
//!   bookkeeping are structurally outside it.

pub mod history;
pub mod snapshot;
pub mod store;
