//! Durable persistence for the board's serializable subset.
//!
//! # Responsibility
//! - Define the durable `{pins, snapshots, view}` schema and the store seam.
//! - Detect unavailable storage and degrade to a session-only store.
//!
//! # Invariants
//! - Undo history is never part of the durable schema.
//! - Nothing in this module surfaces hard failures to the engine; callers
//!   swallow errors and keep in-memory state authoritative.

pub mod state_store;

pub use state_store::{
    open_state_store, BoardState, MemoryStateStore, PersistError, PersistResult,
    SqliteStateStore, StateStore, STATE_KEY,
};
