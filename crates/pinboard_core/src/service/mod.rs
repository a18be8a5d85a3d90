//! Use-case services exposed to interaction layers.
//!
//! # Responsibility
//! - Provide the single owned context object wrapping store, history,
//!   snapshots, viewport, and persistence.
//!
//! # Invariants
//! - Service APIs never surface storage failures; every degraded condition is
//!   a logged no-op or fallback.

pub mod board_service;
