//! Persisted viewport state.
//!
//! # Responsibility
//! - Hold the pan offset and zoom scale the session resumes with.
//!
//! # Invariants
//! - `scale` stays within `[MIN_SCALE, MAX_SCALE]`.
//! - The viewport is replaced atomically as a triple, never merged field by
//!   field, and never enters undo history.

use serde::{Deserialize, Serialize};

/// Lower zoom bound.
pub const MIN_SCALE: f64 = 0.1;
/// Upper zoom bound.
pub const MAX_SCALE: f64 = 4.0;

/// Pan offset and zoom scale of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Pan offset, unbounded.
    pub x: f64,
    pub y: f64,
    /// Zoom factor, clamped to `[0.1, 4.0]`.
    pub scale: f64,
}

impl ViewState {
    /// Builds a viewport, clamping `scale` into its valid range.
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x,
            y,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}
