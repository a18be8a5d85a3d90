//! Pin domain model.
//!
//! # Responsibility
//! - Define the canonical canvas object record and its patch shape.
//! - Provide construction defaults per pin kind.
//!
//! # Invariants
//! - `id` is stable, unique within a collection, and never reused.
//! - `kind` is fixed for the lifetime of the pin.
//! - Patching never touches `id` or `kind`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Stable identifier for every canvas object.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PinId = Uuid;

/// Immutable collection value holding one observable state of the board.
///
/// Mutations build a fresh `Vec` and wrap it in a new `Arc`, so history and
/// snapshots can hold past values by reference without copy cost.
pub type Pins = Arc<Vec<Pin>>;

/// Background palette for text pins. Image pins use [`TRANSPARENT_COLOR`].
pub const TEXT_COLOR_PALETTE: [&str; 5] =
    ["#feff9c", "#fff740", "#7afcff", "#ff65a3", "#e0e0e0"];

/// Sentinel color for pins that render no background.
pub const TRANSPARENT_COLOR: &str = "transparent";

const DEFAULT_POSITION: f64 = 100.0;
const TEXT_PIN_DEFAULT_SIZE: f64 = 200.0;
const IMAGE_PIN_DEFAULT_SIZE: f64 = 300.0;

/// Category of a canvas object, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    /// Free-text sticky note.
    Text,
    /// Image reference (data URI or URL) in `content`.
    Image,
}

/// Canonical record for one movable, resizable canvas object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Stable global ID, assigned at creation and never changed.
    pub id: PinId,
    /// Serialized as `kind`; immutable after creation.
    pub kind: PinKind,
    /// Continuous canvas position.
    pub x: f64,
    pub y: f64,
    /// Opaque payload: free text for text pins, image reference for image pins.
    pub content: String,
    /// Positive dimensions. Minimum bounds are a caller concern.
    pub width: f64,
    pub height: f64,
    /// Background color. Always [`TRANSPARENT_COLOR`] for image pins.
    pub color: String,
}

impl Pin {
    /// Creates a pin at the default canvas position.
    pub fn new(kind: PinKind, content: impl Into<String>) -> Self {
        Self::new_at(kind, content, DEFAULT_POSITION, DEFAULT_POSITION)
    }

    /// Creates a pin at an explicit position.
    ///
    /// # Contract
    /// - Text pins get 200x200 defaults and a palette color derived from the
    ///   generated id.
    /// - Image pins get 300x300 defaults and the transparent sentinel.
    pub fn new_at(kind: PinKind, content: impl Into<String>, x: f64, y: f64) -> Self {
        let id = Uuid::new_v4();
        let size = match kind {
            PinKind::Text => TEXT_PIN_DEFAULT_SIZE,
            PinKind::Image => IMAGE_PIN_DEFAULT_SIZE,
        };
        Self {
            id,
            kind,
            x,
            y,
            content: content.into(),
            width: size,
            height: size,
            color: default_color(kind, id),
        }
    }

    /// Returns a copy with the patched fields replaced.
    ///
    /// Absent patch fields keep their current value; `id` and `kind` are
    /// never touched.
    pub fn with_patch(&self, patch: &PinPatch) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            content: patch.content.clone().unwrap_or_else(|| self.content.clone()),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
        }
    }
}

/// Field-level patch for the mutable parts of a [`Pin`].
///
/// `None` means "leave unchanged", never "set to empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub content: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
}

impl PinPatch {
    /// Patch moving a pin to a new position.
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch resizing a pin.
    pub fn resized(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Patch replacing the opaque content string.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

fn default_color(kind: PinKind, id: PinId) -> String {
    match kind {
        PinKind::Image => TRANSPARENT_COLOR.to_string(),
        // Deterministic palette pick keyed by the fresh id; any stable choice
        // from the fixed palette is acceptable.
        PinKind::Text => {
            let index = (id.as_u128() % TEXT_COLOR_PALETTE.len() as u128) as usize;
            TEXT_COLOR_PALETTE[index].to_string()
        }
    }
}
