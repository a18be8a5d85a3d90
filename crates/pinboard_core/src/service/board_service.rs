//! Board engine context: the owned facade over all state holders.
//!
//! # Responsibility
//! - Route every interaction-layer call to the right state holder.
//! - Capture pre-mutation state for history on tracked pin mutations only.
//! - Write the durable subset after every observable change, best-effort.
//!
//! # Invariants
//! - History always starts empty after hydrate; it is never persisted.
//! - Viewport and snapshot bookkeeping never enter undo history.
//! - No method ever returns or panics with a hard failure.

use crate::board::history::{History, HistoryConfig};
use crate::board::snapshot::Snapshots;
use crate::board::store;
use crate::model::pin::{Pin, PinId, PinKind, PinPatch, Pins};
use crate::model::view::ViewState;
use crate::persist::{BoardState, StateStore};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

/// Owned engine context. Tests instantiate independent, isolated instances;
/// applications typically hold exactly one per board document.
pub struct BoardService<S: StateStore> {
    pins: Pins,
    view: ViewState,
    snapshots: Snapshots,
    history: History,
    store: S,
}

impl<S: StateStore> BoardService<S> {
    /// Hydrates a board from the store with default history tuning.
    pub fn hydrate(store: S) -> Self {
        Self::hydrate_with(store, HistoryConfig::default())
    }

    /// Hydrates a board from the store.
    ///
    /// # Contract
    /// - Storage is read exactly once.
    /// - A missing key or corrupt blob falls back to the empty default state
    ///   and never raises.
    /// - Undo history starts empty regardless of what was read.
    pub fn hydrate_with(store: S, config: HistoryConfig) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                info!(
                    "event=board_hydrate module=board status=ok pins={} snapshots={}",
                    state.pins.len(),
                    state.snapshots.len()
                );
                state
            }
            Ok(None) => {
                info!("event=board_hydrate module=board status=empty");
                BoardState::default()
            }
            Err(err) => {
                warn!("event=board_hydrate module=board status=fallback error={err}");
                BoardState::default()
            }
        };

        Self {
            pins: Arc::new(state.pins),
            view: state.view,
            snapshots: Snapshots::from_persisted(state.snapshots),
            history: History::new(&config),
            store,
        }
    }

    /// Current ordered pin collection.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Current viewport.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Sorted names of saved checkpoints.
    pub fn snapshot_names(&self) -> Vec<&str> {
        self.snapshots.names()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Creates a pin at the default position. Returns the fresh id.
    pub fn add_pin(&mut self, kind: PinKind, content: impl Into<String>) -> PinId {
        let pin = Pin::new(kind, content);
        let id = pin.id;
        let next = store::add_pin(&self.pins, pin);
        self.commit_tracked(next);
        id
    }

    /// Creates a pin at an explicit position. Returns the fresh id.
    pub fn add_pin_at(
        &mut self,
        kind: PinKind,
        content: impl Into<String>,
        x: f64,
        y: f64,
    ) -> PinId {
        let pin = Pin::new_at(kind, content, x, y);
        let id = pin.id;
        let next = store::add_pin(&self.pins, pin);
        self.commit_tracked(next);
        id
    }

    /// Patch-merges the mutable fields of the pin with `id`.
    ///
    /// Unknown ids are a silent no-op so stale client references never crash.
    pub fn update_pin(&mut self, id: PinId, patch: &PinPatch) {
        match store::update_pin(&self.pins, id, patch) {
            Some(next) => self.commit_tracked(next),
            None => debug!(
                "event=pin_update module=board status=skipped reason=unknown_id pin_id={id}"
            ),
        }
    }

    /// Removes the pin with `id`; no-op when absent.
    pub fn remove_pin(&mut self, id: PinId) {
        match store::remove_pin(&self.pins, id) {
            Some(next) => self.commit_tracked(next),
            None => debug!(
                "event=pin_remove module=board status=skipped reason=unknown_id pin_id={id}"
            ),
        }
    }

    /// Atomically replaces the viewport triple.
    ///
    /// Untracked: the viewport never enters undo history. Intended to be
    /// called once per gesture, at release; that convention is on the caller.
    pub fn update_view(&mut self, x: f64, y: f64, scale: f64) {
        self.view = ViewState::new(x, y, scale);
        self.persist();
    }

    /// Saves (or silently overwrites) a named checkpoint of current pins.
    pub fn save_snapshot(&mut self, name: impl Into<String>) {
        self.snapshots.save(name, &self.pins);
        self.persist();
    }

    /// Restores a named checkpoint into the live collection.
    ///
    /// Tracked: restoring mutates pins and is therefore undoable. Unknown
    /// names are a no-op.
    pub fn load_snapshot(&mut self, name: &str) {
        match self.snapshots.get(name) {
            Some(restored) => self.commit_tracked(restored),
            None => debug!(
                "event=snapshot_load module=board status=skipped reason=unknown_name name={name}"
            ),
        }
    }

    /// Deletes a named checkpoint; no-op when absent.
    pub fn delete_snapshot(&mut self, name: &str) {
        if self.snapshots.delete(name) {
            self.persist();
        }
    }

    /// Steps the pin collection back one history entry; no-op when `past` is
    /// empty. Never touches the viewport or checkpoints.
    pub fn undo(&mut self) {
        let current = self.pins.clone();
        if let Some(previous) = self.history.undo(&current) {
            self.pins = previous;
            self.persist();
        }
    }

    /// Steps the pin collection forward one history entry; no-op when
    /// `future` is empty.
    pub fn redo(&mut self) {
        let current = self.pins.clone();
        if let Some(next) = self.history.redo(&current) {
            self.pins = next;
            self.persist();
        }
    }

    /// Tears the context down: disarms the coalescing capture and performs a
    /// final best-effort write.
    pub fn close(mut self) {
        self.history.cancel_pending();
        self.persist();
        info!("event=board_close module=board status=ok");
    }

    fn commit_tracked(&mut self, next: Pins) {
        let pre_state = std::mem::replace(&mut self.pins, next);
        self.history.record(&pre_state, Instant::now());
        self.persist();
    }

    /// Serializes `{pins, snapshots, view}` and writes fire-and-forget; a
    /// failed write is dropped and in-memory state stays authoritative.
    fn persist(&self) {
        let state = BoardState {
            pins: (*self.pins).clone(),
            snapshots: self.snapshots.to_persisted(),
            view: self.view,
        };
        if let Err(err) = self.store.save(&state) {
            warn!("event=state_save module=board status=dropped error={err}");
        }
    }
}
