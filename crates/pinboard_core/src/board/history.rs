//! Linear undo/redo history over pin collection values.
//!
//! # Responsibility
//! - Maintain bounded `past`/`future` stacks of pre-mutation states.
//! - Coalesce mutation bursts into single history entries via a debounce
//!   capture with explicit arm/reset/cancel/flush semantics.
//!
//! # Invariants
//! - Recording a mutation clears `future` (branch-discard rule).
//! - Exceeding the depth bound drops the oldest entry.
//! - Time enters only through explicit `Instant` arguments; there is no
//!   background timer to outlive the owning store.

use crate::model::pin::Pins;
use std::time::{Duration, Instant};

/// Default maximum depth of each history stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Default idle window within which consecutive mutations coalesce.
pub const DEFAULT_COALESCE_WINDOW: Duration = Duration::from_millis(400);

/// History tuning options.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum entries retained per stack.
    pub limit: usize,
    /// Idle window for burst coalescing.
    pub coalesce_window: Duration,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            coalesce_window: DEFAULT_COALESCE_WINDOW,
        }
    }
}

/// Armed debounce capture: the pre-burst state waiting for its idle timeout.
#[derive(Debug)]
struct PendingCapture {
    pre_burst: Pins,
    deadline: Instant,
}

/// Bounded undo/redo state machine over `{past, future}`.
pub struct History {
    past: Vec<Pins>,
    future: Vec<Pins>,
    limit: usize,
    coalesce_window: Duration,
    pending: Option<PendingCapture>,
}

impl History {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit: config.limit.max(1),
            coalesce_window: config.coalesce_window,
            pending: None,
        }
    }

    /// Registers one tracked mutation whose pre-mutation state was `pre_state`.
    ///
    /// # Contract
    /// - Always discards redo candidates.
    /// - First mutation of a burst arms the capture with `pre_state`; further
    ///   mutations before the deadline only extend the deadline, keeping the
    ///   original capture.
    /// - A mutation at or past the deadline flushes the expired capture to
    ///   `past` and arms a new burst.
    pub fn record(&mut self, pre_state: &Pins, now: Instant) {
        self.future.clear();

        match self.pending.take() {
            Some(mut pending) if now < pending.deadline => {
                pending.deadline = now + self.coalesce_window;
                self.pending = Some(pending);
            }
            expired => {
                if let Some(pending) = expired {
                    self.push_past(pending.pre_burst);
                }
                self.pending = Some(PendingCapture {
                    pre_burst: pre_state.clone(),
                    deadline: now + self.coalesce_window,
                });
            }
        }
    }

    /// Steps back one entry, returning the state to restore.
    ///
    /// The in-flight capture is flushed first so a fresh burst is undoable
    /// immediately. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &Pins) -> Option<Pins> {
        self.flush_pending();
        let previous = self.past.pop()?;
        self.push_future(current.clone());
        Some(previous)
    }

    /// Symmetric inverse of [`History::undo`]; `None` when `future` is empty.
    pub fn redo(&mut self, current: &Pins) -> Option<Pins> {
        self.flush_pending();
        let next = self.future.pop()?;
        self.push_past(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty() || self.pending.is_some()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Commits the armed capture to `past` regardless of its deadline.
    pub fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.push_past(pending.pre_burst);
        }
    }

    /// Disarms the capture without committing it.
    ///
    /// Called on teardown so a stale capture never fires after the owning
    /// store is gone.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn push_past(&mut self, entry: Pins) {
        if self.past.len() >= self.limit {
            self.past.remove(0);
        }
        self.past.push(entry);
    }

    fn push_future(&mut self, entry: Pins) {
        if self.future.len() >= self.limit {
            self.future.remove(0);
        }
        self.future.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::{History, HistoryConfig};
    use crate::model::pin::{Pin, PinKind, Pins};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn pins(contents: &[&str]) -> Pins {
        Arc::new(
            contents
                .iter()
                .map(|content| Pin::new(PinKind::Text, *content))
                .collect(),
        )
    }

    fn config(window_ms: u64) -> HistoryConfig {
        HistoryConfig {
            coalesce_window: Duration::from_millis(window_ms),
            ..HistoryConfig::default()
        }
    }

    #[test]
    fn burst_within_window_coalesces_to_one_entry() {
        let mut history = History::new(&config(400));
        let start = Instant::now();
        let pre_burst = pins(&["v0"]);

        history.record(&pre_burst, start);
        history.record(&pins(&["v1"]), start + Duration::from_millis(100));
        history.record(&pins(&["v2"]), start + Duration::from_millis(200));

        let current = pins(&["v3"]);
        let restored = history.undo(&current).unwrap();
        assert_eq!(restored, pre_burst);
        assert!(!history.can_undo());
    }

    #[test]
    fn mutation_past_deadline_starts_new_entry() {
        let mut history = History::new(&config(400));
        let start = Instant::now();
        let first_pre = pins(&["v0"]);
        let second_pre = pins(&["v1"]);

        history.record(&first_pre, start);
        history.record(&second_pre, start + Duration::from_millis(500));

        let current = pins(&["v2"]);
        assert_eq!(history.undo(&current).unwrap(), second_pre);
        assert_eq!(history.undo(&second_pre).unwrap(), first_pre);
        assert!(!history.can_undo());
    }

    #[test]
    fn recording_discards_redo_candidates() {
        let mut history = History::new(&config(0));
        let start = Instant::now();
        let v0 = pins(&["v0"]);
        let v1 = pins(&["v1"]);

        history.record(&v0, start);
        let restored = history.undo(&v1).unwrap();
        assert_eq!(restored, v0);
        assert!(history.can_redo());

        history.record(&v0, start + Duration::from_millis(1));
        assert!(!history.can_redo());
        assert!(history.redo(&v0).is_none());
    }

    #[test]
    fn depth_bound_drops_oldest_entry() {
        let mut history = History::new(&HistoryConfig {
            limit: 2,
            coalesce_window: Duration::ZERO,
        });
        let start = Instant::now();
        let v0 = pins(&["v0"]);
        let v1 = pins(&["v1"]);
        let v2 = pins(&["v2"]);

        history.record(&v0, start);
        history.record(&v1, start + Duration::from_millis(1));
        history.record(&v2, start + Duration::from_millis(2));

        let current = pins(&["v3"]);
        assert_eq!(history.undo(&current).unwrap(), v2);
        assert_eq!(history.undo(&v2).unwrap(), v1);
        // v0 was dropped by the bound.
        assert!(history.undo(&v1).is_none());
    }

    #[test]
    fn cancel_discards_armed_capture() {
        let mut history = History::new(&config(400));
        history.record(&pins(&["v0"]), Instant::now());
        history.cancel_pending();

        assert!(!history.can_undo());
        assert!(history.undo(&pins(&["v1"])).is_none());
    }

    #[test]
    fn empty_history_noops() {
        let mut history = History::new(&HistoryConfig::default());
        let current = pins(&[]);
        assert!(history.undo(&current).is_none());
        assert!(history.redo(&current).is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
