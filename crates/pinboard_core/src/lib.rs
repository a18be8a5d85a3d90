//! Core state/history/persistence engine for the pin board canvas.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod sync;

pub use board::history::{
    History, HistoryConfig, DEFAULT_COALESCE_WINDOW, DEFAULT_HISTORY_LIMIT,
};
pub use board::snapshot::Snapshots;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::pin::{
    Pin, PinId, PinKind, PinPatch, Pins, TEXT_COLOR_PALETTE, TRANSPARENT_COLOR,
};
pub use model::view::{ViewState, MAX_SCALE, MIN_SCALE};
pub use persist::{
    open_state_store, BoardState, MemoryStateStore, PersistError, PersistResult,
    SqliteStateStore, StateStore, STATE_KEY,
};
pub use service::board_service::BoardService;
pub use sync::doc_channel::{ChannelStatus, ClientEdit, DocSession, ServerMessage};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
