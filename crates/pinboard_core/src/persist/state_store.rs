//! State store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Serialize the durable subset to one blob under one fixed namespace key.
//! - Rehydrate that blob on startup.
//!
//! # Invariants
//! - Exactly `{pins, snapshots, view}` is written; `past`/`future` never are.
//! - A missing key deserializes to `None`, not an error.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::pin::Pin;
use crate::model::view::ViewState;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::rc::Rc;

/// Fixed namespace key the board blob lives under.
pub const STATE_KEY: &str = "board";

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence error for state blob storage and (de)serialization.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Serde(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "invalid board state blob: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Durable subset of the engine state.
///
/// Matches the external blob schema: `{"pins": [...], "snapshots": {...},
/// "view": {...}}`. Every field defaults independently so partially formed
/// blobs still hydrate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub snapshots: BTreeMap<String, Vec<Pin>>,
    #[serde(default)]
    pub view: ViewState,
}

/// Store interface for the durable board blob.
pub trait StateStore {
    /// Reads the blob under the namespace key. `None` when no blob exists.
    fn load(&self) -> PersistResult<Option<BoardState>>;

    /// Writes the blob under the namespace key, replacing any previous value.
    fn save(&self, state: &BoardState) -> PersistResult<()>;
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn load(&self) -> PersistResult<Option<BoardState>> {
        (**self).load()
    }

    fn save(&self, state: &BoardState) -> PersistResult<()> {
        (**self).save(state)
    }
}

/// SQLite-backed state store.
pub struct SqliteStateStore {
    conn: Connection,
}

impl SqliteStateStore {
    /// Opens (or creates) the durable store at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a store that lives only as long as the connection.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl StateStore for SqliteStateStore {
    fn load(&self) -> PersistResult<Option<BoardState>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM board_state WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match blob {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &BoardState) -> PersistResult<()> {
        let json = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO board_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![STATE_KEY, json],
        )?;
        Ok(())
    }
}

/// In-memory state store.
///
/// Backs degraded sessions when durable storage is unavailable, and doubles
/// as an inspectable test store: clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    state: Rc<RefCell<Option<BoardState>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the last saved blob, if any.
    pub fn stored(&self) -> Option<BoardState> {
        self.state.borrow().clone()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> PersistResult<Option<BoardState>> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &BoardState) -> PersistResult<()> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

/// Opens the durable store at `path`, degrading to a session-only in-memory
/// store when storage is unavailable.
///
/// The rest of the engine is unaffected by the degradation; only durability
/// across restarts is lost.
pub fn open_state_store(path: impl AsRef<Path>) -> Box<dyn StateStore> {
    match SqliteStateStore::open(path.as_ref()) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(
                "event=state_store_open module=persist status=degraded path={} error={err}",
                path.as_ref().display()
            );
            Box::new(MemoryStateStore::new())
        }
    }
}
