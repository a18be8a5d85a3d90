//! Client-side session model for the document sync channel.
//!
//! # Responsibility
//! - Apply local edits immediately (read-your-writes) and produce the frame
//!   to transmit.
//! - Apply server pushes last-write-wins with no conflict resolution.
//! - Surface connection loss as a distinct observable status that never
//!   blocks local editing.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Message pushed by the server on the per-document channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Full document content sent once on connect.
    Init { content: String },
    /// A change made by another participant.
    Update { content: String },
}

/// Frame the client sends on a local edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEdit {
    pub content: String,
}

/// Observable connection state of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    Connecting,
    Connected,
    Disconnected,
}

impl Default for ChannelStatus {
    fn default() -> Self {
        Self::Connecting
    }
}

impl Display for ChannelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Per-document client session.
#[derive(Debug, Default)]
pub struct DocSession {
    content: String,
    status: ChannelStatus,
}

impl DocSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible document content, including unacknowledged local edits.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> ChannelStatus {
        self.status
    }

    /// Applies a local edit immediately and returns the frame to transmit.
    ///
    /// # Contract
    /// - The edit is reflected in `content()` before any server round-trip.
    /// - Editing works in every connection state; a lost connection never
    ///   blocks typing.
    pub fn local_edit(&mut self, content: impl Into<String>) -> ClientEdit {
        self.content = content.into();
        ClientEdit {
            content: self.content.clone(),
        }
    }

    /// Applies a server push: the received content overwrites local content
    /// with no merge (last-write-wins).
    pub fn apply_server(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::Init { content } | ServerMessage::Update { content } => {
                self.content = content;
            }
        }
        self.status = ChannelStatus::Connected;
    }

    /// Marks the channel as lost. Local editing stays available.
    pub fn connection_lost(&mut self) {
        self.status = ChannelStatus::Disconnected;
    }
}
