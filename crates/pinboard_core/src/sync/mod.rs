//! Live document-sync channel contract.
//!
//! # Responsibility
//! - Define the wire types and client-side session rules for the per-document
//!   duplex channel, independent of any transport.
//!
//! # Invariants
//! - Local edits are visible before any server acknowledgment.
//! - The most recent server message always wins; there is no merge.

pub mod doc_channel;
