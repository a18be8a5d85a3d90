//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pinboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pinboard_core::{BoardService, MemoryStateStore, PinKind};

fn main() {
    println!("pinboard_core version={}", pinboard_core::core_version());

    let mut board = BoardService::hydrate(MemoryStateStore::new());
    board.add_pin(PinKind::Text, "smoke");
    println!("pinboard_core smoke pins={}", board.pins().len());
}
