use pinboard_core::{
    BoardService, HistoryConfig, MemoryStateStore, Pin, PinKind, PinPatch,
};
use std::time::Duration;

/// Window of zero: every tracked mutation lands as its own history entry.
fn stepwise_board() -> BoardService<MemoryStateStore> {
    BoardService::hydrate_with(
        MemoryStateStore::new(),
        HistoryConfig {
            coalesce_window: Duration::ZERO,
            ..HistoryConfig::default()
        },
    )
}

/// Window large enough that everything in one test coalesces into one burst.
fn coalescing_config() -> HistoryConfig {
    HistoryConfig {
        coalesce_window: Duration::from_secs(600),
        ..HistoryConfig::default()
    }
}

fn contents(board: &BoardService<MemoryStateStore>) -> Vec<String> {
    board.pins().iter().map(|pin| pin.content.clone()).collect()
}

#[test]
fn undo_steps_back_one_mutation_and_redo_returns() {
    let mut board = stepwise_board();
    board.add_pin(PinKind::Text, "one");
    board.add_pin(PinKind::Text, "two");
    board.add_pin(PinKind::Text, "three");
    let after_three = contents(&board);

    board.undo();
    assert_eq!(contents(&board), vec!["one", "two"]);

    board.redo();
    assert_eq!(contents(&board), after_three);
}

#[test]
fn undo_on_empty_past_is_noop() {
    let mut board = stepwise_board();
    board.undo();
    assert!(board.pins().is_empty());
    assert!(!board.can_undo());
}

#[test]
fn mutating_after_undo_clears_redo_candidates() {
    let mut board = stepwise_board();
    board.add_pin(PinKind::Text, "a");
    board.add_pin(PinKind::Text, "b");

    board.undo();
    board.add_pin(PinKind::Text, "c");
    let before_redo = contents(&board);

    board.redo();
    assert_eq!(contents(&board), before_redo);
    assert!(!board.can_redo());
}

#[test]
fn burst_of_updates_coalesces_into_one_entry() {
    // Seed one pin through hydration so the edit burst is the only history.
    let store = MemoryStateStore::new();
    {
        let mut seeder = BoardService::hydrate(store.clone());
        seeder.add_pin_at(PinKind::Text, "draft", 0.0, 0.0);
        seeder.close();
    }

    let mut board = BoardService::hydrate_with(store, coalescing_config());
    let id = board.pins()[0].id;
    let pre_burst: Vec<Pin> = board.pins().to_vec();

    board.update_pin(id, &PinPatch::content("draft v2"));
    board.update_pin(id, &PinPatch::moved(40.0, 50.0));
    board.update_pin(id, &PinPatch::resized(320.0, 180.0));

    board.undo();
    assert_eq!(board.pins(), pre_burst.as_slice());
    // The burst was a single entry, so nothing is left to undo.
    assert!(!board.can_undo());
}

#[test]
fn undo_redo_never_touch_the_viewport() {
    let mut board = stepwise_board();
    board.add_pin(PinKind::Text, "pinned");
    board.update_view(12.0, -7.5, 2.0);

    board.undo();
    let view = board.view();
    assert_eq!((view.x, view.y, view.scale), (12.0, -7.5, 2.0));

    board.update_view(-3.0, 4.0, 0.5);
    board.redo();
    let view = board.view();
    assert_eq!((view.x, view.y, view.scale), (-3.0, 4.0, 0.5));
}

#[test]
fn history_depth_is_bounded_and_drops_oldest() {
    let mut board = BoardService::hydrate_with(
        MemoryStateStore::new(),
        HistoryConfig {
            limit: 3,
            coalesce_window: Duration::ZERO,
        },
    );
    for index in 0..6 {
        board.add_pin(PinKind::Text, format!("pin {index}"));
    }

    let mut undo_steps = 0;
    while board.can_undo() {
        board.undo();
        undo_steps += 1;
    }

    assert_eq!(undo_steps, 3);
    // The oldest states were dropped; we bottom out at three pins, not zero.
    assert_eq!(board.pins().len(), 3);
}

#[test]
fn viewport_changes_are_never_undoable() {
    let mut board = stepwise_board();
    board.update_view(100.0, 200.0, 1.5);
    board.update_view(5.0, 6.0, 0.25);

    assert!(!board.can_undo());
}
