use shelfboard::book::{Book, Status};
use shelfboard::tui::board::BoardState;

fn board_with(books: &[(&str, Status)]) -> BoardState {
    let mut board = BoardState::new();
    for (title, status) in books {
        board.accept_draft(Book::new(*status, *title, ""));
    }
    board
}

// === Status cycle ===

#[test]
fn test_status_cycle_is_exactly_three_states() {
    assert_eq!(Status::Pending.next(), Status::InProgress);
    assert_eq!(Status::InProgress.next(), Status::Done);
    assert_eq!(Status::Done.next(), Status::Pending);

    // Three applications return to the start
    for status in Status::all() {
        assert_eq!(status.next().next().next(), *status);
    }
}

#[test]
fn test_status_prev_is_inverse_of_next() {
    for status in Status::all() {
        assert_eq!(status.next().prev(), *status);
        assert_eq!(status.prev().next(), *status);
    }
}

// === Focus navigation ===

#[test]
fn test_focus_starts_on_pending() {
    let board = BoardState::new();
    assert_eq!(board.focus, Status::Pending);
}

#[test]
fn test_focus_next_wraps_done_to_pending() {
    let mut board = BoardState::new();
    board.focus_next();
    assert_eq!(board.focus, Status::InProgress);
    board.focus_next();
    assert_eq!(board.focus, Status::Done);
    board.focus_next();
    assert_eq!(board.focus, Status::Pending);
}

#[test]
fn test_focus_prev_wraps_pending_to_done() {
    let mut board = BoardState::new();
    board.focus_prev();
    assert_eq!(board.focus, Status::Done);
    board.focus_prev();
    assert_eq!(board.focus, Status::InProgress);
    board.focus_prev();
    assert_eq!(board.focus, Status::Pending);
}

#[test]
fn test_navigation_is_cyclic_group_action() {
    // N steps forward land on start advanced by N mod 3, regardless of
    // column contents; a matching number of backward steps undoes them.
    let mut board = BoardState::new();
    let start = board.focus;

    for n in 1..=12 {
        board.focus_next();
        let mut expected = start;
        for _ in 0..(n % 3) {
            expected = expected.next();
        }
        assert_eq!(board.focus, expected);
    }
    for _ in 0..12 {
        board.focus_prev();
    }
    assert_eq!(board.focus, start);
}

// === Selection ===

#[test]
fn test_selected_book_empty_column() {
    let board = BoardState::new();
    assert!(board.selected_book().is_none());
}

#[test]
fn test_select_moves_are_clamped() {
    let mut board = board_with(&[
        ("A", Status::Pending),
        ("B", Status::Pending),
        ("C", Status::Pending),
    ]);

    board.select_prev();
    assert_eq!(board.selected_row(), 0);

    board.select_next();
    board.select_next();
    assert_eq!(board.selected_row(), 2);
    board.select_next();
    assert_eq!(board.selected_row(), 2);

    assert_eq!(board.selected_book().unwrap().title, "C");
}

#[test]
fn test_focus_change_clamps_row_to_new_column() {
    let mut board = board_with(&[
        ("A", Status::Pending),
        ("B", Status::Pending),
        ("C", Status::Pending),
        ("W", Status::InProgress),
    ]);
    board.select_next();
    board.select_next();
    assert_eq!(board.selected_row(), 2);

    board.focus_next(); // InProgress has a single book
    assert_eq!(board.selected_row(), 0);
    assert_eq!(board.selected_book().unwrap().title, "W");
}

// === Advance ===

#[test]
fn test_advance_moves_book_to_next_column() {
    let mut board = board_with(&[
        ("X", Status::Pending),
        ("Y", Status::Pending),
        ("Z", Status::Pending),
        ("W", Status::InProgress),
        ("V", Status::Done),
    ]);

    board.advance_selected(); // X selected at row 0

    let pending: Vec<_> = board
        .books_in(Status::Pending)
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    let in_progress: Vec<_> = board
        .books_in(Status::InProgress)
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    let done: Vec<_> = board
        .books_in(Status::Done)
        .iter()
        .map(|b| b.title.as_str())
        .collect();

    assert_eq!(pending, ["Y", "Z"]);
    assert_eq!(in_progress, ["W", "X"]);
    assert_eq!(done, ["V"]);
    assert_eq!(board.books_in(Status::InProgress)[1].status, Status::InProgress);
}

#[test]
fn test_advance_preserves_total_count() {
    let mut board = board_with(&[
        ("A", Status::Pending),
        ("B", Status::InProgress),
        ("C", Status::Done),
    ]);
    let total = board.len();

    for _ in 0..7 {
        board.advance_selected();
        assert_eq!(board.len(), total);
    }
}

#[test]
fn test_advance_on_empty_column_is_noop() {
    let mut board = board_with(&[("A", Status::Pending)]);
    board.focus_next(); // InProgress, empty

    board.advance_selected();

    assert_eq!(board.focus, Status::InProgress);
    assert_eq!(board.books_in(Status::Pending).len(), 1);
    assert!(board.books_in(Status::InProgress).is_empty());
    assert!(board.books_in(Status::Done).is_empty());
}

#[test]
fn test_three_advances_return_book_to_original_column() {
    let mut board = board_with(&[("Solo", Status::Pending)]);

    // Follow the book around the cycle, refocusing its column each time
    for _ in 0..3 {
        board.advance_selected();
        board.focus_next();
    }

    assert_eq!(board.focus, Status::Pending);
    let book = board.selected_book().unwrap();
    assert_eq!(book.title, "Solo");
    assert_eq!(book.status, Status::Pending);
}

#[test]
fn test_advance_appends_to_end_of_destination() {
    let mut board = board_with(&[
        ("A", Status::Pending),
        ("W1", Status::InProgress),
        ("W2", Status::InProgress),
    ]);

    board.advance_selected();

    let titles: Vec<_> = board
        .books_in(Status::InProgress)
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, ["W1", "W2", "A"]);
}

// === accept_draft ===

#[test]
fn test_accept_draft_appends_to_matching_column() {
    let mut board = board_with(&[("A", Status::Done)]);
    let before = board.len();

    board.accept_draft(Book::new(Status::Done, "B", "desc"));

    assert_eq!(board.len(), before + 1);
    let titles: Vec<_> = board
        .books_in(Status::Done)
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, ["A", "B"]);
}

#[test]
fn test_accept_draft_ignores_board_focus() {
    let mut board = BoardState::new();
    board.focus_next(); // focus InProgress

    board.accept_draft(Book::new(Status::Done, "B", ""));

    assert!(board.books_in(Status::InProgress).is_empty());
    assert_eq!(board.books_in(Status::Done).len(), 1);
}

// === Seed data ===

#[test]
fn test_seeded_board_shape() {
    let board = BoardState::seeded();

    assert_eq!(board.books_in(Status::Pending).len(), 3);
    assert_eq!(board.books_in(Status::InProgress).len(), 1);
    assert_eq!(board.books_in(Status::Done).len(), 1);

    // Every seeded book agrees with its column
    for status in Status::all() {
        for book in board.books_in(*status) {
            assert_eq!(book.status, *status);
            assert!(!book.title.is_empty());
        }
    }
}
