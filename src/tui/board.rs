use crate::book::{Book, Status};

/// State for the kanban board view: three columns indexed by status, a focus
/// pointer naming the column receiving input, and one selection cursor per
/// column.
#[derive(Debug)]
pub struct BoardState {
    columns: [Vec<Book>; 3],
    pub focus: Status,
    selected: [usize; 3],
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            columns: [vec![], vec![], vec![]],
            focus: Status::Pending,
            selected: [0, 0, 0],
        }
    }

    /// Board populated with the startup catalog
    pub fn seeded() -> Self {
        let mut board = Self::new();
        board.columns[Status::Pending.index()] = vec![
            Book::new(Status::Pending, "The Left Hand of Darkness", "Ursula K. Le Guin"),
            Book::new(Status::Pending, "Piranesi", "Susanna Clarke"),
            Book::new(Status::Pending, "The Dispossessed", "Ursula K. Le Guin"),
        ];
        board.columns[Status::InProgress.index()] = vec![Book::new(
            Status::InProgress,
            "A Wizard of Earthsea",
            "Ursula K. Le Guin",
        )];
        board.columns[Status::Done.index()] = vec![Book::new(
            Status::Done,
            "The Fifth Season",
            "N. K. Jemisin",
        )];
        board
    }

    /// Books in the column for a status
    pub fn books_in(&self, status: Status) -> &[Book] {
        &self.columns[status.index()]
    }

    /// Total number of books across all columns
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Selection cursor of the focused column
    pub fn selected_row(&self) -> usize {
        self.selected[self.focus.index()]
    }

    /// Get the currently selected book in the focused column, if any
    pub fn selected_book(&self) -> Option<&Book> {
        self.columns[self.focus.index()].get(self.selected_row())
    }

    /// Move focus to the previous column, wrapping Pending -> Done
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.clamp_row();
    }

    /// Move focus to the next column, wrapping Done -> Pending
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.clamp_row();
    }

    /// Move the selection cursor up within the focused column
    pub fn select_prev(&mut self) {
        let row = &mut self.selected[self.focus.index()];
        *row = row.saturating_sub(1);
    }

    /// Move the selection cursor down within the focused column
    pub fn select_next(&mut self) {
        let count = self.columns[self.focus.index()].len();
        let row = &mut self.selected[self.focus.index()];
        if *row < count.saturating_sub(1) {
            *row += 1;
        }
    }

    /// Move the selected book to the next column in the cycle.
    ///
    /// The book leaves the focused column, its status advances, and it is
    /// appended to the destination column. No-op when the focused column is
    /// empty.
    pub fn advance_selected(&mut self) {
        let row = self.selected_row();
        if row >= self.columns[self.focus.index()].len() {
            return;
        }
        let mut book = self.columns[self.focus.index()].remove(row);
        book.advance();
        tracing::debug!(title = %book.title, to = ?book.status, "advancing book");
        self.columns[book.status.index()].push(book);
        self.clamp_row();
    }

    /// Append a freshly created book to the column matching its status
    pub fn accept_draft(&mut self, book: Book) {
        tracing::debug!(title = %book.title, status = ?book.status, "accepting draft");
        self.columns[book.status.index()].push(book);
    }

    /// Ensure the focused column's cursor is valid for its length
    fn clamp_row(&mut self) {
        let count = self.columns[self.focus.index()].len();
        let row = &mut self.selected[self.focus.index()];
        if count == 0 {
            *row = 0;
        } else if *row >= count {
            *row = count - 1;
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
