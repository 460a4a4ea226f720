use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::book::{Book, Status};

/// A single-line text entry session: buffer plus byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub buffer: String,
    pub cursor: usize,
}

impl TextField {
    /// Byte offset of the char boundary preceding the cursor
    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
    }

    fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if let Some(idx) = self.prev_boundary() {
            self.buffer.remove(idx);
            self.cursor = idx;
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    fn move_left(&mut self) {
        if let Some(idx) = self.prev_boundary() {
            self.cursor = idx;
        }
    }

    fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Apply a text-editing key to this field. Unrecognized keys are ignored.
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.len(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(c) => self.insert(c),
            _ => {}
        }
    }
}

/// Which form field currently holds input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// Terminal outcome of a form session
#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// The completed book, ready for the board
    Submitted(Book),
    Cancelled,
}

/// State for the new-book form: the status the book will receive (frozen at
/// form-open time) and two text fields, exactly one focused at a time.
#[derive(Debug)]
pub struct FormState {
    target: Status,
    pub title: TextField,
    pub description: TextField,
    pub field: FormField,
}

impl FormState {
    pub fn new(target: Status) -> Self {
        Self {
            target,
            title: TextField::default(),
            description: TextField::default(),
            field: FormField::Title,
        }
    }

    /// The status the submitted book will carry
    pub fn target(&self) -> Status {
        self.target
    }

    /// Route a key to the form.
    ///
    /// Enter confirms the focused field: on the title it moves focus to the
    /// description (no validation — an empty title is allowed), on the
    /// description it submits. Esc and the global quit chord (Ctrl+C) cancel
    /// from either field — plain `q` is ordinary text here, unlike board mode
    /// where it quits. Everything else edits the focused field in place.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        match key.code {
            KeyCode::Esc => return Some(FormOutcome::Cancelled),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(FormOutcome::Cancelled);
            }
            KeyCode::Enter => match self.field {
                FormField::Title => self.field = FormField::Description,
                FormField::Description => {
                    let book = Book::new(
                        self.target,
                        std::mem::take(&mut self.title.buffer),
                        std::mem::take(&mut self.description.buffer),
                    );
                    return Some(FormOutcome::Submitted(book));
                }
            },
            _ => match self.field {
                FormField::Title => self.title.handle_key(key),
                FormField::Description => self.description.handle_key(key),
            },
        }
        None
    }
}
