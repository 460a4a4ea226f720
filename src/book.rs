/// Reading status of a book — one column each on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Done,
}

impl Status {
    /// Next status in the fixed cycle: Pending -> InProgress -> Done -> Pending
    pub fn next(&self) -> Status {
        match self {
            Status::Pending => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Pending,
        }
    }

    /// Previous status in the cycle (wraps Pending -> Done)
    pub fn prev(&self) -> Status {
        match self {
            Status::Pending => Status::Done,
            Status::InProgress => Status::Pending,
            Status::Done => Status::InProgress,
        }
    }

    pub fn column_title(&self) -> &'static str {
        match self {
            Status::Pending => "Yet To Read",
            Status::InProgress => "Currently Reading",
            Status::Done => "Done Reading",
        }
    }

    /// All statuses in column order
    pub fn all() -> &'static [Status] {
        &[Status::Pending, Status::InProgress, Status::Done]
    }

    /// Column index for this status
    pub fn index(&self) -> usize {
        match self {
            Status::Pending => 0,
            Status::InProgress => 1,
            Status::Done => 2,
        }
    }
}

/// A tracked book on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub status: Status,
    pub title: String,
    pub description: String,
}

impl Book {
    pub fn new(status: Status, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Advance this book to the next status in the cycle
    pub fn advance(&mut self) {
        self.status = self.status.next();
    }
}
