use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::book::Status;
use crate::config::{GlobalConfig, ThemeConfig};

use super::board::BoardState;
use super::form::{FormField, FormOutcome, FormState};

/// Helper to convert hex color string to ratatui Color
fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

/// Build footer help text based on the active mode
fn build_footer_text(mode: &Mode) -> String {
    match mode {
        Mode::Board => {
            " [h/l] column  [j/k] book  [Enter] advance  [n] new book  [q] quit ".to_string()
        }
        Mode::Form(form) => match form.field {
            FormField::Title => " Enter book title... [Enter] next  [Esc] cancel ".to_string(),
            FormField::Description => {
                " Enter description... [Enter] save  [Esc] cancel ".to_string()
            }
        },
    }
}

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Which controller is active and receiving input.
///
/// The form variant owns the in-progress draft, so cancelling or submitting
/// destroys it; board state lives on `AppState` and survives form sessions.
#[derive(Debug)]
pub enum Mode {
    Board,
    Form(FormState),
}

/// Application state (separate from terminal for borrow checker)
pub struct AppState {
    pub should_quit: bool,
    pub board: BoardState,
    pub mode: Mode,
    theme: ThemeConfig,
    /// Columns are seeded lazily on the first display-size signal
    loaded: bool,
}

impl AppState {
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            should_quit: false,
            board: BoardState::new(),
            mode: Mode::Board,
            theme,
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Display-size signal. The first one initializes the columns with seed
    /// data; later resizes must not reset contents, focus, or the draft.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        if !self.loaded && width > 0 && height > 0 {
            self.board = BoardState::seeded();
            self.loaded = true;
            tracing::debug!(width, height, "board initialized");
        }
    }

    /// Route a key event to the active controller
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Board => self.handle_board_key(key),
            Mode::Form(_) => self.handle_form_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('h') | KeyCode::Left => self.board.focus_prev(),
            KeyCode::Char('l') | KeyCode::Right => self.board.focus_next(),
            KeyCode::Char('k') | KeyCode::Up => self.board.select_prev(),
            KeyCode::Char('j') | KeyCode::Down => self.board.select_next(),
            KeyCode::Enter => self.board.advance_selected(),
            KeyCode::Char('n') => {
                // Freeze the current focus as the draft's target status
                tracing::debug!(target = ?self.board.focus, "opening form");
                self.mode = Mode::Form(FormState::new(self.board.focus));
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Mode::Form(form) = &mut self.mode else {
            return;
        };
        match form.handle_key(key) {
            Some(FormOutcome::Submitted(book)) => {
                // Quitting inside the form cancels back to the board instead
                // of exiting; only board mode terminates the app.
                tracing::debug!(title = %book.title, "form submitted");
                self.board.accept_draft(book);
                self.mode = Mode::Board;
            }
            Some(FormOutcome::Cancelled) => {
                tracing::debug!("form cancelled");
                self.mode = Mode::Board;
            }
            None => {}
        }
    }

    /// Produce a complete frame from current state alone.
    ///
    /// Empty while quitting, a placeholder before first sizing, otherwise the
    /// board (with the form overlay on top in form mode).
    pub fn render(&self, frame: &mut Frame) {
        if self.should_quit {
            return;
        }

        let area = frame.area();

        if !self.loaded {
            let loading = Paragraph::new("loading...")
                .style(Style::default().fg(hex_to_color(&self.theme.color_dimmed)));
            frame.render_widget(loading, area);
            return;
        }

        // Main layout: header, board, footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let header = Paragraph::new(" shelfboard ")
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        self.draw_columns(frame, chunks[1]);

        let footer = Paragraph::new(build_footer_text(&self.mode))
            .style(Style::default().fg(hex_to_color(&self.theme.color_dimmed)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);

        if let Mode::Form(form) = &self.mode {
            self.draw_form(form, frame, area);
        }
    }

    fn draw_columns(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (i, status) in Status::all().iter().enumerate() {
            let books = self.board.books_in(*status);
            let is_focused = self.board.focus == *status;

            let title = format!(" {} ({}) ", status.column_title(), books.len());
            let (border_style, title_style) = if is_focused {
                (
                    Style::default().fg(hex_to_color(&self.theme.color_focused)),
                    Style::default().fg(hex_to_color(&self.theme.color_focused)),
                )
            } else {
                (
                    Style::default().fg(hex_to_color(&self.theme.color_normal)),
                    Style::default().fg(hex_to_color(&self.theme.color_column_header)),
                )
            };

            let items: Vec<ListItem> = books
                .iter()
                .enumerate()
                .map(|(row, book)| {
                    let is_selected = is_focused && self.board.selected_row() == row;
                    let title_style = if is_selected {
                        Style::default()
                            .bg(hex_to_color(&self.theme.color_focused))
                            .fg(Color::Black)
                            .bold()
                    } else {
                        Style::default().fg(hex_to_color(&self.theme.color_text)).bold()
                    };
                    let text = Text::from(vec![
                        Line::styled(format!(" {} ", book.title), title_style),
                        Line::styled(
                            format!(" {} ", book.description),
                            Style::default()
                                .fg(hex_to_color(&self.theme.color_description))
                                .italic(),
                        ),
                    ]);
                    ListItem::new(text)
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .title(title)
                    .title_style(title_style)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            frame.render_widget(list, columns[i]);
        }
    }

    fn draw_form(&self, form: &FormState, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(50, 40, area);
        frame.render_widget(Clear, popup_area);

        let main_block = Block::default()
            .title(format!(" New Book — {} ", form.target().column_title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(hex_to_color(&self.theme.color_form_border)));
        frame.render_widget(main_block, popup_area);

        let popup_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title input
                Constraint::Length(3), // Description input
                Constraint::Min(0),
            ])
            .margin(1)
            .split(popup_area);

        self.draw_form_field(
            frame,
            popup_chunks[0],
            " Title ",
            &form.title.buffer,
            form.title.cursor,
            form.field == FormField::Title,
        );
        self.draw_form_field(
            frame,
            popup_chunks[1],
            " Description ",
            &form.description.buffer,
            form.description.cursor,
            form.field == FormField::Description,
        );
    }

    fn draw_form_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        buffer: &str,
        cursor: usize,
        focused: bool,
    ) {
        let border = if focused {
            Style::default().fg(hex_to_color(&self.theme.color_focused))
        } else {
            Style::default().fg(hex_to_color(&self.theme.color_dimmed))
        };

        // Insert the cursor glyph at the cursor position
        let text = if focused {
            let (before, after) = buffer.split_at(cursor.min(buffer.len()));
            format!("{}█{}", before, after)
        } else {
            buffer.to_string()
        };

        let field = Paragraph::new(text)
            .style(Style::default().fg(hex_to_color(&self.theme.color_text)))
            .block(
                Block::default()
                    .title(label)
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        frame.render_widget(field, area);
    }
}

pub struct App {
    terminal: Terminal,
    state: AppState,
}

impl App {
    pub fn new(config: GlobalConfig) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = ratatui::Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: AppState::new(config.theme),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // Initial display sizing; Resize events keep it current afterwards
        let size = self.terminal.size().context("Failed to query terminal size")?;
        self.state.handle_resize(size.width, size.height);

        while !self.state.should_quit {
            self.draw()?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.state.handle_key(key);
                    }
                    Event::Resize(width, height) => self.state.handle_resize(width, height),
                    _ => {}
                }
            }
        }

        // One last empty frame so quitting leaves a clean surface
        self.draw()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| state.render(frame))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

/// Helper to create a centered rect using percentage of available space
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
