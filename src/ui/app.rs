//! Main TUI application state and logic
//!
//! The terminal stands in for the touch gestures of the puzzle: the cursor
//! replaces the finger, grab/drop replaces drag-connect, `d` replaces the
//! double-tap dereference, and `i` replaces the tap inspect.

use crate::engine::session::QuestSession;
use crate::level::catalog::LEVELS;
use crate::memory::cell::Address;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const GRID_COLUMNS: usize = 4;

/// The main application state
pub struct App {
    /// The active play session
    pub session: QuestSession,

    /// Selected cell index (the "finger")
    pub cursor: usize,

    /// Cell armed as the source of an in-progress connect
    pub pending_source: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around an existing session
    pub fn new(session: QuestSession) -> Self {
        App {
            session,
            cursor: 0,
            pending_source: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Expire highlight/error flags between input events.
            self.session.tick();

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Grid on the left, mission card on the right, code log and status
        // bar along the bottom.
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        super::panes::render_grid_pane(
            frame,
            columns[0],
            self.session.cells(),
            self.cursor,
            self.pending_source,
        );

        super::panes::render_mission_pane(
            frame,
            columns[1],
            self.session.level(),
            self.session.is_solved(),
        );

        super::panes::render_code_pane(frame, main_chunks[1], self.session.code_log());

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.is_solved(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor % GRID_COLUMNS > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor % GRID_COLUMNS < GRID_COLUMNS - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor >= GRID_COLUMNS {
                    self.cursor -= GRID_COLUMNS;
                }
            }
            KeyCode::Down => {
                if self.cursor + GRID_COLUMNS < self.session.cells().len() {
                    self.cursor += GRID_COLUMNS;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.grab_or_drop();
            }
            KeyCode::Esc => {
                self.pending_source = None;
                self.status_message = String::from("Cancelled");
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let address = self.cursor_address();
                match self.session.dereference(&address) {
                    Ok(()) => self.status_message = format!("Dereferenced {}", address),
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Tab => {
                let address = self.cursor_address();
                match self.session.inspect(&address) {
                    Ok(()) => self.status_message = format!("Inspected {}", address),
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset_current_level();
                self.pending_source = None;
                self.status_message = String::from("Level reset");
            }
            KeyCode::Char('n') => self.switch_level(1),
            KeyCode::Char('p') => self.switch_level(-1),
            KeyCode::Char(c @ '0'..='9') => {
                let id = c.to_digit(10).unwrap_or(0);
                match self.session.start_level(id) {
                    Ok(()) => {
                        self.pending_source = None;
                        self.status_message = format!("Level {}", id);
                    }
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            _ => {}
        }
    }

    /// Enter on a cell: arm it as the connect source, or complete the
    /// connect if a source is already armed
    fn grab_or_drop(&mut self) {
        match self.pending_source.take() {
            None => {
                self.pending_source = Some(self.cursor);
                self.status_message = format!("Dragging from {}", self.cursor_address());
            }
            Some(source_index) => {
                let source = self.address_at(source_index);
                let destination = self.cursor_address();
                match self.session.connect(&source, &destination) {
                    Ok(()) => {
                        self.status_message = format!("{} → {}", source, destination);
                    }
                    Err(e) => {
                        self.status_message = e.to_string();
                    }
                }
                if self.session.take_just_solved() {
                    self.status_message = String::from("Level solved! Press n for the next one.");
                }
            }
        }
    }

    /// Step to the adjacent level in catalog order
    fn switch_level(&mut self, step: isize) {
        let current = self.session.level().id;
        let position = LEVELS
            .iter()
            .position(|level| level.id == current)
            .unwrap_or(0);
        let next = (position as isize + step).rem_euclid(LEVELS.len() as isize) as usize;
        if let Err(e) = self.session.start_level(LEVELS[next].id) {
            self.status_message = e.to_string();
            return;
        }
        self.pending_source = None;
        self.status_message = format!("Level {}: {}", LEVELS[next].id, LEVELS[next].title);
    }

    fn cursor_address(&self) -> Address {
        self.address_at(self.cursor)
    }

    fn address_at(&self, index: usize) -> Address {
        self.session.cells()[index].address.clone()
    }
}
