//! Interactive board mode.
//!
//! Raw-mode terminal counterpart of the scoreboard window: the three
//! counters with increment/decrement keys and an explicit save action.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use scoreboard_core::export::format_record_console;
use scoreboard_core::{Config, Counter, ScoreRecord, ScoreStore, SessionManager, StreamOutput};
use tracing::warn;

use crate::shutdown::ShutdownSignal;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the interactive board
pub fn run(store: &ScoreStore, config: &Config) -> Result<()> {
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_handler = Arc::clone(&shutdown);
    ctrlc::set_handler(move || shutdown_handler.trigger())?;

    let record = store.load()?;

    let mut session = SessionManager::new(&config.session_dir);
    if let Err(e) = session.start_session() {
        warn!("Failed to start session log: {}", e);
    }

    let stream = StreamOutput::new(config.stream, &config.stream_dir);
    if let Err(e) = stream.write_record(&record) {
        warn!("Failed to write stream files: {}", e);
    }

    let mut board = Board {
        store,
        session,
        stream,
        record,
        saved: record,
        autosave: config.autosave,
        status: None,
    };

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    let result = board.run_loop(&shutdown);
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

struct Board<'a> {
    store: &'a ScoreStore,
    session: SessionManager,
    stream: StreamOutput,
    record: ScoreRecord,
    /// Last state written to the score file; drives the dirty marker and
    /// the diff markers in the rendering.
    saved: ScoreRecord,
    autosave: bool,
    status: Option<Status>,
}

enum Status {
    Saved,
    SaveFailed(String),
}

impl Board<'_> {
    fn run_loop(&mut self, shutdown: &ShutdownSignal) -> Result<()> {
        self.draw()?;

        while !shutdown.is_shutdown() {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                    self.draw()?;
                }
                Event::Resize(..) => self.draw()?,
                _ => {}
            }
        }

        Ok(())
    }

    /// Returns true when the board should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('w') => self.adjust(Counter::Wins, 1),
            KeyCode::Char('W') => self.adjust(Counter::Wins, -1),
            KeyCode::Char('l') => self.adjust(Counter::Losses, 1),
            KeyCode::Char('L') => self.adjust(Counter::Losses, -1),
            KeyCode::Char('d') => self.adjust(Counter::Draws, 1),
            KeyCode::Char('D') => self.adjust(Counter::Draws, -1),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }

        false
    }

    fn adjust(&mut self, counter: Counter, delta: i64) {
        self.record = self.record.adjust(counter, delta);
        self.status = None;

        if let Err(e) = self.session.append_adjustment(counter, delta, &self.record) {
            warn!("Failed to record session history: {}", e);
        }
        if let Err(e) = self.stream.write_record(&self.record) {
            warn!("Failed to write stream files: {}", e);
        }
        if self.autosave {
            self.save();
        }
    }

    fn save(&mut self) {
        match self.store.save(&self.record) {
            Ok(()) => {
                self.saved = self.record;
                self.status = Some(Status::Saved);
            }
            // Surfaced on the board instead of aborting (the file may come
            // back, e.g. a remounted drive); the record stays intact.
            Err(e) => self.status = Some(Status::SaveFailed(e.to_string())),
        }
    }

    fn reset(&mut self) {
        self.record = ScoreRecord::default();
        self.status = None;

        if let Err(e) = self.stream.write_record(&self.record) {
            warn!("Failed to write stream files: {}", e);
        }
        if self.autosave {
            self.save();
        }
    }

    fn draw(&self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;

        // Raw mode needs explicit carriage returns
        let body = format_record_console(&self.record, Some(&self.saved));
        for line in body.lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        let dirty = if self.record != self.saved { " *" } else { "" };
        write!(
            stdout,
            "\r\n  [w/l/d] +1   [W/L/D] -1   [s] save{}   [r] reset   [q] quit\r\n",
            dirty
        )?;

        match &self.status {
            Some(Status::Saved) => {
                let message = format!("Saved to {}", self.store.path().display());
                write!(stdout, "\r\n  {}\r\n", message.green())?;
            }
            Some(Status::SaveFailed(reason)) => {
                let message = format!("SAVE FAILED: {}", reason);
                write!(stdout, "\r\n  {}\r\n", message.red().bold())?;
            }
            None => {}
        }

        stdout.flush()?;
        Ok(())
    }
}
