use crate::app::{mode::AppMode, App};
use crate::ui::reader::render_reader;
use crate::ui::settings_view::render_settings;
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest the loop blocks on input before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Drive the app until it quits.
    ///
    /// Waits for input no longer than the time left on the reader's pending
    /// step, so steps fire on time without a busy loop.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                debug!("Event loop exiting");
                return Ok(());
            }

            self.render_frame(app, Instant::now())?;

            let timeout = app
                .time_until_next_step(Instant::now())
                .map_or(FRAME_INTERVAL, |remaining| remaining.min(FRAME_INTERVAL));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key, Instant::now());
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            app.tick(Instant::now());
        }
    }

    pub fn render_frame(&mut self, app: &mut App, now: Instant) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            app.renderer_mut()
                .update_terminal_size(area.width, area.height);

            match app.mode() {
                AppMode::Reading => render_reader(frame, area, app.renderer(), app.font_size()),
                AppMode::Settings | AppMode::Quit => render_settings(frame, area, app, now),
            }
        })?;

        Ok(())
    }
}
