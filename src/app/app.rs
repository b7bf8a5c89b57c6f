use super::event::AppEvent;
use super::mode::AppMode;
use super::settings::{Focus, SettingsForm};
use crate::config::{parse_font_size, parse_wpm, Config};
use crate::input;
use crate::reading::{PlaybackState, Session, DEFAULT_TEXT};
use crate::rendering::{CellRenderer, RsvpRenderer};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use std::time::{Duration, Instant};

const STATUS_DURATION: Duration = Duration::from_secs(2);
const HELP_DURATION: Duration = Duration::from_secs(8);

pub const HELP_TEXT: &str = "space start | tab fields | i edit text | @file | @@ clipboard | :wpm N | :size N | q quit";

/// A transient line shown under the settings form.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Owns every piece of UI state: the settings form, the active reading
/// session and the renderer the session draws into.
pub struct App {
    mode: AppMode,
    config: Config,
    settings: SettingsForm,
    session: Option<Session>,
    renderer: CellRenderer,
    font_size: u16,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let settings = SettingsForm::new(DEFAULT_TEXT, config.reader.wpm, config.reader.font_size);
        Self {
            mode: AppMode::Settings,
            font_size: config.reader.font_size,
            config,
            settings,
            session: None,
            renderer: CellRenderer::new(),
            status: None,
        }
    }

    /// Replace the initial text, e.g. with a file named on the command line.
    pub fn with_text(mut self, text: &str) -> Self {
        self.settings.set_text(text.to_string());
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn settings(&self) -> &SettingsForm {
        &self.settings
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn renderer(&self) -> &CellRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut CellRenderer {
        &mut self.renderer
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|status| status.expires_at > now)
            .map(|status| status.text.as_str())
    }

    /// Build a session from the settings form and start the warm-up.
    pub fn start_reading(&mut self, now: Instant) {
        let wpm = parse_wpm(&self.settings.wpm_input);
        self.font_size = parse_font_size(
            &self.settings.font_size_input,
            &self.config.reader.font_size_range,
        );

        let mut session = Session::new(self.settings.text(), wpm, self.config.timing.clone());
        session.start(now);

        self.settings.wpm_input = session.wpm().to_string();
        self.settings.font_size_input = self.font_size.to_string();
        self.settings.set_focus(Focus::None);

        self.renderer.reset();
        self.renderer.render_playback(session.state(), session.wpm());
        self.renderer.render_progress(session.progress());

        self.session = Some(session);
        self.status = None;
        self.mode = AppMode::Reading;
    }

    /// End the session and go back to settings, keeping the last rate.
    pub fn stop_reading(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
            self.settings.wpm_input = session.wpm().to_string();
        }
        self.mode = AppMode::Settings;
    }

    /// Run the pending reader step if it is due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.tick(now, &mut self.renderer);
        }
        if self.status.as_ref().is_some_and(|s| s.expires_at <= now) {
            self.status = None;
        }
    }

    /// Time until the reader next needs a [`App::tick`].
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.session
            .as_ref()
            .and_then(|session| session.time_until_next_step(now))
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.mode = AppMode::Quit;
            return;
        }

        match self.mode {
            AppMode::Settings => self.handle_settings_key(key, now),
            AppMode::Reading => self.handle_reading_key(key, now),
            AppMode::Quit => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Esc {
            self.stop_reading();
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let renderer = &mut self.renderer;
        let wpm_step = self.config.timing.wpm_step as i32;

        match key.code {
            KeyCode::Char(' ') => session.toggle(now, renderer),
            KeyCode::Up => {
                let wpm = session.adjust_wpm(wpm_step);
                renderer.render_playback(session.state(), wpm);
            }
            KeyCode::Down => {
                let wpm = session.adjust_wpm(-wpm_step);
                renderer.render_playback(session.state(), wpm);
            }
            KeyCode::Left => session.step(-1, renderer),
            KeyCode::Right => session.step(1, renderer),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent, now: Instant) {
        match self.settings.focus() {
            Focus::None => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => self.start_reading(now),
                KeyCode::Tab => self.settings.cycle_focus(),
                KeyCode::Char('i') => self.settings.set_focus(Focus::Text),
                KeyCode::Char(c @ (':' | '@')) => {
                    self.settings.set_focus(Focus::Command);
                    self.settings.insert_char(c);
                }
                KeyCode::Char('q') => self.mode = AppMode::Quit,
                _ => {}
            },
            Focus::Command => match key.code {
                KeyCode::Esc => self.settings.set_focus(Focus::None),
                KeyCode::Enter => {
                    let line = self.settings.take_command();
                    let event = command_to_app_event(parse_command(&line));
                    self.handle_event(event, now);
                }
                KeyCode::Backspace => self.settings.backspace(),
                KeyCode::Char(c) => self.settings.insert_char(c),
                _ => {}
            },
            Focus::Text => match key.code {
                KeyCode::Esc => self.settings.set_focus(Focus::None),
                KeyCode::Tab => self.settings.cycle_focus(),
                KeyCode::Enter => self.settings.insert_char('\n'),
                KeyCode::Backspace => self.settings.backspace(),
                KeyCode::Char(c) => self.settings.insert_char(c),
                _ => {}
            },
            Focus::Wpm | Focus::FontSize => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.settings.set_focus(Focus::None),
                KeyCode::Tab => self.settings.cycle_focus(),
                KeyCode::Backspace => self.settings.backspace(),
                KeyCode::Char(c) => self.settings.insert_char(c),
                _ => {}
            },
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::LoadFile(path) => match input::file::load(&path) {
                Ok(loaded) => {
                    info!("Text loaded from {}", loaded.source);
                    self.settings.set_text(loaded.text);
                    self.set_status("file (loaded)", now, STATUS_DURATION);
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path, e);
                    self.set_status(&format!("file not loaded: {}", e), now, STATUS_DURATION);
                }
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(loaded) => {
                    info!("Text loaded from {}", loaded.source);
                    self.settings.set_text(loaded.text);
                    self.set_status("clipboard (loaded)", now, STATUS_DURATION);
                }
                Err(e) => {
                    warn!("Failed to read clipboard: {}", e);
                    self.set_status("clipboard not loaded", now, STATUS_DURATION);
                }
            },
            AppEvent::Start => self.start_reading(now),
            AppEvent::SetWpm(raw) => {
                let wpm = self.config.timing.clamp_wpm(parse_wpm(&raw));
                self.settings.wpm_input = wpm.to_string();
                self.set_status(&format!("{} wpm", wpm), now, STATUS_DURATION);
            }
            AppEvent::SetFontSize(raw) => {
                self.font_size = parse_font_size(&raw, &self.config.reader.font_size_range);
                self.settings.font_size_input = self.font_size.to_string();
                self.set_status(&format!("size {}px", self.font_size), now, STATUS_DURATION);
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.set_status(HELP_TEXT, now, HELP_DURATION),
            AppEvent::InvalidCommand(input) => {
                self.set_status(&format!("unknown command: {}", input), now, STATUS_DURATION)
            }
        }
    }

    fn set_status(&mut self, text: &str, now: Instant, duration: Duration) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            expires_at: now + duration,
        });
    }

    /// True while a session is on screen and not paused or finished.
    pub fn is_playing(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.state() == PlaybackState::Playing)
    }
}
