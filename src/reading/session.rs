//! Pacer/presenter: one reading session over a document.
//!
//! A session walks its document one word at a time. Each step renders the
//! word on screen, then arms a single delayed step for the word's duration.
//! All transitions go through the [`StepTimer`], so pausing, navigating or
//! stopping drops the pending step before anything else happens.

use crate::config::TimingConfig;
use crate::reading::ovp::split_word;
use crate::reading::scheduler::{StepKind, StepTimer};
use crate::reading::timing::word_duration;
use crate::reading::tokenizer::Document;
use crate::rendering::RsvpRenderer;
use log::{debug, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not yet started, or warming up before the first word
    Idle,
    Playing,
    Paused,
    /// Ran past the last word; terminal until a new session
    Finished,
}

/// Reading position for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Index of the word on screen; equals `total` once finished
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f64 / self.total as f64
        }
    }
}

pub struct Session {
    document: Document,
    cursor: usize,
    wpm: u32,
    state: PlaybackState,
    timer: StepTimer,
    config: TimingConfig,
}

impl Session {
    pub fn new(text: &str, wpm: u32, config: TimingConfig) -> Self {
        Self::with_document(Document::from_text(text), wpm, config)
    }

    pub fn with_document(document: Document, wpm: u32, config: TimingConfig) -> Self {
        Self {
            document,
            cursor: 0,
            wpm: config.clamp_wpm(wpm),
            state: PlaybackState::Idle,
            timer: StepTimer::new(),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The word under the cursor; `None` once the session has run past
    /// the last word.
    pub fn current_word(&self) -> Option<&str> {
        self.document.get(self.cursor)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.cursor,
            total: self.document.len(),
        }
    }

    pub fn is_step_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// How long the event loop may wait before calling [`Session::tick`].
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Resets to the first word and arms the warm-up delay.
    pub fn start(&mut self, now: Instant) {
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        let handle = self
            .timer
            .schedule(StepKind::WarmUp, now, self.config.warm_up);
        info!(
            "Session started: {} words at {} wpm ({:?})",
            self.document.len(),
            self.wpm,
            handle
        );
    }

    /// Runs the pending step if it is due. Returns whether a step ran.
    pub fn tick(&mut self, now: Instant, renderer: &mut dyn RsvpRenderer) -> bool {
        match self.timer.take_due(now) {
            Some(StepKind::WarmUp) => {
                self.state = PlaybackState::Playing;
                self.present(now, renderer);
                true
            }
            Some(StepKind::Advance) => {
                if self.cursor + 1 >= self.document.len() {
                    self.finish(renderer);
                } else {
                    self.cursor += 1;
                    self.present(now, renderer);
                }
                true
            }
            None => false,
        }
    }

    /// Space bar behaviour: pause while playing or warming up, resume
    /// while paused. Does nothing once finished.
    pub fn toggle(&mut self, now: Instant, renderer: &mut dyn RsvpRenderer) {
        match self.state {
            PlaybackState::Playing => self.pause(renderer),
            PlaybackState::Idle if self.timer.pending_kind() == Some(StepKind::WarmUp) => {
                self.pause(renderer)
            }
            PlaybackState::Idle | PlaybackState::Paused => self.resume(now, renderer),
            PlaybackState::Finished => {}
        }
    }

    pub fn pause(&mut self, renderer: &mut dyn RsvpRenderer) {
        self.timer.cancel();
        if matches!(self.state, PlaybackState::Playing | PlaybackState::Idle) {
            self.state = PlaybackState::Paused;
            debug!("Paused at word {}", self.cursor);
            renderer.render_playback(self.state, self.wpm);
        }
    }

    /// Shows the word under the cursor again and restarts its timer.
    pub fn resume(&mut self, now: Instant, renderer: &mut dyn RsvpRenderer) {
        if matches!(self.state, PlaybackState::Paused | PlaybackState::Idle) {
            self.state = PlaybackState::Playing;
            debug!("Resumed at word {}", self.cursor);
            self.present(now, renderer);
        }
    }

    /// Manual navigation by `delta` words, clamped to the document.
    ///
    /// The new word is rendered at once. Any pending step is dropped, so a
    /// playing session ends up paused on the word it moved to.
    pub fn step(&mut self, delta: isize, renderer: &mut dyn RsvpRenderer) {
        let Some(last) = self.document.last_index() else {
            return;
        };
        self.timer.cancel();
        if self.state != PlaybackState::Finished {
            self.state = PlaybackState::Paused;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        debug!("Moved to word {}", self.cursor);

        self.render_current(renderer);
        renderer.render_playback(self.state, self.wpm);
    }

    /// Changes the rate. The step already waiting keeps its duration.
    pub fn set_wpm(&mut self, wpm: u32) -> u32 {
        self.wpm = self.config.clamp_wpm(wpm);
        self.wpm
    }

    pub fn adjust_wpm(&mut self, delta: i32) -> u32 {
        let wpm = (self.wpm as i64 + delta as i64).max(0) as u32;
        self.set_wpm(wpm)
    }

    /// Ends playback; nothing renders after this.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.state = PlaybackState::Idle;
        info!("Session stopped at word {}", self.cursor);
    }

    fn present(&mut self, now: Instant, renderer: &mut dyn RsvpRenderer) {
        self.render_current(renderer);
        renderer.render_playback(self.state, self.wpm);

        let delay = self
            .current_word()
            .map(|word| word_duration(word, self.wpm, &self.config))
            .unwrap_or_default();
        self.timer.schedule(StepKind::Advance, now, delay);
    }

    fn render_current(&self, renderer: &mut dyn RsvpRenderer) {
        if let Some(split) = self.current_word().and_then(split_word) {
            renderer.render_word(&split);
        }
        renderer.render_progress(self.progress());
    }

    fn finish(&mut self, renderer: &mut dyn RsvpRenderer) {
        self.timer.cancel();
        self.cursor = self.document.len();
        self.state = PlaybackState::Finished;
        info!("Session finished after {} words", self.document.len());
        renderer.render_progress(self.progress());
        renderer.render_playback(self.state, self.wpm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::ovp::WordSplit;

    #[derive(Default)]
    struct RecordingRenderer {
        words: Vec<String>,
        progress: Vec<Progress>,
        states: Vec<PlaybackState>,
    }

    impl RsvpRenderer for RecordingRenderer {
        fn render_word(&mut self, split: &WordSplit) {
            self.words.push(split.word());
        }

        fn render_progress(&mut self, progress: Progress) {
            self.progress.push(progress);
        }

        fn render_playback(&mut self, state: PlaybackState, _wpm: u32) {
            self.states.push(state);
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn started(text: &str) -> (Session, Instant) {
        let mut session = Session::new(text, 300, TimingConfig::default());
        let now = Instant::now();
        session.start(now);
        (session, now)
    }

    #[test]
    fn test_start_waits_for_warm_up() {
        let (mut session, t0) = started("one two");
        let mut renderer = RecordingRenderer::default();

        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(!session.tick(t0 + ms(499), &mut renderer));
        assert!(renderer.words.is_empty());

        assert!(session.tick(t0 + ms(500), &mut renderer));
        assert_eq!(session.state(), PlaybackState::Playing);
        assert_eq!(renderer.words, vec!["one"]);
    }

    #[test]
    fn test_playing_advances_by_word_duration() {
        let (mut session, t0) = started("cat. dog");
        let mut renderer = RecordingRenderer::default();
        let t1 = t0 + ms(500);
        session.tick(t1, &mut renderer);

        // "cat." holds for 400ms at 300 wpm
        assert!(!session.tick(t1 + ms(399), &mut renderer));
        assert!(session.tick(t1 + ms(400), &mut renderer));
        assert_eq!(renderer.words, vec!["cat.", "dog"]);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_playing_always_has_pending_step() {
        let (mut session, t0) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        let mut now = t0 + ms(500);
        while session.tick(now, &mut renderer) {
            if session.state() == PlaybackState::Playing {
                assert!(session.is_step_pending());
            }
            now += ms(200);
        }
    }

    #[test]
    fn test_reaching_end_finishes() {
        let (mut session, t0) = started("a b");
        let mut renderer = RecordingRenderer::default();
        let mut now = t0 + ms(500);
        session.tick(now, &mut renderer);
        now += ms(200);
        session.tick(now, &mut renderer);
        now += ms(200);
        session.tick(now, &mut renderer);

        assert_eq!(session.state(), PlaybackState::Finished);
        assert!(!session.is_step_pending());
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.current_word(), None);
        assert_eq!(session.progress(), Progress { position: 2, total: 2 });
        assert_eq!(renderer.states.last(), Some(&PlaybackState::Finished));

        let rendered = renderer.words.len();
        assert!(!session.tick(now + Duration::from_secs(60), &mut renderer));
        assert_eq!(renderer.words.len(), rendered);
    }

    #[test]
    fn test_progress_reports_cursor_fraction() {
        let (mut session, t0) = started("a b c d");
        let mut renderer = RecordingRenderer::default();
        session.tick(t0 + ms(500), &mut renderer);
        session.tick(t0 + ms(700), &mut renderer);
        let progress = session.progress();
        assert_eq!(progress, Progress { position: 1, total: 4 });
        assert_eq!(progress.fraction(), 0.25);
        assert_eq!(renderer.progress.last(), Some(&progress));
    }

    #[test]
    fn test_pause_stops_rendering() {
        let (mut session, t0) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        session.tick(t0 + ms(500), &mut renderer);
        session.pause(&mut renderer);

        assert_eq!(session.state(), PlaybackState::Paused);
        assert!(!session.is_step_pending());
        assert!(!session.tick(t0 + Duration::from_secs(10), &mut renderer));
        assert_eq!(renderer.words, vec!["a"]);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let (mut session, t0) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        let t1 = t0 + ms(500);
        session.tick(t1, &mut renderer);

        session.toggle(t1 + ms(50), &mut renderer);
        assert_eq!(session.state(), PlaybackState::Paused);

        let t2 = t1 + Duration::from_secs(5);
        session.toggle(t2, &mut renderer);
        assert_eq!(session.state(), PlaybackState::Playing);
        // Resuming shows the current word again with a full delay
        assert_eq!(renderer.words, vec!["a", "a"]);
        assert!(!session.tick(t2 + ms(199), &mut renderer));
        assert!(session.tick(t2 + ms(200), &mut renderer));
        assert_eq!(session.current_word(), Some("b"));
    }

    #[test]
    fn test_toggle_during_warm_up_pauses() {
        let (mut session, t0) = started("a b");
        let mut renderer = RecordingRenderer::default();
        session.toggle(t0 + ms(100), &mut renderer);
        assert_eq!(session.state(), PlaybackState::Paused);
        assert!(!session.tick(t0 + ms(600), &mut renderer));
        assert!(renderer.words.is_empty());
    }

    #[test]
    fn test_toggle_when_finished_is_noop() {
        let mut session = Session::new("a", 300, TimingConfig::default());
        let mut renderer = RecordingRenderer::default();
        let t0 = Instant::now();
        session.start(t0);
        session.tick(t0 + ms(500), &mut renderer);
        session.tick(t0 + ms(700), &mut renderer);
        assert_eq!(session.state(), PlaybackState::Finished);

        session.toggle(t0 + ms(800), &mut renderer);
        assert_eq!(session.state(), PlaybackState::Finished);
        assert!(!session.is_step_pending());
    }

    #[test]
    fn test_step_clamps_at_start() {
        let (mut session, _) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        session.step(-1, &mut renderer);
        assert_eq!(session.cursor(), 0);
        assert_eq!(renderer.words, vec!["a"]);
    }

    #[test]
    fn test_step_clamps_at_end() {
        let (mut session, _) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        session.step(1, &mut renderer);
        session.step(1, &mut renderer);
        session.step(1, &mut renderer);
        assert_eq!(session.cursor(), 2);
        assert_eq!(renderer.words, vec!["b", "c", "c"]);
        assert_eq!(
            renderer.progress.last(),
            Some(&Progress { position: 2, total: 3 })
        );
    }

    #[test]
    fn test_step_cancels_pending_advance() {
        let (mut session, t0) = started("a b c d");
        let mut renderer = RecordingRenderer::default();
        let t1 = t0 + ms(500);
        session.tick(t1, &mut renderer);

        session.step(1, &mut renderer);
        assert_eq!(session.state(), PlaybackState::Paused);
        assert!(!session.is_step_pending());
        assert!(!session.tick(t1 + Duration::from_secs(10), &mut renderer));
        assert_eq!(renderer.words, vec!["a", "b"]);
    }

    fn finished(text: &str) -> (Session, RecordingRenderer) {
        let (mut session, t0) = started(text);
        let mut renderer = RecordingRenderer::default();
        let mut now = t0 + ms(500);
        while session.tick(now, &mut renderer) {
            now += Duration::from_secs(1);
        }
        assert_eq!(session.state(), PlaybackState::Finished);
        (session, renderer)
    }

    #[test]
    fn test_step_back_when_finished_shows_last_word() {
        let (mut session, mut renderer) = finished("a b c d");

        session.step(-1, &mut renderer);
        assert_eq!(session.state(), PlaybackState::Finished);
        assert_eq!(session.cursor(), 3);
        assert_eq!(session.current_word(), Some("d"));
        assert_eq!(renderer.words.last().map(String::as_str), Some("d"));
        assert_eq!(session.progress(), Progress { position: 3, total: 4 });
        assert_eq!(renderer.progress.last(), Some(&session.progress()));
    }

    #[test]
    fn test_progress_follows_navigation_after_finish() {
        let (mut session, mut renderer) = finished("a b c d");

        session.step(-1, &mut renderer);
        session.step(-1, &mut renderer);
        assert_eq!(session.current_word(), Some("c"));
        assert_eq!(session.progress().position, session.cursor());
        assert_eq!(session.progress(), Progress { position: 2, total: 4 });

        session.step(1, &mut renderer);
        session.step(1, &mut renderer);
        assert_eq!(session.current_word(), Some("d"));
        assert_eq!(session.progress(), Progress { position: 3, total: 4 });
    }

    #[test]
    fn test_step_on_empty_document_is_noop() {
        let mut session =
            Session::with_document(Document::from_words(vec![]), 300, TimingConfig::default());
        let mut renderer = RecordingRenderer::default();
        session.step(1, &mut renderer);
        assert_eq!(session.cursor(), 0);
        assert!(renderer.words.is_empty());
        assert!(renderer.progress.is_empty());
    }

    #[test]
    fn test_empty_document_finishes_after_warm_up() {
        let mut session =
            Session::with_document(Document::from_words(vec![]), 300, TimingConfig::default());
        let mut renderer = RecordingRenderer::default();
        let t0 = Instant::now();
        session.start(t0);
        session.tick(t0 + ms(500), &mut renderer);
        session.tick(t0 + ms(500), &mut renderer);
        assert_eq!(session.state(), PlaybackState::Finished);
        assert!(renderer.words.is_empty());
    }

    #[test]
    fn test_rate_change_applies_to_next_step_only() {
        let (mut session, t0) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        let t1 = t0 + ms(500);
        session.tick(t1, &mut renderer);

        // Pending step was armed at 300 wpm (200ms)
        session.set_wpm(600);
        assert!(!session.tick(t1 + ms(150), &mut renderer));
        assert!(session.tick(t1 + ms(200), &mut renderer));

        // Next step uses 600 wpm (100ms)
        let t2 = t1 + ms(200);
        assert!(session.tick(t2 + ms(100), &mut renderer));
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_adjust_wpm_clamps() {
        let mut session = Session::new("a", 20, TimingConfig::default());
        assert_eq!(session.adjust_wpm(-10), 10);
        assert_eq!(session.adjust_wpm(-10), 10);
        assert_eq!(session.adjust_wpm(10), 20);
        session.set_wpm(1495);
        assert_eq!(session.adjust_wpm(10), 1500);
    }

    #[test]
    fn test_stop_cancels_everything() {
        let (mut session, t0) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        session.tick(t0 + ms(500), &mut renderer);
        session.stop();
        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(!session.tick(t0 + Duration::from_secs(10), &mut renderer));
        assert_eq!(renderer.words, vec!["a"]);
    }

    #[test]
    fn test_restart_resets_cursor() {
        let (mut session, t0) = started("a b c");
        let mut renderer = RecordingRenderer::default();
        session.step(1, &mut renderer);
        session.step(1, &mut renderer);
        session.start(t0 + Duration::from_secs(1));
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_time_until_next_step() {
        let (session, t0) = started("a");
        assert_eq!(session.time_until_next_step(t0 + ms(100)), Some(ms(400)));
    }
}
