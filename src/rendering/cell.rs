//! CellRenderer - terminal renderer built on character cells
//!
//! Stores the latest frame pushed by the session; the reader view draws it
//! with ratatui on the next redraw. Pivot alignment snaps to whole cells and
//! uses unicode-width so wide characters (CJK, emoji) still line up.

use super::renderer::RsvpRenderer;
use crate::reading::{PlaybackState, Progress, WordSplit};
use unicode_width::UnicodeWidthStr;

/// Column layout of a word whose pivot sits on the center column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordColumns {
    pub prefix_start: u16,
    pub pivot_col: u16,
    pub suffix_start: u16,
}

pub struct CellRenderer {
    /// Terminal size in cells (columns, rows)
    terminal_size: (u16, u16),
    current_word: Option<WordSplit>,
    progress: Progress,
    state: PlaybackState,
    wpm: u32,
}

impl CellRenderer {
    pub fn new() -> Self {
        Self {
            terminal_size: (80, 24),
            current_word: None,
            progress: Progress::default(),
            state: PlaybackState::Idle,
            wpm: 0,
        }
    }

    /// Update terminal size from ratatui
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Row the word is drawn on (vertically centered)
    pub fn center_row(&self) -> u16 {
        self.terminal_size.1 / 2
    }

    pub fn current_word(&self) -> Option<&WordSplit> {
        self.current_word.as_ref()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// Compute where each part of `split` starts so the pivot lands on the
    /// center column. The prefix is clipped at column 0 if it is wider than
    /// the left half.
    pub fn columns_for(&self, split: &WordSplit) -> WordColumns {
        let pivot_col = self.terminal_size.0 / 2;
        let prefix_width = split.prefix.width() as u16;
        let pivot_width = split.pivot.width().max(1) as u16;

        WordColumns {
            prefix_start: pivot_col.saturating_sub(prefix_width),
            pivot_col,
            suffix_start: pivot_col.saturating_add(pivot_width),
        }
    }

    /// Forget everything from the previous session.
    pub fn reset(&mut self) {
        self.current_word = None;
        self.progress = Progress::default();
        self.state = PlaybackState::Idle;
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RsvpRenderer for CellRenderer {
    fn render_word(&mut self, split: &WordSplit) {
        self.current_word = Some(split.clone());
    }

    fn render_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    fn render_playback(&mut self, state: PlaybackState, wpm: u32) {
        self.state = state;
        self.wpm = wpm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::split_word;

    #[test]
    fn test_cell_renderer_creation() {
        let renderer = CellRenderer::new();
        assert_eq!(renderer.terminal_size, (80, 24));
        assert!(renderer.current_word().is_none());
        assert_eq!(renderer.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_update_terminal_size() {
        let mut renderer = CellRenderer::new();
        renderer.update_terminal_size(120, 40);
        assert_eq!(renderer.terminal_size, (120, 40));
        assert_eq!(renderer.center_row(), 20);
    }

    #[test]
    fn test_render_word_stores_split() {
        let mut renderer = CellRenderer::new();
        let split = split_word("hello").unwrap();
        renderer.render_word(&split);
        assert_eq!(renderer.current_word(), Some(&split));
    }

    #[test]
    fn test_render_playback_stores_state_and_rate() {
        let mut renderer = CellRenderer::new();
        renderer.render_playback(PlaybackState::Paused, 420);
        assert_eq!(renderer.state(), PlaybackState::Paused);
        assert_eq!(renderer.wpm(), 420);
    }

    #[test]
    fn test_reset_clears_frame() {
        let mut renderer = CellRenderer::new();
        renderer.render_word(&split_word("hello").unwrap());
        renderer.render_progress(Progress {
            position: 3,
            total: 9,
        });
        renderer.reset();
        assert!(renderer.current_word().is_none());
        assert_eq!(renderer.progress(), Progress::default());
    }

    #[test]
    fn test_columns_put_pivot_on_center() {
        let renderer = CellRenderer::new();
        let columns = renderer.columns_for(&split_word("reading").unwrap());
        assert_eq!(columns.pivot_col, 40);
        assert_eq!(columns.prefix_start, 38);
        assert_eq!(columns.suffix_start, 41);
    }

    #[test]
    fn test_columns_single_char() {
        let renderer = CellRenderer::new();
        let columns = renderer.columns_for(&split_word("a").unwrap());
        assert_eq!(columns.prefix_start, 40);
        assert_eq!(columns.suffix_start, 41);
    }

    #[test]
    fn test_columns_wide_characters() {
        let renderer = CellRenderer::new();
        // Each CJK character is two cells wide
        let columns = renderer.columns_for(&split_word("你好世界").unwrap());
        assert_eq!(columns.prefix_start, 38);
        assert_eq!(columns.suffix_start, 42);
    }

    #[test]
    fn test_columns_clip_at_left_edge() {
        let mut renderer = CellRenderer::new();
        renderer.update_terminal_size(4, 10);
        let columns = renderer.columns_for(&split_word("extraordinarily").unwrap());
        assert_eq!(columns.pivot_col, 2);
        assert_eq!(columns.prefix_start, 0);
    }
}
