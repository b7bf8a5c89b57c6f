//! RsvpRenderer trait: the boundary between the reading core and a display
//!
//! The session pushes plain data through this trait and never touches a
//! terminal API itself.

use crate::reading::{PlaybackState, Progress, WordSplit};

/// Receives what the reader wants on screen after each step.
pub trait RsvpRenderer {
    /// Show a word split around its pivot character
    ///
    /// The prefix sits right-aligned against the pivot, the pivot stays at
    /// a fixed column, and the suffix runs left-aligned after it.
    fn render_word(&mut self, split: &WordSplit);

    /// Update the progress bar and counters
    fn render_progress(&mut self, progress: Progress);

    /// Update the playback indicator and rate display
    fn render_playback(&mut self, state: PlaybackState, wpm: u32);
}
