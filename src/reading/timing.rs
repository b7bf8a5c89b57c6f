use crate::config::TimingConfig;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// The extra pause a word earns, checked in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    /// Word ends a sentence: `.` `!` `?`
    Sentence,
    /// Word ends a clause: `,` `;` `:`
    Clause,
    /// Word is longer than the configured threshold
    LongWord,
    Normal,
}

impl PauseKind {
    /// Classifies a word. Exactly one kind applies; sentence beats clause
    /// beats long word.
    pub fn classify(word: &str, config: &TimingConfig) -> Self {
        if word.ends_with(is_sentence_terminator) {
            PauseKind::Sentence
        } else if word.ends_with(is_clause_terminator) {
            PauseKind::Clause
        } else if word.graphemes(true).count() > config.long_word_threshold {
            PauseKind::LongWord
        } else {
            PauseKind::Normal
        }
    }

    pub fn multiplier(self, config: &TimingConfig) -> f64 {
        match self {
            PauseKind::Sentence => config.sentence_multiplier,
            PauseKind::Clause => config.clause_multiplier,
            PauseKind::LongWord => config.long_word_multiplier,
            PauseKind::Normal => 1.0,
        }
    }
}

fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '!' || c == '?'
}

fn is_clause_terminator(c: char) -> bool {
    c == ',' || c == ';' || c == ':'
}

/// Base delay per word in milliseconds, kept fractional.
pub fn wpm_to_milliseconds(wpm: u32) -> f64 {
    60_000.0 / wpm.max(1) as f64
}

/// How long `word` stays on screen at `wpm`.
pub fn word_duration(word: &str, wpm: u32, config: &TimingConfig) -> Duration {
    let multiplier = PauseKind::classify(word, config).multiplier(config);
    let delay_ms = wpm_to_milliseconds(wpm) * multiplier;
    Duration::from_micros((delay_ms * 1000.0).round() as u64)
}
