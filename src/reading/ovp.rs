//! OVP (Optimal Viewing Position) pivot calculation
//!
//! Words are split around a pivot character so that the pivot stays at a
//! fixed horizontal position while the words around it change length:
//! - 1 char word → index 0
//! - 2-5 char words → index 1
//! - 6-9 char words → index 2
//! - 10-13 char words → index 3
//! - 14+ char words → index 4
//!
//! Lengths are counted in grapheme clusters so accented letters and emoji
//! are never cut in half.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the 0-based pivot index for a word of `len` characters.
pub fn pivot_index(len: usize) -> usize {
    match len {
        1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// A word split around its pivot character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplit {
    pub prefix: String,
    pub pivot: String,
    pub suffix: String,
}

impl WordSplit {
    /// Pivot index in characters, equal to the prefix length.
    pub fn pivot_index(&self) -> usize {
        self.prefix.graphemes(true).count()
    }

    pub fn word(&self) -> String {
        format!("{}{}{}", self.prefix, self.pivot, self.suffix)
    }
}

/// Splits `word` into prefix, pivot and suffix.
///
/// Returns `None` for an empty word, which has no pivot to show.
pub fn split_word(word: &str) -> Option<WordSplit> {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    let index = pivot_index(graphemes.len());
    let pivot = graphemes.get(index)?;

    Some(WordSplit {
        prefix: graphemes[..index].concat(),
        pivot: (*pivot).to_string(),
        suffix: graphemes[index + 1..].concat(),
    })
}
