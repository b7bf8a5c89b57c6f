use lazy_static::lazy_static;

/// Text read when the input is empty or whitespace only.
pub const DEFAULT_TEXT: &str = "RSVP (Rapid Serial Visual Presentation) is a method of displaying information (generally text) in which the items are displayed sequentially in a fixed location. This allows for reading at much faster speeds than normal because it eliminates the time spent on eye movement. Try pasting your own text here to see how fast you can read!";

lazy_static! {
    static ref DEFAULT_WORDS: Vec<String> = split_words(DEFAULT_TEXT);
}

fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Splits text into display words on runs of whitespace.
///
/// Punctuation stays attached to its word since it drives pacing.
/// Empty or whitespace-only input yields the words of [`DEFAULT_TEXT`].
pub fn tokenize_text(text: &str) -> Vec<String> {
    let words = split_words(text);
    if words.is_empty() {
        DEFAULT_WORDS.clone()
    } else {
        words
    }
}

/// Number of words [`tokenize_text`] yields for `text`, without building
/// them.
pub fn count_words(text: &str) -> usize {
    match text.split_whitespace().count() {
        0 => DEFAULT_WORDS.len(),
        n => n,
    }
}

/// The ordered words of one reading session. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    words: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: tokenize_text(text),
        }
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Index of the last word, `None` for an empty document.
    pub fn last_index(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }
}
