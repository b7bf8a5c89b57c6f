pub mod ovp;
pub mod scheduler;
pub mod session;
pub mod timing;
pub mod tokenizer;

pub use ovp::{pivot_index, split_word, WordSplit};
pub use scheduler::{StepKind, StepTimer, TimerHandle};
pub use session::{PlaybackState, Progress, Session};
pub use timing::{word_duration, wpm_to_milliseconds, PauseKind};
pub use tokenizer::{count_words, tokenize_text, Document, DEFAULT_TEXT};
