use crate::reading::count_words;

/// Which settings field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing focused: single keys act as shortcuts
    None,
    Text,
    Wpm,
    FontSize,
    Command,
}

impl Focus {
    /// Tab order through the editable fields.
    pub fn next(self) -> Self {
        match self {
            Focus::None | Focus::Command => Focus::Text,
            Focus::Text => Focus::Wpm,
            Focus::Wpm => Focus::FontSize,
            Focus::FontSize => Focus::Text,
        }
    }
}

/// The settings form: source text plus rate and font size inputs.
pub struct SettingsForm {
    text: String,
    word_count: usize,
    pub wpm_input: String,
    pub font_size_input: String,
    pub command_input: String,
    focus: Focus,
}

impl SettingsForm {
    pub fn new(text: &str, wpm: u32, font_size: u16) -> Self {
        Self {
            text: text.to_string(),
            word_count: count_words(text),
            wpm_input: wpm.to_string(),
            font_size_input: font_size.to_string(),
            command_input: String::new(),
            focus: Focus::None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Words the text box holds, as a session would read them.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.word_count = count_words(&self.text);
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus != Focus::Command {
            self.command_input.clear();
        }
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Type a character into the focused field. Numeric fields only take
    /// digits.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Text => {
                self.text.push(c);
                self.word_count = count_words(&self.text);
            }
            Focus::Wpm if c.is_ascii_digit() => self.wpm_input.push(c),
            Focus::FontSize if c.is_ascii_digit() => self.font_size_input.push(c),
            Focus::Command => self.command_input.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Text => {
                self.text.pop();
                self.word_count = count_words(&self.text);
            }
            Focus::Wpm => {
                self.wpm_input.pop();
            }
            Focus::FontSize => {
                self.font_size_input.pop();
            }
            Focus::Command => {
                self.command_input.pop();
            }
            Focus::None => {}
        }
    }

    /// Take the command line contents and leave command entry.
    pub fn take_command(&mut self) -> String {
        let command = std::mem::take(&mut self.command_input);
        self.focus = Focus::None;
        command
    }
}
