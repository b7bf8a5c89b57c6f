/// Application events raised by the command line
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    Start,
    /// Raw rate input; unusable values fall back to the default rate
    SetWpm(String),
    /// Raw font size input; unusable values fall back to the default size
    SetFontSize(String),
    Quit,
    Help,
    InvalidCommand(String),
}
