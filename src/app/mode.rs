#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Text input and preferences
    Settings,
    /// A reading session is on screen
    Reading,
    Quit,
}
