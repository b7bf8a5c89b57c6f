pub mod app;
pub mod event;
pub mod mode;
pub mod settings;

pub use app::{App, StatusMessage, HELP_TEXT};
pub use event::AppEvent;
pub use mode::AppMode;
pub use settings::{Focus, SettingsForm};
