use super::{LoadError, LoadedText};
use arboard::Clipboard;
use log::info;

/// Read the system clipboard as text.
pub fn load() -> Result<LoadedText, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("clipboard is empty".to_string()));
    }

    info!("Loaded {} bytes from clipboard", text.len());
    Ok(LoadedText {
        text,
        source: "clipboard".to_string(),
    })
}
