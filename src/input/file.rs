use super::{LoadError, LoadedText};
use log::info;
use std::fs;
use std::path::Path;

/// Load a local file as plain UTF-8 text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. A file with
/// nothing but whitespace is reported as empty so the caller can keep the
/// text it already has.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    info!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("rsvp_reader_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/notes.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let path = temp_path("empty.txt");
        File::create(&path).unwrap().write_all(b"  \n\t").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(LoadError::EmptyFile(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_path("valid.txt");
        File::create(&path)
            .unwrap()
            .write_all(b"hello world")
            .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.text, "hello world");
        assert!(loaded.source.starts_with("file:"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_invalid_utf8_is_lossy() {
        let path = temp_path("latin1.txt");
        File::create(&path)
            .unwrap()
            .write_all(b"caf\xe9 ok")
            .unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.text.ends_with(" ok"));
        assert!(loaded.text.contains('\u{FFFD}'));

        fs::remove_file(&path).unwrap();
    }
}
