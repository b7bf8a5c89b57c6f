//! Logger setup
//!
//! The terminal belongs to the UI while the reader runs, so nothing may log
//! to stderr unless asked to through `RUST_LOG`.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::File;
use std::io;

/// File the `--debug` flag logs to.
pub const LOG_FILE: &str = "rsvp.log";

/// Builds the logger for one run.
///
/// - `debug_log: None` reads `env` (normally `RUST_LOG`) and defaults to
///   errors only.
/// - `Some(Ok(file))` logs everything at debug level into `file`.
/// - `Some(Err(_))` means the debug log could not be opened; logging is
///   switched off rather than spilling onto the UI.
pub fn builder(debug_log: Option<io::Result<File>>, env: Env) -> Builder {
    match debug_log {
        Some(Ok(file)) => {
            let mut builder = Builder::new();
            builder
                .filter_level(LevelFilter::Debug)
                .target(Target::Pipe(Box::new(file)));
            builder
        }
        Some(Err(_)) => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
        None => Builder::from_env(env.default_filter_or("error")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::OpenOptions;

    fn env_with(var: &str, value: Option<&str>) -> Env<'static> {
        match value {
            Some(value) => std::env::set_var(var, value),
            None => std::env::remove_var(var),
        }
        Env::new().filter(var.to_string())
    }

    #[test]
    fn test_defaults_to_errors_only() {
        let env = env_with("RSVP_LOG_TEST_UNSET", None);
        let logger = builder(None, env).build();
        assert_eq!(logger.filter(), LevelFilter::Error);
    }

    #[test]
    fn test_env_filter_is_respected() {
        let env = env_with("RSVP_LOG_TEST_DEBUG", Some("debug"));
        let logger = builder(None, env).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_debug_file_logs_at_debug() {
        let path = std::env::temp_dir().join(format!("rsvp_log_{}.log", std::process::id()));
        let file = OpenOptions::new().create(true).append(true).open(&path);
        let env = env_with("RSVP_LOG_TEST_FILE", None);

        let logger = builder(Some(file), env).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unopenable_debug_file_turns_logging_off() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let env = env_with("RSVP_LOG_TEST_DENIED", Some("trace"));

        let logger = builder(Some(Err(err)), env).build();
        assert_eq!(logger.filter(), LevelFilter::Off);
    }
}
