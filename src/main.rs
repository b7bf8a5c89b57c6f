//! rsvp entry point
//!
//! Usage: `rsvp [--debug] [FILE]`. FILE, if given, is loaded into the text
//! box. With `--debug` the log goes to `rsvp.log`, since the terminal
//! belongs to the UI.

use log::{debug, error, info, warn};
use rsvp_reader::app::App;
use rsvp_reader::config::Config;
use rsvp_reader::input;
use rsvp_reader::logging;
use rsvp_reader::ui::TuiManager;
use rsvp_reader::Result;
use std::fs::OpenOptions;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    init_logging(debug_mode);

    let file = args
        .iter()
        .find(|arg| arg.as_str() != "--debug" && arg.as_str() != "-d")
        .cloned();

    if let Err(e) = run(file) {
        error!("Fatal error: {}", e);
        eprintln!("rsvp: {}", e);
        process::exit(1);
    }
}

fn init_logging(debug_mode: bool) {
    let debug_log = debug_mode.then(|| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(logging::LOG_FILE)
    });
    if let Some(Err(e)) = &debug_log {
        eprintln!(
            "Warning: Failed to open {} for debug logging: {}",
            logging::LOG_FILE,
            e
        );
    }

    logging::builder(debug_log, env_logger::Env::default()).init();
    if debug_mode {
        info!(
            "rsvp version {} starting (debug mode, logging to {})",
            rsvp_reader::VERSION,
            logging::LOG_FILE
        );
    }
}

fn run(file: Option<String>) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("{}; using default configuration", e);
        Config::default()
    });
    debug!("Configuration: {:?}", config);

    let mut app = App::new(config);
    if let Some(path) = file {
        let loaded = input::file::load(&path)?;
        info!("Starting with text from {}", loaded.source);
        app = app.with_text(&loaded.text);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
