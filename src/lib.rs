//! Terminal RSVP (rapid serial visual presentation) speed reader.
//!
//! The reading core lives in [`reading`] and has no dependency on the
//! terminal; [`app`] and [`ui`] wire it to crossterm and ratatui.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod reading;
pub mod rendering;
pub mod ui;

pub use error::{Result, RsvpError};

/// Crate version, shown in the settings header and the debug log.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
