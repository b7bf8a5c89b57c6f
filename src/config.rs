// Configuration for the reader core and the terminal shell
// Defaults mirror the web reader this tool grew out of

use crate::{Result, RsvpError};
use ini::Ini;
use log::{debug, info, warn};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Rate used when no rate, or an unusable one, is supplied
pub const DEFAULT_WPM: u32 = 300;

/// Font size preference used when none, or an unusable one, is supplied
pub const DEFAULT_FONT_SIZE: u16 = 64;

/// Pixels represented by one terminal row when converting the guide gap
const PIXELS_PER_ROW: u16 = 20;

/// Pacing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Allowed words-per-minute range (default 10..=1500)
    pub wpm_range: RangeInclusive<u32>,

    /// Rate change per Up/Down key press (default 10)
    pub wpm_step: u32,

    /// Delay between session start and the first word (default 500ms)
    pub warm_up: Duration,

    /// Words longer than this many characters get the long-word pause (default 8)
    pub long_word_threshold: usize,

    pub sentence_multiplier: f64,  // default 2.0x, after . ! ?
    pub clause_multiplier: f64,    // default 1.5x, after , ; :
    pub long_word_multiplier: f64, // default 1.2x
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm_range: 10..=1500,
            wpm_step: 10,
            warm_up: Duration::from_millis(500),
            long_word_threshold: 8,
            sentence_multiplier: 2.0,
            clause_multiplier: 1.5,
            long_word_multiplier: 1.2,
        }
    }
}

impl TimingConfig {
    pub fn clamp_wpm(&self, wpm: u32) -> u32 {
        wpm.clamp(*self.wpm_range.start(), *self.wpm_range.end())
    }
}

/// Reader preferences shown in the settings view
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Initial words per minute (default 300)
    pub wpm: u32,

    /// Font size preference in pixels (default 64)
    pub font_size: u16,

    /// Accepted font size range (default 24..=128)
    pub font_size_range: RangeInclusive<u16>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            font_size: DEFAULT_FONT_SIZE,
            font_size_range: 24..=128,
        }
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub reader: ReaderConfig,
    pub timing: TimingConfig,
}

impl Config {
    /// Load configuration from the user's config directory.
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                info!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => {
                info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let ini = Ini::load_from_file(path)
            .map_err(|e| RsvpError::Config(format!("Failed to load {}: {}", path.display(), e)))?;
        Ok(Self::from_ini(&ini))
    }

    /// Build a config from parsed INI sections, keeping defaults for
    /// anything absent or unparsable.
    pub fn from_ini(ini: &Ini) -> Self {
        let mut config = Self::default();
        let reader = &mut config.reader;
        let timing = &mut config.timing;

        reader.wpm = get_or(ini, "reader", "wpm", reader.wpm);
        reader.font_size = get_or(ini, "reader", "font_size", reader.font_size);

        let warm_up_ms = get_or(ini, "timing", "warm_up_ms", timing.warm_up.as_millis() as u64);
        timing.warm_up = Duration::from_millis(warm_up_ms);
        timing.wpm_step = get_or(ini, "timing", "wpm_step", timing.wpm_step);
        let min_wpm = get_or(ini, "timing", "min_wpm", *timing.wpm_range.start()).max(1);
        let max_wpm = get_or(ini, "timing", "max_wpm", *timing.wpm_range.end());
        if min_wpm <= max_wpm {
            timing.wpm_range = min_wpm..=max_wpm;
        } else {
            warn!("Ignoring wpm range {}..={}: min exceeds max", min_wpm, max_wpm);
        }
        timing.long_word_threshold = get_or(
            ini,
            "timing",
            "long_word_threshold",
            timing.long_word_threshold,
        );
        timing.sentence_multiplier =
            get_or(ini, "timing", "sentence_multiplier", timing.sentence_multiplier);
        timing.clause_multiplier = get_or(ini, "timing", "clause_multiplier", timing.clause_multiplier);
        timing.long_word_multiplier = get_or(
            ini,
            "timing",
            "long_word_multiplier",
            timing.long_word_multiplier,
        );

        reader.wpm = timing.clamp_wpm(reader.wpm);
        reader.font_size = clamp_font_size(reader.font_size, &reader.font_size_range);
        config
    }

    /// `<config_dir>/rsvp-reader/config.ini`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rsvp-reader").join("config.ini"))
    }
}

fn get_or<T: FromStr + Copy>(ini: &Ini, section: &str, key: &str, default: T) -> T {
    match ini.get_from(Some(section), key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value {:?} for [{}] {}, using default", raw, section, key);
            default
        }),
        None => default,
    }
}

fn clamp_font_size(size: u16, range: &RangeInclusive<u16>) -> u16 {
    size.clamp(*range.start(), *range.end())
}

/// Parse a user-entered rate. Non-numeric or zero input gives the default.
pub fn parse_wpm(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(wpm) if wpm > 0 => wpm,
        _ => DEFAULT_WPM,
    }
}

/// Parse a user-entered font size, clamped to the accepted range.
pub fn parse_font_size(input: &str, range: &RangeInclusive<u16>) -> u16 {
    match input.trim().parse::<u16>() {
        Ok(size) if size > 0 => clamp_font_size(size, range),
        _ => DEFAULT_FONT_SIZE,
    }
}

/// Gap in pixels between the word row and each guide rule.
pub fn guide_gap_px(font_size: u16) -> u16 {
    (font_size as f64 * 0.6 + 20.0).floor() as u16
}

/// Guide gap converted to terminal rows (at least one).
pub fn guide_gap_rows(font_size: u16) -> u16 {
    (guide_gap_px(font_size) / PIXELS_PER_ROW).max(1)
}
