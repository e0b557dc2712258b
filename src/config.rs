//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Every setting has a default, so running with an empty environment
//! rewrites `README.md` in the working directory.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalogue::orientation::{FixedOrientation, OrientationSource, ProbeOrientation};
use crate::constants::defaults;
use crate::error::{Error, Result};
use crate::types::Orientation;

/// How the orientation of raw lines is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationMode {
    /// Detect from the probe artist.
    #[default]
    Auto,
    /// Always title-first.
    Normal,
    /// Always artist-first.
    Reversed,
}

impl FromStr for OrientationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "normal" => Ok(Self::Normal),
            "reversed" => Ok(Self::Reversed),
            other => Err(Error::config(
                format!("unknown orientation `{other}`"),
                "Set ALBUMS_ORIENTATION to auto, normal or reversed",
            )),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Document rewritten in place
    pub document_path: PathBuf,
    /// Orientation strategy for raw lines
    pub orientation: OrientationMode,
    /// Artist name the heuristic looks for
    pub probe_artist: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            document_path: PathBuf::from(defaults::DOCUMENT),
            orientation: OrientationMode::Auto,
            probe_artist: defaults::PROBE_ARTIST.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("ALBUMS_FILE") {
            config.document_path = PathBuf::from(shellexpand::tilde(&path).to_string());
        }

        if let Ok(mode) = env::var("ALBUMS_ORIENTATION") {
            config.orientation = mode.parse()?;
        }

        if let Ok(probe) = env::var("ALBUMS_PROBE") {
            if probe.trim().is_empty() {
                return Err(Error::config(
                    "ALBUMS_PROBE is empty",
                    "Unset it or name an artist that appears in the document",
                ));
            }
            config.probe_artist = probe;
        }

        Ok(config)
    }

    /// Build the orientation strategy selected by this configuration.
    pub fn orientation_source(&self) -> Box<dyn OrientationSource> {
        match self.orientation {
            OrientationMode::Auto => Box::new(ProbeOrientation::new(self.probe_artist.clone())),
            OrientationMode::Normal => Box::new(FixedOrientation(Orientation::Normal)),
            OrientationMode::Reversed => Box::new(FixedOrientation(Orientation::Reversed)),
        }
    }
}
