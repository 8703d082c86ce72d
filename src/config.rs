//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a waypoint.toml, and if present we load
//! settings from there: wrap width, tracking-band geometry and the navigation
//! timing windows. Every key has a default, so the file is optional and may
//! set any subset.

use facet::Facet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

#[derive(Facet, Clone)]
/// Reader preferences loaded from waypoint.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 88)]
    /// Maximum line width for document text wrapping.
    pub wrap_width: usize,
    #[facet(default = 2)]
    /// Rows excluded from the top of the tracking band (header allowance).
    pub band_top: usize,
    #[facet(default = 60)]
    /// Percentage of the pane excluded from the bottom of the tracking band.
    pub band_bottom_percent: usize,
    #[facet(default = 1000)]
    /// How long tracker observations stay suppressed after a jump, in ms.
    pub settle_ms: u64,
    #[facet(default = 100)]
    /// Deferral before an incoming fragment triggers its jump, in ms.
    pub defer_ms: u64,
    #[facet(default = 400)]
    /// Smooth scroll duration, in ms.
    pub scroll_ms: u64,
}

impl Config {
    #[must_use]
    /// Load configuration from waypoint.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(Path::new("waypoint.toml"))
    }

    #[must_use]
    /// Load configuration from a specific file, falling back to defaults when
    /// the file is missing or malformed.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => warn!(path = %path.display(), "ignoring malformed config: {e}"),
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// The suppression window after a programmatic jump.
    #[must_use]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// The deferral before an incoming fragment is acted on.
    #[must_use]
    pub fn defer(&self) -> Duration {
        Duration::from_millis(self.defer_ms)
    }

    /// The smooth scroll duration, never longer than the settle window so
    /// the suppression cannot expire mid-animation.
    #[must_use]
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_ms.min(self.settle_ms))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
