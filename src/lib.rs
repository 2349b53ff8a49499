//! Settings manifest of the electrobarn.com site.
//!
//! `site.yml` is read by the site generator at the start of every build. This
//! crate ships that manifest and loads it into [`Settings`].

pub use electrobarn_config::{Link, MalformedConfigurationError, Pagination, RelPath, Settings};

/// The manifest as checked in at the repository root.
pub const MANIFEST: &str = include_str!("../site.yml");

/// Load the site's own manifest.
pub fn load() -> Result<Settings, MalformedConfigurationError> {
    log::trace!("Loading embedded {}", electrobarn_config::MANIFEST_FILE);
    MANIFEST.parse()
}
