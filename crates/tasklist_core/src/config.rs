//! Core runtime configuration.
//!
//! # Responsibility
//! - Collect the boundary decisions (platform, logging) in one value.
//! - Resolve them once, before any service is built.

use crate::logging::default_log_level;
use crate::policy::{Platform, PlatformParseError};
use std::path::PathBuf;

/// Environment variable consulted when no platform is given explicitly.
pub const PLATFORM_ENV_VAR: &str = "TASKLIST_PLATFORM";

/// Settings shared by every surface that embeds the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub platform: Platform,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves the platform from an explicit value, then `TASKLIST_PLATFORM`,
    /// then the default.
    ///
    /// # Errors
    /// - Returns `PlatformParseError` when the chosen value is not recognized.
    pub fn resolve_platform(explicit: Option<&str>) -> Result<Platform, PlatformParseError> {
        if let Some(value) = explicit {
            return value.parse();
        }
        match std::env::var(PLATFORM_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Platform::default()),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}
