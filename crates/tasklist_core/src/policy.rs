//! Platform-dependent commit policy.
//!
//! # Responsibility
//! - Resolve the host platform once at the boundary.
//! - Expose commit triggers as plain flags so the edit state machine never
//!   checks the platform itself.
//!
//! # Invariants
//! - Submitting the edit field always saves, on every platform.
//! - Blur saves only when `auto_save_on_blur` is set.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Input modality of the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Touch-primary list (phones, tablets).
    #[default]
    Touch,
    /// Pointer-driven list (web, desktop).
    Pointer,
}

/// Canonical string for the touch platform.
pub const PLATFORM_TOUCH: &str = "touch";
/// Canonical string for the pointer platform.
pub const PLATFORM_POINTER: &str = "pointer";

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Touch => PLATFORM_TOUCH,
            Self::Pointer => PLATFORM_POINTER,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform string could not be recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformParseError {
    pub value: String,
}

impl Display for PlatformParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported platform `{}`; expected touch|pointer",
            self.value
        )
    }
}

impl Error for PlatformParseError {}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "touch" | "mobile" | "ios" | "android" => Ok(Self::Touch),
            "pointer" | "web" | "desktop" => Ok(Self::Pointer),
            other => Err(PlatformParseError {
                value: other.to_string(),
            }),
        }
    }
}

/// Commit triggers resolved from a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditPolicy {
    /// Losing focus in the edit field commits the draft.
    pub auto_save_on_blur: bool,
    /// The new-task field's return key adds the task (otherwise only the
    /// Add button does).
    pub submit_new_task_on_enter: bool,
}

impl EditPolicy {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Touch => Self {
                auto_save_on_blur: true,
                submit_new_task_on_enter: false,
            },
            Platform::Pointer => Self {
                auto_save_on_blur: false,
                submit_new_task_on_enter: true,
            },
        }
    }
}

impl From<Platform> for EditPolicy {
    fn from(value: Platform) -> Self {
        Self::for_platform(value)
    }
}
