//! Playback Settings
//!
//! This module defines the configuration of the playback engine.
//!
//! The core choice is [`PlaybackPolicy`], which decides how a tick writes the
//! interpolated keyframe value back into the scene. The two policies are not
//! equivalent, so the choice is always explicit:
//!
//! | Policy   | Per-tick write                                         | Reaches keyframe values |
//! |----------|--------------------------------------------------------|-------------------------|
//! | `Direct` | the interpolated value                                 | exactly                 |
//! | `Eased`  | `current + (target - current) * easing_factor`         | never, for factor < 1   |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use kinema::settings::{PlaybackConfig, PlaybackPolicy};
//!
//! // Default: direct playback over a 120 frame timeline
//! let config = PlaybackConfig::default();
//!
//! // Smoothed playback
//! let config = PlaybackConfig {
//!     policy: PlaybackPolicy::Eased,
//!     easing_factor: 0.25,
//!     ..Default::default()
//! };
//!
//! // Or from JSON
//! let config = PlaybackConfig::from_json_str(r#"{ "policy": "eased", "easingFactor": 0.1 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::tracks::IntervalMode;
use crate::errors::{KinemaError, Result};

/// Default timeline length in frames.
pub const DEFAULT_TOTAL_FRAMES: u32 = 120;

/// Default fraction of the remaining distance covered per tick when easing.
pub const DEFAULT_EASING_FACTOR: f32 = 0.1;

/// How a playback tick applies the resolved keyframe value to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackPolicy {
    /// Write the interpolated value as is.
    #[default]
    Direct,
    /// Move the live value toward the interpolated value by
    /// [`PlaybackConfig::easing_factor`] of the remaining distance.
    ///
    /// This lags behind the recorded animation for any factor below 1.
    Eased,
}

/// Configuration of an [`AnimationEditor`](crate::animation::AnimationEditor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaybackConfig {
    pub policy: PlaybackPolicy,
    /// Only used by [`PlaybackPolicy::Eased`]. Must lie in `(0, 1]`.
    pub easing_factor: f32,
    /// Timeline length. Fixed for the lifetime of the editor.
    pub total_frames: u32,
    /// Fail instead of falling back when interpolating over a zero-length
    /// interval.
    pub strict_intervals: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            policy: PlaybackPolicy::Direct,
            easing_factor: DEFAULT_EASING_FACTOR,
            total_frames: DEFAULT_TOTAL_FRAMES,
            strict_intervals: false,
        }
    }
}

impl PlaybackConfig {
    /// Parses and validates a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_frames == 0 {
            return Err(KinemaError::InvalidTotalFrames(self.total_frames));
        }

        let factor = self.easing_factor;
        if factor.is_nan() || factor <= 0.0 || factor > 1.0 {
            return Err(KinemaError::InvalidEasingFactor(self.easing_factor));
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn interval_mode(&self) -> IntervalMode {
        if self.strict_intervals {
            IntervalMode::Strict
        } else {
            IntervalMode::Lenient
        }
    }
}
