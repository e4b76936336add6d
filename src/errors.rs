//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! Almost nothing in the animation core is allowed to fail: recording against
//! an unknown node, querying with no selection, or sampling an empty track all
//! degrade to "no-op" or "leave the transform unchanged". [`KinemaError`] only
//! covers the cases a caller explicitly opts into:
//! - Strict interpolation over a zero-length frame interval
//! - Invalid playback configuration
//! - Configuration (de)serialization failures
//!
//! # Usage
//!
//! ```rust,ignore
//! use kinema::errors::{KinemaError, Result};
//!
//! fn load_config(json: &str) -> Result<PlaybackConfig> {
//!     PlaybackConfig::from_json_str(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for the animation core.
#[derive(Error, Debug)]
pub enum KinemaError {
    // ========================================================================
    // Interpolation Errors
    // ========================================================================
    /// Two bracketing keyframes share the same frame index, so the
    /// interpolation alpha would divide by zero.
    #[error("Degenerate interpolation interval: both keyframes are at frame {frame}")]
    DegenerateInterval {
        /// The shared frame index
        frame: u32,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// The timeline length must be a positive number of frames.
    #[error("Invalid total frame count: {0} (must be > 0)")]
    InvalidTotalFrames(u32),

    /// The eased playback policy needs a factor in `(0, 1]`.
    #[error("Invalid easing factor: {0} (must be in (0, 1])")]
    InvalidEasingFactor(f32),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
