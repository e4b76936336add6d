use serde::Serialize;

use crate::animation::values::Interpolatable;
use crate::errors::{KinemaError, Result};

/// How [`interpolate`] treats two bracketing keyframes on the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalMode {
    /// Return the earlier keyframe's value.
    #[default]
    Lenient,
    /// Fail with [`KinemaError::DegenerateInterval`].
    Strict,
}

/// A single recorded sample: the value of one channel at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframe<T> {
    pub frame: u32,
    pub value: T,
}

impl<T> Keyframe<T> {
    #[must_use]
    pub fn new(frame: u32, value: T) -> Self {
        Self { frame, value }
    }
}

/// The keyframes bracketing a target frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurroundingKeyframes<'a, T> {
    pub prev: Option<&'a Keyframe<T>>,
    pub next: Option<&'a Keyframe<T>>,
}

/// Append-only log of keyframes for one channel of one node.
///
/// Keyframes are kept in recording order. Nothing deduplicates or sorts
/// them, so a track may hold several entries on the same frame or frames
/// that go backwards; every lookup scans in storage order instead of
/// assuming sortedness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyframeTrack<T> {
    keyframes: Vec<Keyframe<T>>,
}

impl<T> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self {
            keyframes: Vec::new(),
        }
    }
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: u32, value: T) {
        self.keyframes.push(Keyframe::new(frame, value));
    }

    #[inline]
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    /// First recorded keyframe sitting exactly on `frame`.
    #[must_use]
    pub fn keyframe_at(&self, frame: u32) -> Option<&Keyframe<T>> {
        self.keyframes.iter().find(|kf| kf.frame == frame)
    }

    /// Finds the keyframes bracketing `frame` in a single pass.
    ///
    /// `prev` keeps being overwritten by every keyframe with `kf.frame <= frame`
    /// until the scan stops, so among duplicates the last-inserted one wins.
    /// The scan stops at the first keyframe with `kf.frame > frame`, which
    /// becomes `next` even if a temporally closer one was recorded later.
    #[must_use]
    pub fn surrounding(&self, frame: u32) -> SurroundingKeyframes<'_, T> {
        let mut prev = None;
        let mut next = None;

        for kf in &self.keyframes {
            if kf.frame <= frame {
                prev = Some(kf);
            } else {
                next = Some(kf);
                break;
            }
        }

        SurroundingKeyframes { prev, next }
    }

    /// Samples the track at `frame`.
    ///
    /// Returns `Ok(None)` unless both a previous and a next keyframe exist:
    /// there is no extrapolation and no snapping to a lone keyframe.
    pub fn sample(&self, frame: u32, mode: IntervalMode) -> Result<Option<T>> {
        match self.surrounding(frame) {
            SurroundingKeyframes {
                prev: Some(prev),
                next: Some(next),
            } => interpolate(prev.value, next.value, prev.frame, next.frame, frame, mode).map(Some),
            _ => Ok(None),
        }
    }
}

/// Linear interpolation between two keyframe values by frame position.
///
/// `alpha = (target - prev_frame) / (next_frame - prev_frame)`, applied per
/// component. A target sitting on `prev_frame` returns `prev_value` as is.
/// A zero-length interval yields `prev_value` in [`IntervalMode::Lenient`]
/// and an error in [`IntervalMode::Strict`].
pub fn interpolate<T: Interpolatable>(
    prev_value: T,
    next_value: T,
    prev_frame: u32,
    next_frame: u32,
    target_frame: u32,
    mode: IntervalMode,
) -> Result<T> {
    if next_frame == prev_frame {
        return match mode {
            IntervalMode::Lenient => Ok(prev_value),
            IntervalMode::Strict => Err(KinemaError::DegenerateInterval { frame: prev_frame }),
        };
    }

    if target_frame == prev_frame {
        return Ok(prev_value);
    }

    let alpha = (f64::from(target_frame) - f64::from(prev_frame))
        / (f64::from(next_frame) - f64::from(prev_frame));

    Ok(T::interpolate_linear(prev_value, next_value, alpha as f32))
}
