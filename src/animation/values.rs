use glam::Vec3;

/// A value that can be stored in a keyframe track and blended between two
/// recorded samples.
pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    /// Moves `current` toward `target` by `factor` of the remaining distance.
    ///
    /// Used by the eased playback policy. With `factor < 1` the result never
    /// lands exactly on `target` in a finite number of steps.
    fn approach(current: Self, target: Self, factor: f32) -> Self {
        Self::interpolate_linear(current, target, factor)
    }
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}
