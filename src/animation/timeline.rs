use crate::animation::channel::Channel;
use crate::animation::playback::AnimationState;
use crate::animation::store::KeyframeStore;

/// Normalized `[0, 1)` coordinates of everything the timeline strip draws.
///
/// The widget multiplies these by its own width; drawing stays with the host.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineMarkers {
    /// One entry per position keyframe of the selected node, in recording
    /// order. Out-of-range frames map outside `[0, 1)`.
    pub keyframes: Vec<f32>,
    pub playhead: f32,
}

#[must_use]
pub fn timeline_markers(store: &KeyframeStore, state: &AnimationState) -> TimelineMarkers {
    let total = state.total_frames() as f32;

    let keyframes = state
        .selected()
        .map(|node_id| {
            store
                .track(node_id, Channel::Position)
                .iter()
                .map(|kf| kf.frame as f32 / total)
                .collect()
        })
        .unwrap_or_default();

    TimelineMarkers {
        keyframes,
        playhead: state.current_frame() as f32 / total,
    }
}
