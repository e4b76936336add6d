mod values;
pub mod tracks;
pub mod channel;
pub mod transform;
pub mod store;
pub mod bridge;
pub mod playback;
pub mod timeline;
pub mod editor;

pub use values::Interpolatable;
pub use tracks::{IntervalMode, Keyframe, KeyframeTrack, SurroundingKeyframes, interpolate};
pub use channel::Channel;
pub use transform::{ResolvedTransform, Transform};
pub use store::{KeyframeStore, NodeTracks};
pub use bridge::{NodeTransforms, SceneBridge};
pub use playback::{AnimationState, TickOutcome};
pub use timeline::TimelineMarkers;
pub use editor::AnimationEditor;
