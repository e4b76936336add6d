#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod animation;
pub mod errors;
pub mod settings;

pub use animation::{
    AnimationEditor, AnimationState, Channel, Keyframe, KeyframeStore, KeyframeTrack,
    NodeTransforms, ResolvedTransform, SceneBridge, TickOutcome, Transform,
};
pub use errors::{KinemaError, Result};
pub use settings::{PlaybackConfig, PlaybackPolicy};
