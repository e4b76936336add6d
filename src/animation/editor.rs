use glam::Vec3;

use crate::animation::bridge::SceneBridge;
use crate::animation::channel::Channel;
use crate::animation::playback::{AnimationState, TickOutcome};
use crate::animation::store::KeyframeStore;
use crate::animation::timeline::{TimelineMarkers, timeline_markers};
use crate::animation::tracks::Keyframe;
use crate::animation::transform::{ResolvedTransform, Transform};
use crate::animation::values::Interpolatable;
use crate::errors::Result;
use crate::settings::{PlaybackConfig, PlaybackPolicy};

/// One editing session: the keyframe store, the playback state and the
/// policy that drives write-backs.
///
/// Everything is single-threaded. The host calls [`tick`](Self::tick) once
/// per rendered frame and forwards UI actions to the setters; all of them
/// take effect in call order.
#[derive(Debug, Clone)]
pub struct AnimationEditor {
    store: KeyframeStore,
    state: AnimationState,
    config: PlaybackConfig,
    // Last target per channel, kept between ticks by the eased policy.
    eased_targets: ResolvedTransform,
}

impl Default for AnimationEditor {
    fn default() -> Self {
        let config = PlaybackConfig::default();
        Self {
            store: KeyframeStore::new(),
            state: AnimationState::new(config.total_frames),
            config,
            eased_targets: ResolvedTransform::default(),
        }
    }
}

impl AnimationEditor {
    pub fn new(config: PlaybackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: KeyframeStore::new(),
            state: AnimationState::new(config.total_frames),
            config,
            eased_targets: ResolvedTransform::default(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn store(&self) -> &KeyframeStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn current_frame(&self) -> u32 {
        self.state.current_frame()
    }

    #[inline]
    #[must_use]
    pub fn selected_node(&self) -> Option<&str> {
        self.state.selected()
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    // ========================================================================
    // Model loading & recording
    // ========================================================================

    /// Registers a node discovered while loading the model.
    ///
    /// Re-registering the selected node also drops its eased targets, so an
    /// emptied track stops moving the node.
    pub fn init_node(&mut self, node_id: &str) {
        self.store.init_node(node_id);
        if self.state.selected() == Some(node_id) {
            self.eased_targets = ResolvedTransform::default();
        }
    }

    /// Forgets every node, keyframe and the selection, e.g. before loading
    /// another model.
    pub fn clear(&mut self) {
        self.store.clear();
        self.state.select(None);
        self.eased_targets = ResolvedTransform::default();
    }

    pub fn record_keyframe(&mut self, node_id: &str, frame: u32, transform: &Transform) -> bool {
        self.store.record_keyframe(node_id, frame, transform)
    }

    /// Records the selected node's live transform at the current frame.
    ///
    /// No-op without a selection or when the scene does not know the node.
    pub fn record_selected(&mut self, scene: &impl SceneBridge) -> bool {
        let Some(node_id) = self.state.selected() else {
            return false;
        };
        let Some(transform) = scene.transform(node_id) else {
            log::debug!("Selected node '{node_id}' is not in the scene");
            return false;
        };

        let frame = self.state.current_frame();
        self.store.record_keyframe(node_id, frame, &transform)
    }

    #[must_use]
    pub fn track(&self, node_id: &str, channel: Channel) -> &[Keyframe<Vec3>] {
        self.store.track(node_id, channel)
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Value of one channel of `node_id` at `frame`, or `None` to leave the
    /// channel unchanged.
    ///
    /// Frames outside the timeline are accepted as is; they simply find no
    /// bracketing pair once they pass the last keyframe.
    pub fn resolve_channel(
        &self,
        node_id: &str,
        channel: Channel,
        frame: u32,
    ) -> Result<Option<Vec3>> {
        match self.store.node_tracks(node_id) {
            Some(tracks) => tracks
                .track(channel)
                .sample(frame, self.config.interval_mode()),
            None => Ok(None),
        }
    }

    pub fn resolve_transform(&self, node_id: &str, frame: u32) -> Result<ResolvedTransform> {
        let mut resolved = ResolvedTransform::default();
        for channel in Channel::ALL {
            resolved.set_channel(channel, self.resolve_channel(node_id, channel, frame)?);
        }
        Ok(resolved)
    }

    // ========================================================================
    // Controls
    // ========================================================================

    pub fn set_playing(&mut self, playing: bool) {
        if self.state.is_playing() != playing {
            log::debug!("Playback {}", if playing { "started" } else { "stopped" });
        }
        self.state.set_playing(playing);
    }

    pub fn set_selected_node(&mut self, node_id: Option<&str>) {
        if self.state.select(node_id) {
            self.eased_targets = ResolvedTransform::default();
            match node_id {
                Some(id) => log::info!("Selected node: {id}"),
                None => log::info!("Selection cleared"),
            }
        }
    }

    /// Steps the counter by one frame (wrapping) without resolving anything.
    pub fn advance_one_frame(&mut self, scene: &mut impl SceneBridge) {
        self.state.step();
        scene.request_timeline_redraw();
    }

    /// One playback step, called once per rendered frame.
    pub fn tick(&mut self, scene: &mut impl SceneBridge) -> TickOutcome {
        if !self.state.is_playing() {
            return TickOutcome::Paused;
        }

        let outcome = if self.state.can_advance() {
            let frame = self.state.current_frame();
            self.apply_frame(frame, scene);
            self.state.step();
            TickOutcome::Advanced { frame }
        } else {
            self.state.rewind();
            TickOutcome::Wrapped
        };

        scene.request_timeline_redraw();
        outcome
    }

    #[must_use]
    pub fn timeline_markers(&self) -> TimelineMarkers {
        timeline_markers(&self.store, &self.state)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn apply_frame(&mut self, frame: u32, scene: &mut impl SceneBridge) {
        let Some(node_id) = self.state.selected() else {
            return;
        };
        let Some(mut transform) = scene.transform(node_id) else {
            return;
        };

        let mut resolved = ResolvedTransform::default();
        for channel in Channel::ALL {
            match self.resolve_channel(node_id, channel, frame) {
                Ok(value) => resolved.set_channel(channel, value),
                Err(e) => log::warn!(
                    "Skipping {} of '{node_id}' at frame {frame}: {e}",
                    channel.name()
                ),
            }
        }

        let written = match self.config.policy {
            PlaybackPolicy::Direct => {
                resolved.apply_to(&mut transform);
                !resolved.is_unchanged()
            }
            PlaybackPolicy::Eased => {
                let factor = self.config.easing_factor;
                for channel in Channel::ALL {
                    if let Some(value) = resolved.channel(channel) {
                        self.eased_targets.set_channel(channel, Some(value));
                    }
                    if let Some(target) = self.eased_targets.channel(channel) {
                        let current = transform.channel_mut(channel);
                        *current = Vec3::approach(*current, target, factor);
                    }
                }
                !self.eased_targets.is_unchanged()
            }
        };

        if written {
            scene.set_transform(node_id, transform);
        }
    }
}
