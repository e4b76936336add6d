use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::animation::channel::Channel;
use crate::animation::tracks::{Keyframe, KeyframeTrack};
use crate::animation::transform::Transform;

/// The three channel tracks recorded for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeTracks {
    pub position: KeyframeTrack<Vec3>,
    pub rotation: KeyframeTrack<Vec3>,
    pub scale: KeyframeTrack<Vec3>,
}

impl NodeTracks {
    #[inline]
    #[must_use]
    pub fn track(&self, channel: Channel) -> &KeyframeTrack<Vec3> {
        match channel {
            Channel::Position => &self.position,
            Channel::Rotation => &self.rotation,
            Channel::Scale => &self.scale,
        }
    }

    #[inline]
    pub fn track_mut(&mut self, channel: Channel) -> &mut KeyframeTrack<Vec3> {
        match channel {
            Channel::Position => &mut self.position,
            Channel::Rotation => &mut self.rotation,
            Channel::Scale => &mut self.scale,
        }
    }
}

/// Session-lifetime record of every keyframe, keyed by node name then channel.
///
/// Only nodes registered through [`KeyframeStore::init_node`] accept
/// keyframes; everything else is silently ignored on write and reads as
/// empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeyframeStore {
    nodes: FxHashMap<String, NodeTracks>,
}

impl KeyframeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node_id` with three empty tracks.
    ///
    /// An existing entry is reset, so reloading a model does not accumulate
    /// stale keyframes.
    pub fn init_node(&mut self, node_id: &str) {
        if self
            .nodes
            .insert(node_id.to_owned(), NodeTracks::default())
            .is_some()
        {
            log::debug!("Reset keyframe tracks for node '{node_id}'");
        }
    }

    /// Appends one keyframe per channel for `node_id` at `frame`.
    ///
    /// Returns `false` without touching the store if the node was never
    /// initialised or any channel holds a NaN or infinite component.
    /// `frame` is not range checked and repeated frames are kept.
    pub fn record_keyframe(&mut self, node_id: &str, frame: u32, transform: &Transform) -> bool {
        let Some(tracks) = self.nodes.get_mut(node_id) else {
            log::debug!("Ignoring keyframe for unknown node '{node_id}'");
            return false;
        };

        if !Channel::ALL.iter().all(|&c| transform.channel(c).is_finite()) {
            log::debug!("Ignoring non-finite keyframe for '{node_id}' at frame {frame}");
            return false;
        }

        for channel in Channel::ALL {
            tracks
                .track_mut(channel)
                .push(frame, transform.channel(channel));
        }

        log::debug!("Saved keyframe for '{node_id}' at frame {frame}: {transform:?}");
        true
    }

    /// Keyframes of one channel, or an empty slice for an unknown node.
    #[must_use]
    pub fn track(&self, node_id: &str, channel: Channel) -> &[Keyframe<Vec3>] {
        match self.nodes.get(node_id) {
            Some(tracks) => tracks.track(channel).keyframes(),
            None => &[],
        }
    }

    #[must_use]
    pub fn node_tracks(&self, node_id: &str) -> Option<&NodeTracks> {
        self.nodes.get(node_id)
    }

    /// First keyframe of `channel` recorded exactly at `frame`.
    #[must_use]
    pub fn keyframe_at(&self, node_id: &str, channel: Channel, frame: u32) -> Option<Vec3> {
        self.nodes
            .get(node_id)
            .and_then(|tracks| tracks.track(channel).keyframe_at(frame))
            .map(|kf| kf.value)
    }

    #[inline]
    #[must_use]
    pub fn contains_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Drops every node and keyframe.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
