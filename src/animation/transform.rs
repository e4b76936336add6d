use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::channel::Channel;

/// Transform snapshot of a scene node.
///
/// Rotation is stored as XYZ Euler angles in radians so that every channel
/// blends component-wise with the same linear rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    #[inline]
    #[must_use]
    pub fn channel(&self, channel: Channel) -> Vec3 {
        match channel {
            Channel::Position => self.position,
            Channel::Rotation => self.rotation,
            Channel::Scale => self.scale,
        }
    }

    #[inline]
    pub fn channel_mut(&mut self, channel: Channel) -> &mut Vec3 {
        match channel {
            Channel::Position => &mut self.position,
            Channel::Rotation => &mut self.rotation,
            Channel::Scale => &mut self.scale,
        }
    }
}

/// Per-channel result of resolving a node at a frame.
///
/// `None` means "leave this channel as it is".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedTransform {
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
}

impl ResolvedTransform {
    #[inline]
    #[must_use]
    pub fn channel(&self, channel: Channel) -> Option<Vec3> {
        match channel {
            Channel::Position => self.position,
            Channel::Rotation => self.rotation,
            Channel::Scale => self.scale,
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: Option<Vec3>) {
        match channel {
            Channel::Position => self.position = value,
            Channel::Rotation => self.rotation = value,
            Channel::Scale => self.scale = value,
        }
    }

    /// True when no channel has a value to write.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }

    /// Writes every resolved channel into `transform`, leaving the rest.
    pub fn apply_to(&self, transform: &mut Transform) {
        for channel in Channel::ALL {
            if let Some(value) = self.channel(channel) {
                *transform.channel_mut(channel) = value;
            }
        }
    }
}
