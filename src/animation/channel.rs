use serde::{Deserialize, Serialize};

/// One independently keyed component of a node's transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Position, // translation units
    Rotation, // Euler XYZ, radians
    Scale,    // scale factor
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Position, Channel::Rotation, Channel::Scale];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Channel::Position => "position",
            Channel::Rotation => "rotation",
            Channel::Scale => "scale",
        }
    }
}
