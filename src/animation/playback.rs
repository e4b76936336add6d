use crate::settings::DEFAULT_TOTAL_FRAMES;

/// What a single [`tick`](crate::animation::AnimationEditor::tick) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Play flag was off; nothing changed.
    Paused,
    /// `frame` was resolved and applied, and the counter moved past it.
    Advanced { frame: u32 },
    /// The counter was on the last frame and went back to 0 without
    /// resolving anything.
    Wrapped,
}

/// Selection, frame counter and play flag of an editing session.
///
/// The counter always stays in `[0, total_frames)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    selected: Option<String>,
    current_frame: u32,
    playing: bool,
    total_frames: u32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_FRAMES)
    }
}

impl AnimationState {
    /// `total_frames` of zero is bumped to one so the counter stays defined;
    /// callers validate the configured value before getting here.
    #[must_use]
    pub fn new(total_frames: u32) -> Self {
        Self {
            selected: None,
            current_frame: 0,
            playing: false,
            total_frames: total_frames.max(1),
        }
    }

    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    #[must_use]
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Returns `true` if the selection actually changed.
    pub(crate) fn select(&mut self, node_id: Option<&str>) -> bool {
        if self.selected.as_deref() == node_id {
            return false;
        }
        self.selected = node_id.map(str::to_owned);
        true
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Whether a tick on the current frame should resolve and advance, as
    /// opposed to wrapping.
    #[inline]
    pub(crate) fn can_advance(&self) -> bool {
        self.current_frame < self.total_frames - 1
    }

    /// Moves to the next frame, wrapping to 0 at `total_frames`.
    pub(crate) fn step(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.total_frames;
    }

    pub(crate) fn rewind(&mut self) {
        self.current_frame = 0;
    }
}
