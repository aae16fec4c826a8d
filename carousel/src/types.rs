/// How the renderer should move the strip toward the target offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionStyle {
    /// Animate over the configured transition duration.
    #[default]
    Smooth,
    /// Jump without animation. The renderer must paint at least one frame with transitions
    /// disabled before re-enabling them.
    Instant,
}

/// Engine phase as seen by the renderer.
///
/// Committing happens inside `tick` and is never observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// A smooth move is in flight and commits once the transition duration elapses.
    Transitioning,
    /// `current` landed on a buffer slot; an instant move to the mirrored real slot commits on
    /// the next tick.
    Remapping,
}

/// Read-only projection of the engine state for a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub current: usize,
    pub desired: Option<usize>,
    pub phase: Phase,
    pub transition_style: TransitionStyle,
    /// Strip offset in percent of one slot: `-100 * (desired or current)`.
    pub offset_percent: i64,
    /// `None` while `current` is a buffer slot (suppress indicator highlighting).
    pub active_real_index: Option<usize>,
}

impl Snapshot {
    /// The slot the strip is moving to (or resting at).
    pub fn target(&self) -> usize {
        self.desired.unwrap_or(self.current)
    }
}

/// One slot of the padded strip, yielded by `Carousel::for_each_slot`.
#[derive(Debug)]
pub struct Slot<'a, T> {
    pub buffer_index: usize,
    /// The caller's index for the item shown in this slot (buffer slots mirror a real item).
    pub item_index: usize,
    pub is_buffer: bool,
    pub item: &'a T,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

/// A position indicator ("dot") for one real item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub real_index: usize,
    pub active: bool,
}
