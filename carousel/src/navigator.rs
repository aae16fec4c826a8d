use crate::{SlotLayout, TransitionStyle};

/// A navigation command processed by [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    MoveNext,
    MovePrev,
    /// Jump to a real (caller) index `0..N`.
    JumpTo(usize),
    /// Issued by the engine only, once `current` has settled on a buffer slot.
    Remap,
}

/// The mutable navigation record owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current: usize,
    pub desired: Option<usize>,
    pub transition_style: TransitionStyle,
}

impl CarouselState {
    /// Resting on the first real item.
    pub fn initial(layout: SlotLayout) -> Self {
        Self {
            current: layout.first_real(),
            desired: None,
            transition_style: TransitionStyle::Smooth,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.desired.is_some()
    }
}

/// Computes the next state for `command`.
///
/// A pending `desired` is overwritten, never queued. Invalid commands (`JumpTo` out of range,
/// `Remap` from a real slot) leave the state unchanged.
pub fn reduce(state: CarouselState, command: Command, layout: SlotLayout) -> CarouselState {
    let len = layout.len();
    let (desired, transition_style) = match command {
        Command::MoveNext => ((state.current + 1) % len, TransitionStyle::Smooth),
        Command::MovePrev => ((state.current + len - 1) % len, TransitionStyle::Smooth),
        Command::JumpTo(real_index) => match layout.buffer_index_of(real_index) {
            Some(slot) => (slot, TransitionStyle::Smooth),
            None => {
                cwarn!(
                    real_index,
                    count = layout.real_count,
                    "reduce: JumpTo out of range"
                );
                return state;
            }
        },
        Command::Remap => match layout.opposite_real_slot(state.current) {
            Some(slot) => (slot, TransitionStyle::Instant),
            None => {
                cwarn!(current = state.current, "reduce: Remap from a real slot");
                return state;
            }
        },
    };

    ctrace!(?command, current = state.current, desired, "reduce");
    CarouselState {
        current: state.current,
        desired: Some(desired),
        transition_style,
    }
}

/// Settles a pending transition: `current := desired`, `desired := None`.
pub fn commit(state: CarouselState) -> CarouselState {
    match state.desired {
        Some(desired) => CarouselState {
            current: desired,
            desired: None,
            transition_style: state.transition_style,
        },
        None => state,
    }
}
