//! A headless infinite-loop carousel engine.
//!
//! For frame-driven offset animation (renderers without CSS transitions), see the
//! `carousel-adapter` crate.
//!
//! The engine pads the caller's items with a synthetic head (a copy of the last item) and tail
//! (a copy of the first item). Moves animate into these buffer slots and are then silently
//! remapped to the mirrored real slot, which gives the illusion of endless circular navigation.
//! An optional auto-advance timer issues "move next" after a fixed interval of inactivity.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - a monotonic millisecond clock (`now_ms`) on every command and `tick`
//! - rendering of each slot, positioned by `offset_percent` and `transition_style`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod buffer;
mod engine;
mod error;
mod navigator;
mod options;
mod scheduler;
mod types;

#[cfg(test)]
mod tests;

pub use buffer::{BufferSequence, SlotLayout};
pub use engine::Carousel;
pub use error::CarouselError;
pub use navigator::{CarouselState, Command, commit, reduce};
pub use options::{CarouselOptions, DEFAULT_TRANSITION_MS, OnChangeCallback};
pub use scheduler::{Countdown, Scheduler};
pub use types::{Indicator, Phase, Slot, Snapshot, TransitionStyle};
