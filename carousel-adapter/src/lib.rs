//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and reports where the strip should be, not how it gets
//! there. This crate provides small, framework-neutral helpers for renderers that animate the
//! strip themselves:
//!
//! - Eased tweens over strip offsets
//! - An `Animator` that samples a per-frame offset, tweening smooth moves and snapping remaps
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod animator;
mod tween;


pub use animator::{Animator, Frame};
pub use tween::{Easing, Tween};
