use carousel::{Carousel, CarouselError, CarouselOptions, TransitionStyle};

use crate::{Easing, Tween};

/// One rendered frame of the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Interpolated strip offset, in percent of one slot.
    pub offset_percent: f32,
    pub active_real_index: Option<usize>,
    pub transition_style: TransitionStyle,
    pub is_animating: bool,
}

/// A framework-neutral driver that wraps a `carousel::Carousel` and samples an eased strip
/// offset every frame.
///
/// Use this when the renderer positions the strip itself (TUI, immediate-mode GUI, canvas)
/// instead of delegating the animation to CSS transitions. Adapters drive it by:
/// - forwarding user commands (`move_next`, `move_prev`, `jump_to`)
/// - calling `tick(now_ms)` each frame and drawing at the returned offset
#[derive(Clone, Debug)]
pub struct Animator<T> {
    c: Carousel<T>,
    easing: Easing,
    tween: Option<Tween>,
    offset: f32,
}

impl<T> Animator<T> {
    pub fn new(options: CarouselOptions<T>, now_ms: u64) -> Result<Self, CarouselError> {
        Ok(Self::from_carousel(Carousel::new(options, now_ms)?))
    }

    pub fn from_carousel(c: Carousel<T>) -> Self {
        let offset = c.offset_percent() as f32;
        Self {
            c,
            easing: Easing::default(),
            tween: None,
            offset,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.c
    }

    /// Direct access to the engine. Call `tick` afterwards so the offset follows any change.
    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<T> {
        self.c
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn offset_percent(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn move_next(&mut self, now_ms: u64) {
        self.c.move_next(now_ms);
        self.sync(now_ms);
    }

    pub fn move_prev(&mut self, now_ms: u64) {
        self.c.move_prev(now_ms);
        self.sync(now_ms);
    }

    pub fn jump_to(&mut self, real_index: usize, now_ms: u64) -> Result<(), CarouselError> {
        self.c.jump_to(real_index, now_ms)?;
        self.sync(now_ms);
        Ok(())
    }

    /// Tears down the engine and freezes the offset where it is.
    pub fn destroy(&mut self) {
        self.c.destroy();
        self.tween = None;
    }

    /// Advances the engine and the offset animation to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        self.c.tick(now_ms);
        self.sync(now_ms);
        Frame {
            offset_percent: self.offset,
            active_real_index: self.c.active_real_index(),
            transition_style: self.c.transition_style(),
            is_animating: self.is_animating(),
        }
    }

    fn sync(&mut self, now_ms: u64) {
        if self.c.is_destroyed() {
            return;
        }
        let target = self.c.offset_percent() as f32;

        if self.c.transition_style() == TransitionStyle::Instant {
            // Remap: both ends show the same item, so the snap is invisible.
            self.tween = None;
            self.offset = target;
            return;
        }

        let duration_ms = self.c.transition_ms();
        if let Some(tween) = self.tween.as_mut() {
            if tween.to != target {
                tween.retarget(now_ms, target, duration_ms);
            }
        } else if self.offset != target {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "carousel_adapter",
                from = self.offset,
                to = target,
                now_ms,
                "Animator: start tween"
            );
            self.tween = Some(Tween::new(
                self.offset,
                target,
                now_ms,
                duration_ms,
                self.easing,
            ));
        }

        if let Some(tween) = self.tween {
            self.offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                self.offset = target;
            }
        }
    }
}
