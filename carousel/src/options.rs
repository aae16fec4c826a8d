use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Carousel, CarouselError};

/// Default duration of a smooth move, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// A callback fired after the engine's observable state changes.
pub type OnChangeCallback<T> = Arc<dyn Fn(&Carousel<T>) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// All fields are validated when the engine is created.
pub struct CarouselOptions<T> {
    /// Source items, in display order. Must not be empty.
    pub items: Vec<T>,
    /// Auto-advance interval. `None` disables auto-advance; `Some(0)` is rejected.
    pub interval_ms: Option<u64>,
    /// Duration of a smooth move. The committed position updates once it elapses.
    pub transition_ms: u64,
    /// Optional callback fired when the carousel's state changes.
    ///
    /// Changes made within one command or `tick` are coalesced into a single call.
    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T: Clone> Clone for CarouselOptions<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            interval_ms: self.interval_ms,
            transition_ms: self.transition_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> CarouselOptions<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            interval_ms: None,
            transition_ms: DEFAULT_TRANSITION_MS,
            on_change: None,
        }
    }

    pub fn with_interval_ms(mut self, interval_ms: Option<u64>) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel<T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.items.is_empty() {
            return Err(CarouselError::EmptyItems);
        }
        if self.interval_ms == Some(0) {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(())
    }
}

impl<T> core::fmt::Debug for CarouselOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.items.len())
            .field("interval_ms", &self.interval_ms)
            .field("transition_ms", &self.transition_ms)
            .finish_non_exhaustive()
    }
}
