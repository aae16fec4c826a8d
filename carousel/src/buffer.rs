use alloc::vec::Vec;

use crate::CarouselError;

/// Index math for a padded carousel strip of `real_count` items.
///
/// The strip is laid out as `[head, real_0, .., real_{N-1}, tail]` where `head` shows the last
/// real item and `tail` shows the first. Buffer indexes run over `0..N + 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotLayout {
    pub real_count: usize,
}

impl SlotLayout {
    pub fn new(real_count: usize) -> Self {
        debug_assert!(real_count > 0, "SlotLayout: real_count must be >= 1");
        Self { real_count }
    }

    /// Total number of slots, including the two buffer slots.
    pub fn len(&self) -> usize {
        self.real_count + 2
    }

    pub fn is_empty(&self) -> bool {
        self.real_count == 0
    }

    pub fn head(&self) -> usize {
        0
    }

    pub fn tail(&self) -> usize {
        self.real_count + 1
    }

    pub fn first_real(&self) -> usize {
        1
    }

    pub fn last_real(&self) -> usize {
        self.real_count
    }

    pub fn contains(&self, buffer_index: usize) -> bool {
        buffer_index < self.len()
    }

    pub fn is_buffer_slot(&self, buffer_index: usize) -> bool {
        buffer_index == self.head() || buffer_index == self.tail()
    }

    /// Maps a real buffer slot (`1..=N`) to the caller's item index (`0..N`).
    pub fn real_index_of(&self, buffer_index: usize) -> Option<usize> {
        if !self.contains(buffer_index) || self.is_buffer_slot(buffer_index) {
            return None;
        }
        Some(buffer_index - 1)
    }

    pub fn buffer_index_of(&self, real_index: usize) -> Option<usize> {
        (real_index < self.real_count).then_some(real_index + 1)
    }

    /// The real slot that shows the same item as a buffer slot, on the opposite end.
    ///
    /// `head → N`, `tail → 1`. Returns `None` for real slots.
    pub fn opposite_real_slot(&self, buffer_index: usize) -> Option<usize> {
        if buffer_index == self.head() {
            Some(self.last_real())
        } else if buffer_index == self.tail() {
            Some(self.first_real())
        } else {
            None
        }
    }

    /// The caller's item index rendered at any slot, buffer slots included.
    pub fn item_index_at(&self, buffer_index: usize) -> Option<usize> {
        if !self.contains(buffer_index) {
            return None;
        }
        match self.opposite_real_slot(buffer_index) {
            Some(real_slot) => Some(real_slot - 1),
            None => Some(buffer_index - 1),
        }
    }
}

/// The caller's items wrapped with a synthetic head (a copy of the last item) and tail (a copy
/// of the first item).
///
/// The padding is virtual: only the `N` real items are stored, and buffer slots resolve to the
/// item they mirror. Use [`BufferSequence::to_vec`] if you need the materialized sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferSequence<T> {
    items: Vec<T>,
    layout: SlotLayout,
}

impl<T> BufferSequence<T> {
    pub fn build(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            cwarn!("BufferSequence::build: empty item list");
            return Err(CarouselError::EmptyItems);
        }
        let layout = SlotLayout::new(items.len());
        Ok(Self { items, layout })
    }

    pub fn layout(&self) -> SlotLayout {
        self.layout
    }

    /// Number of slots (`N + 2`).
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn real_count(&self) -> usize {
        self.items.len()
    }

    /// The caller's items, without padding.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, buffer_index: usize) -> Option<&T> {
        let i = self.layout.item_index_at(buffer_index)?;
        self.items.get(i)
    }

    pub fn real_index_of(&self, buffer_index: usize) -> Option<usize> {
        self.layout.real_index_of(buffer_index)
    }

    pub fn is_buffer_slot(&self, buffer_index: usize) -> bool {
        self.layout.is_buffer_slot(buffer_index)
    }

    /// Iterates all `N + 2` slots in strip order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        (0..self.len()).map(move |i| &self.items[self.layout.item_index_at(i).unwrap_or(0)])
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> BufferSequence<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
