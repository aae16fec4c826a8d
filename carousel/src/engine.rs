use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::navigator::{commit, reduce};
use crate::options::OnChangeCallback;
use crate::{
    BufferSequence, CarouselError, CarouselOptions, CarouselState, Command, Countdown, Indicator,
    Phase, Scheduler, Slot, SlotLayout, Snapshot, TransitionStyle,
};

/// A headless infinite-loop carousel.
///
/// The engine holds no UI objects and no OS timers. Your adapter drives it by:
/// - forwarding user commands (`move_next`, `move_prev`, `jump_to`)
/// - calling `tick(now_ms)` from its frame loop or timer (commits transitions, remaps buffer
///   slots, fires auto-advance)
/// - rendering from `snapshot()` / `for_each_slot`
///
/// Time is a caller-supplied monotonic millisecond clock.
#[derive(Clone)]
pub struct Carousel<T> {
    buffer: BufferSequence<T>,
    state: CarouselState,
    phase: Phase,
    transition_ms: u64,
    transition: Countdown,
    scheduler: Scheduler,
    destroyed: bool,
    on_change: Option<OnChangeCallback<T>>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T> Carousel<T> {
    /// Validates `options`, builds the buffer and arms auto-advance (if configured) at `now_ms`.
    ///
    /// The carousel starts idle on the first item.
    pub fn new(options: CarouselOptions<T>, now_ms: u64) -> Result<Self, CarouselError> {
        options.validate()?;
        let CarouselOptions {
            items,
            interval_ms,
            transition_ms,
            on_change,
        } = options;

        let buffer = BufferSequence::build(items)?;
        let mut scheduler = Scheduler::new();
        if let Some(interval_ms) = interval_ms {
            scheduler.arm(interval_ms, now_ms);
        }
        cdebug!(
            count = buffer.real_count(),
            ?interval_ms,
            transition_ms,
            "Carousel::new"
        );

        Ok(Self {
            state: CarouselState::initial(buffer.layout()),
            buffer,
            phase: Phase::Idle,
            transition_ms,
            transition: Countdown::new(),
            scheduler,
            destroyed: false,
            on_change,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn buffer(&self) -> &BufferSequence<T> {
        &self.buffer
    }

    pub fn items(&self) -> &[T] {
        self.buffer.items()
    }

    pub fn layout(&self) -> SlotLayout {
        self.buffer.layout()
    }

    pub fn real_count(&self) -> usize {
        self.buffer.real_count()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn desired(&self) -> Option<usize> {
        self.state.desired
    }

    pub fn transition_style(&self) -> TransitionStyle {
        self.state.transition_style
    }

    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    pub fn interval_ms(&self) -> Option<u64> {
        self.scheduler.interval_ms()
    }

    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The caller's index of the item at `current`, or `None` while on a buffer slot.
    pub fn active_real_index(&self) -> Option<usize> {
        self.layout().real_index_of(self.state.current)
    }

    pub fn active_item(&self) -> Option<&T> {
        let i = self.active_real_index()?;
        self.items().get(i)
    }

    /// Strip offset, in percent of one slot, the renderer should move toward.
    pub fn offset_percent(&self) -> i64 {
        let target = self.state.desired.unwrap_or(self.state.current);
        -100 * target as i64
    }

    /// CSS `transition` value for the strip: `none` while remapping.
    pub fn transition_css(&self) -> String {
        match self.state.transition_style {
            TransitionStyle::Instant => String::from("none"),
            TransitionStyle::Smooth => format!("transform {}ms ease-in-out", self.transition_ms),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.state.current,
            desired: self.state.desired,
            phase: self.phase,
            transition_style: self.state.transition_style,
            offset_percent: self.offset_percent(),
            active_real_index: self.active_real_index(),
        }
    }

    /// Earliest pending deadline (transition commit or auto-advance), if any.
    ///
    /// A host that sleeps between ticks should wake no later than this.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.transition.deadline(), self.scheduler.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Calls `f` for every slot of the padded strip, in strip order.
    pub fn for_each_slot(&self, mut f: impl FnMut(Slot<'_, T>)) {
        let layout = self.layout();
        let items = self.items();
        for buffer_index in 0..layout.len() {
            let Some(item_index) = layout.item_index_at(buffer_index) else {
                continue;
            };
            f(Slot {
                buffer_index,
                item_index,
                is_buffer: layout.is_buffer_slot(buffer_index),
                item: &items[item_index],
            });
        }
    }

    /// Calls `f` for one indicator per real item.
    ///
    /// No indicator is active while `current` sits on a buffer slot.
    pub fn for_each_indicator(&self, mut f: impl FnMut(Indicator)) {
        let active = self.active_real_index();
        for real_index in 0..self.real_count() {
            f(Indicator {
                real_index,
                active: active == Some(real_index),
            });
        }
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        let mut out = Vec::with_capacity(self.real_count());
        self.for_each_indicator(|it| out.push(it));
        out
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel<T>) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn move_next(&mut self, now_ms: u64) {
        self.dispatch(Command::MoveNext, now_ms);
    }

    pub fn move_prev(&mut self, now_ms: u64) {
        self.dispatch(Command::MovePrev, now_ms);
    }

    /// Smoothly moves to the caller's item `real_index` (`0..N`).
    pub fn jump_to(&mut self, real_index: usize, now_ms: u64) -> Result<(), CarouselError> {
        if self.destroyed {
            return Err(CarouselError::Destroyed);
        }
        let count = self.real_count();
        if real_index >= count {
            cwarn!(real_index, count, "Carousel::jump_to: out of range");
            return Err(CarouselError::IndexOutOfRange {
                index: real_index,
                count,
            });
        }
        self.dispatch(Command::JumpTo(real_index), now_ms);
        Ok(())
    }

    /// Advances timers to `now_ms`.
    ///
    /// In order: commits a pending remap, commits a due transition (entering `Remapping` when it
    /// lands on a buffer slot), then fires auto-advance if due. Returns `true` if the observable
    /// state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.destroyed {
            return false;
        }
        let mut changed = false;
        self.batch_update(|c| {
            if c.finish_remap(now_ms) {
                changed = true;
            } else if c.phase == Phase::Transitioning && c.transition.is_due(now_ms) {
                c.commit_transition(now_ms);
                changed = true;
            }

            if c.phase != Phase::Remapping && c.scheduler.poll(now_ms) {
                ctrace!(now_ms, "Carousel::tick: auto-advance");
                changed |= c.apply(Command::MoveNext, now_ms);
            }
        });
        changed
    }

    /// Suspends auto-advance (e.g. while the pointer hovers the carousel).
    pub fn pause(&mut self) {
        if self.destroyed || self.scheduler.is_paused() || self.scheduler.interval_ms().is_none() {
            return;
        }
        self.scheduler.pause();
        self.notify();
    }

    /// Resumes auto-advance; the next automatic move waits a full interval from `now_ms`.
    pub fn resume(&mut self, now_ms: u64) {
        if self.destroyed || !self.scheduler.is_paused() {
            return;
        }
        self.scheduler.resume(now_ms);
        self.notify();
    }

    /// Changes (or disables, with `None`) the auto-advance interval, restarting the countdown.
    pub fn set_interval(
        &mut self,
        interval_ms: Option<u64>,
        now_ms: u64,
    ) -> Result<(), CarouselError> {
        if self.destroyed {
            return Err(CarouselError::Destroyed);
        }
        match interval_ms {
            Some(0) => return Err(CarouselError::ZeroInterval),
            Some(interval_ms) => self.scheduler.arm(interval_ms, now_ms),
            None => self.scheduler.disarm(),
        }
        self.notify();
        Ok(())
    }

    /// Reinitializes with new data: cancels all timers, rebuilds the buffer and returns to the
    /// first item. Auto-advance is re-armed with the current interval.
    ///
    /// On error the carousel is left untouched.
    pub fn set_items(&mut self, items: Vec<T>, now_ms: u64) -> Result<(), CarouselError> {
        if self.destroyed {
            return Err(CarouselError::Destroyed);
        }
        let buffer = BufferSequence::build(items)?;
        let interval_ms = self.scheduler.interval_ms();

        self.transition.cancel();
        self.scheduler.disarm();

        self.buffer = buffer;
        self.state = CarouselState::initial(self.buffer.layout());
        self.phase = Phase::Idle;
        if let Some(interval_ms) = interval_ms {
            self.scheduler.arm(interval_ms, now_ms);
        }
        cdebug!(count = self.real_count(), "Carousel::set_items");
        self.notify();
        Ok(())
    }

    /// Tears the engine down: cancels every pending timer and drops any pending transition.
    ///
    /// Idempotent. Afterwards commands and `tick` are ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.scheduler.disarm();
        self.transition.cancel();
        self.state.desired = None;
        self.state.transition_style = TransitionStyle::Smooth;
        self.phase = Phase::Idle;
        self.destroyed = true;
        cdebug!("Carousel::destroy");
    }

    fn dispatch(&mut self, command: Command, now_ms: u64) {
        if self.destroyed {
            cdebug!(?command, "Carousel: command after destroy ignored");
            return;
        }
        self.batch_update(|c| {
            c.apply(command, now_ms);
        });
    }

    /// Applies a navigation command. A pending remap is committed first so the command never
    /// starts from a buffer slot.
    fn apply(&mut self, command: Command, now_ms: u64) -> bool {
        let remapped = self.finish_remap(now_ms);

        let next = reduce(self.state, command, self.layout());
        if next == self.state {
            return remapped;
        }
        if next.desired == Some(self.state.current) && !self.state.is_pending() {
            return remapped;
        }

        self.state = next;
        self.phase = Phase::Transitioning;
        self.transition.start(now_ms, self.transition_ms);
        self.scheduler.reset(now_ms);
        ctrace!(?command, desired = ?self.state.desired, now_ms, "Carousel::apply");
        self.notify();
        true
    }

    fn commit_transition(&mut self, now_ms: u64) {
        self.state = commit(self.state);
        self.transition.cancel();
        self.scheduler.reset(now_ms);
        ctrace!(current = self.state.current, now_ms, "Carousel: commit");

        if self.layout().is_buffer_slot(self.state.current) {
            self.state = reduce(self.state, Command::Remap, self.layout());
            self.phase = Phase::Remapping;
            // Zero-length instant transition; it commits on the next tick so the renderer can
            // paint one frame with transitions disabled.
            self.transition.start(now_ms, 0);
            ctrace!(
                from = self.state.current,
                to = ?self.state.desired,
                "Carousel: remap"
            );
        } else {
            self.state.transition_style = TransitionStyle::Smooth;
            self.phase = Phase::Idle;
        }
        self.notify();
    }

    fn finish_remap(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Remapping {
            return false;
        }
        self.state = commit(self.state);
        self.state.transition_style = TransitionStyle::Smooth;
        self.phase = Phase::Idle;
        self.transition.cancel();
        self.scheduler.reset(now_ms);
        ctrace!(current = self.state.current, now_ms, "Carousel: remap committed");
        self.notify();
        true
    }
}

impl<T> core::fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("count", &self.real_count())
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("transition_ms", &self.transition_ms)
            .field("transition", &self.transition)
            .field("scheduler", &self.scheduler)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
