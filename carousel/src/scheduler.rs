/// A cancellable one-shot deadline on the caller's millisecond clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    deadline_ms: Option<u64>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)starts the countdown; any previous deadline is replaced.
    pub fn start(&mut self, now_ms: u64, duration_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(duration_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        self.deadline_ms.is_some_and(|d| now_ms >= d)
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }
}

/// Auto-advance timer.
///
/// Holds at most one countdown. `reset` restarts it for a full interval, so auto-advance always
/// waits `interval_ms` after the most recent movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scheduler {
    interval_ms: Option<u64>,
    paused: bool,
    countdown: Countdown,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms auto-advance with `interval_ms`, starting a fresh countdown at `now_ms`.
    ///
    /// `0` is treated as "disarmed".
    pub fn arm(&mut self, interval_ms: u64, now_ms: u64) {
        if interval_ms == 0 {
            self.disarm();
            return;
        }
        self.interval_ms = Some(interval_ms);
        self.restart(now_ms);
        ctrace!(interval_ms, now_ms, "Scheduler::arm");
    }

    /// Cancels any pending countdown and forgets the interval. Safe to call repeatedly.
    pub fn disarm(&mut self) {
        self.interval_ms = None;
        self.paused = false;
        self.countdown.cancel();
    }

    /// Cancels and restarts the countdown if armed and not paused.
    pub fn reset(&mut self, now_ms: u64) {
        self.restart(now_ms);
    }

    /// Stops the countdown but keeps the interval, so `resume` can re-arm it.
    pub fn pause(&mut self) {
        if self.interval_ms.is_none() {
            return;
        }
        self.paused = true;
        self.countdown.cancel();
    }

    /// Restarts a full interval from `now_ms` after `pause`.
    pub fn resume(&mut self, now_ms: u64) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.restart(now_ms);
    }

    /// Returns `true` if the countdown expired, and re-arms it for the next interval.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.countdown.is_due(now_ms) {
            return false;
        }
        self.restart(now_ms);
        true
    }

    pub fn interval_ms(&self) -> Option<u64> {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.countdown.is_pending()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn deadline(&self) -> Option<u64> {
        self.countdown.deadline()
    }

    fn restart(&mut self, now_ms: u64) {
        self.countdown.cancel();
        if self.paused {
            return;
        }
        if let Some(interval_ms) = self.interval_ms {
            self.countdown.start(now_ms, interval_ms);
        }
    }
}
