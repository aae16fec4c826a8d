/// Errors reported by the carousel engine.
///
/// None of these are recoverable at runtime: they signal a configuration or call-site mistake
/// that the caller must fix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The item list was empty. A carousel needs at least one item to build its buffer.
    #[error("carousel requires at least one item")]
    EmptyItems,
    /// `interval_ms` was `Some(0)`. Use `None` to disable auto-advance.
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
    /// A real index passed to `jump_to` was not in `0..count`.
    #[error("index {index} is out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },
    /// The engine was torn down with `destroy()`.
    #[error("carousel has been destroyed")]
    Destroyed,
}
