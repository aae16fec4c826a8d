// Example: engine logs via `tracing` (run with `--features tracing`).
//
//   RUST_LOG=carousel=trace cargo run -p carousel --example trace_log --features tracing
use carousel::{Carousel, CarouselOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carousel=trace")),
        )
        .init();

    let mut c = Carousel::new(
        CarouselOptions::new(vec![1, 2]).with_interval_ms(Some(1_000)),
        0,
    )
    .expect("valid options");

    for now_ms in (0..=5_000).step_by(100) {
        c.tick(now_ms);
    }
    if let Err(err) = c.jump_to(9, 5_000) {
        tracing::error!(%err, "jump_to rejected");
    }
    c.destroy();
}
