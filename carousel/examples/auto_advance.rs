// Example: auto-advance driven by a host loop that sleeps until the next deadline.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use carousel::{Carousel, CarouselOptions};

fn main() {
    let changes = Arc::new(AtomicUsize::new(0));
    let opts = CarouselOptions::new(vec!["sunrise", "noon", "sunset", "night"])
        .with_interval_ms(Some(3_000))
        .with_transition_ms(400)
        .with_on_change(Some({
            let changes = Arc::clone(&changes);
            move |c: &Carousel<&'static str>| {
                changes.fetch_add(1, Ordering::Relaxed);
                let dots: String = c
                    .indicators()
                    .iter()
                    .map(|i| if i.active { '●' } else { '○' })
                    .collect();
                println!("  {dots} phase={:?}", c.phase());
            }
        }));

    let mut c = Carousel::new(opts, 0).expect("valid options");

    // Simulated clock: jump straight to each deadline instead of sleeping.
    let mut now_ms = 0u64;
    let mut hovered = false;
    while now_ms < 20_000 {
        let Some(deadline) = c.next_deadline() else {
            if c.is_paused() {
                // The pointer leaves two seconds later.
                now_ms += 2_000;
                c.resume(now_ms);
                println!("t={now_ms} resumed");
                continue;
            }
            break;
        };
        now_ms = now_ms.max(deadline);
        if c.tick(now_ms) {
            println!("t={now_ms} active={:?}", c.active_item());
        }

        if !hovered && now_ms >= 9_000 {
            hovered = true;
            c.pause();
            println!("t={now_ms} paused");
        }
    }

    c.destroy();
    println!(
        "done: changes={} pending={:?}",
        changes.load(Ordering::Relaxed),
        c.next_deadline()
    );
}
