// Example: manual navigation through the wrap-around boundary.
use carousel::{Carousel, CarouselOptions, Phase};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(vec!["A", "B", "C"]), 0)
        .expect("item list must not be empty");

    let mut strip = Vec::new();
    c.for_each_slot(|s| strip.push(*s.item));
    println!("strip={strip:?}");

    let mut now_ms = 0u64;
    for _ in 0..4 {
        c.move_next(now_ms);
        println!(
            "t={now_ms} command: desired={:?} offset={}% transition={}",
            c.desired(),
            c.offset_percent(),
            c.transition_css()
        );

        now_ms += c.transition_ms();
        c.tick(now_ms);
        if c.phase() == Phase::Remapping {
            // A renderer paints this frame with transitions disabled.
            println!(
                "t={now_ms} remap: current={} -> {:?} transition={}",
                c.current(),
                c.desired(),
                c.transition_css()
            );
            c.tick(now_ms);
        }
        println!(
            "t={now_ms} settled: current={} active={:?} item={:?}",
            c.current(),
            c.active_real_index(),
            c.active_item()
        );
    }
}
