use carousel::CarouselOptions;
use carousel_adapter::{Animator, Easing};

fn main() {
    // Example: a 60fps frame loop drawing the strip at an eased offset.
    //
    // An adapter would:
    // - forward clicks/keys as commands
    // - call tick(now_ms) every frame
    // - position the strip at `offset_percent` of one slot width
    let mut a = Animator::new(
        CarouselOptions::new(vec!["one", "two", "three"]).with_transition_ms(240),
        0,
    )
    .expect("valid options")
    .with_easing(Easing::SmoothStep);

    let mut now_ms = 0u64;
    for step in 0..4 {
        a.move_next(now_ms);
        loop {
            now_ms += 16;
            let frame = a.tick(now_ms);
            println!(
                "step={step} t={now_ms} offset={:.1}% style={:?} active={:?}",
                frame.offset_percent, frame.transition_style, frame.active_real_index
            );
            if !frame.is_animating && a.carousel().desired().is_none() {
                break;
            }
        }
    }
}
