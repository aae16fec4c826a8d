use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

const T_MS: u64 = 500;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }
}

fn abc() -> Carousel<char> {
    Carousel::new(CarouselOptions::new(vec!['A', 'B', 'C']), 0).unwrap()
}

/// Issues `move_next` at `now` and ticks until the move (and any remap) has settled.
fn step_next(c: &mut Carousel<char>, now: &mut u64) {
    c.move_next(*now);
    settle(c, now);
}

fn step_prev(c: &mut Carousel<char>, now: &mut u64) {
    c.move_prev(*now);
    settle(c, now);
}

fn settle(c: &mut Carousel<char>, now: &mut u64) {
    *now += c.transition_ms();
    c.tick(*now);
    if c.phase() == Phase::Remapping {
        c.tick(*now);
    }
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn layout_maps_buffer_and_real_slots() {
    let l = SlotLayout::new(3);
    assert_eq!(l.len(), 5);
    assert!(l.is_buffer_slot(0));
    assert!(l.is_buffer_slot(4));
    assert!(!l.is_buffer_slot(1));
    assert_eq!(l.real_index_of(0), None);
    assert_eq!(l.real_index_of(1), Some(0));
    assert_eq!(l.real_index_of(3), Some(2));
    assert_eq!(l.real_index_of(4), None);
    assert_eq!(l.real_index_of(5), None);
    assert_eq!(l.buffer_index_of(2), Some(3));
    assert_eq!(l.buffer_index_of(3), None);
    assert_eq!(l.opposite_real_slot(0), Some(3));
    assert_eq!(l.opposite_real_slot(4), Some(1));
    assert_eq!(l.opposite_real_slot(2), None);
}

#[test]
fn buffer_wraps_items_with_head_and_tail() {
    let b = BufferSequence::build(vec!['A', 'B', 'C']).unwrap();
    assert_eq!(b.len(), 5);
    assert_eq!(b.real_count(), 3);
    assert_eq!(b.to_vec(), vec!['C', 'A', 'B', 'C', 'A']);
    assert_eq!(b.get(0), Some(&'C'));
    assert_eq!(b.get(4), Some(&'A'));
    assert_eq!(b.get(5), None);
    assert_eq!(b.iter().len(), 5);
    assert_eq!(b.items(), &['A', 'B', 'C']);
}

#[test]
fn buffer_rejects_empty_items() {
    assert_eq!(
        BufferSequence::<u8>::build(Vec::new()),
        Err(CarouselError::EmptyItems)
    );
}

#[test]
fn single_item_buffer_repeats_the_item() {
    let b = BufferSequence::build(vec!['A']).unwrap();
    assert_eq!(b.to_vec(), vec!['A', 'A', 'A']);
}

#[test]
fn reduce_steps_with_modular_arithmetic() {
    let l = SlotLayout::new(3);
    let s = CarouselState::initial(l);
    assert_eq!(s.current, 1);

    let n = reduce(s, Command::MoveNext, l);
    assert_eq!(n.desired, Some(2));
    assert_eq!(n.transition_style, TransitionStyle::Smooth);

    let p = reduce(s, Command::MovePrev, l);
    assert_eq!(p.desired, Some(0));

    let tail = CarouselState {
        current: 4,
        desired: None,
        transition_style: TransitionStyle::Smooth,
    };
    assert_eq!(reduce(tail, Command::MoveNext, l).desired, Some(0));
    let head = CarouselState { current: 0, ..tail };
    assert_eq!(reduce(head, Command::MovePrev, l).desired, Some(4));
}

#[test]
fn reduce_jump_to_sets_buffer_index_directly() {
    let l = SlotLayout::new(3);
    let s = CarouselState::initial(l);
    let j = reduce(s, Command::JumpTo(2), l);
    assert_eq!(j.desired, Some(3));
    assert_eq!(j.current, 1);

    // Out of range leaves the state untouched.
    assert_eq!(reduce(s, Command::JumpTo(3), l), s);
}

#[test]
fn reduce_remap_is_instant_and_only_from_buffer_slots() {
    let l = SlotLayout::new(3);
    let tail = CarouselState {
        current: 4,
        desired: None,
        transition_style: TransitionStyle::Smooth,
    };
    let r = reduce(tail, Command::Remap, l);
    assert_eq!(r.desired, Some(1));
    assert_eq!(r.transition_style, TransitionStyle::Instant);

    let head = CarouselState { current: 0, ..tail };
    assert_eq!(reduce(head, Command::Remap, l).desired, Some(3));

    let real = CarouselState { current: 2, ..tail };
    assert_eq!(reduce(real, Command::Remap, l), real);
}

#[test]
fn reduce_overwrites_pending_desired() {
    let l = SlotLayout::new(5);
    let s = reduce(CarouselState::initial(l), Command::MoveNext, l);
    let s = reduce(s, Command::JumpTo(4), l);
    assert_eq!(s.desired, Some(5));
    assert_eq!(commit(s).current, 5);
    assert_eq!(commit(s).desired, None);
}

#[test]
fn new_rejects_invalid_options() {
    assert_eq!(
        Carousel::<u8>::new(CarouselOptions::new(Vec::new()), 0).err(),
        Some(CarouselError::EmptyItems)
    );
    assert_eq!(
        Carousel::new(CarouselOptions::new(vec![1]).with_interval_ms(Some(0)), 0).err(),
        Some(CarouselError::ZeroInterval)
    );
}

#[test]
fn initial_state_is_idle_on_first_item() {
    let c = abc();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.current(), 1);
    assert_eq!(c.desired(), None);
    assert_eq!(c.active_real_index(), Some(0));
    assert_eq!(c.active_item(), Some(&'A'));
    assert_eq!(c.offset_percent(), -100);
    assert_eq!(c.transition_ms(), DEFAULT_TRANSITION_MS);
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn move_next_commits_after_transition_duration() {
    let mut c = abc();
    c.move_next(0);
    assert_eq!(c.phase(), Phase::Transitioning);
    assert_eq!(c.desired(), Some(2));
    assert_eq!(c.offset_percent(), -200);
    assert_eq!(c.active_real_index(), Some(0));
    assert_eq!(c.next_deadline(), Some(T_MS));

    assert!(!c.tick(T_MS - 1));
    assert_eq!(c.current(), 1);

    assert!(c.tick(T_MS));
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.current(), 2);
    assert_eq!(c.desired(), None);
    assert_eq!(c.active_real_index(), Some(1));
}

#[test]
fn scenario_three_items_wraps_through_tail() {
    let mut c = abc();
    let mut now = 0;
    assert_eq!(c.active_real_index(), Some(0));

    step_next(&mut c, &mut now);
    assert_eq!(c.active_real_index(), Some(1));
    step_next(&mut c, &mut now);
    assert_eq!(c.active_real_index(), Some(2));

    c.move_next(now);
    assert_eq!(c.desired(), Some(4));
    assert_eq!(c.transition_style(), TransitionStyle::Smooth);
    now += T_MS;
    assert!(c.tick(now));

    // Landed on the tail buffer slot: an instant remap is pending.
    assert_eq!(c.phase(), Phase::Remapping);
    assert_eq!(c.current(), 4);
    assert_eq!(c.desired(), Some(1));
    assert_eq!(c.transition_style(), TransitionStyle::Instant);
    assert_eq!(c.transition_css(), "none");
    assert_eq!(c.active_real_index(), None);

    assert!(c.tick(now));
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.current(), 1);
    assert_eq!(c.active_real_index(), Some(0));
    assert_eq!(c.transition_style(), TransitionStyle::Smooth);
    assert_eq!(c.transition_css(), "transform 500ms ease-in-out");
}

#[test]
fn move_prev_from_first_item_wraps_through_head() {
    let mut c = abc();
    c.move_prev(0);
    assert_eq!(c.desired(), Some(0));
    c.tick(T_MS);
    assert_eq!(c.phase(), Phase::Remapping);
    assert_eq!(c.desired(), Some(3));
    c.tick(T_MS);
    assert_eq!(c.current(), 3);
    assert_eq!(c.active_real_index(), Some(2));
}

#[test]
fn scenario_jump_to_does_not_remap() {
    let mut c = abc();
    c.jump_to(2, 0).unwrap();
    assert_eq!(c.desired(), Some(3));
    c.tick(T_MS);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.current(), 3);
    assert_eq!(c.active_real_index(), Some(2));
}

#[test]
fn jump_to_rejects_out_of_range() {
    let mut c = abc();
    assert_eq!(
        c.jump_to(3, 0),
        Err(CarouselError::IndexOutOfRange { index: 3, count: 3 })
    );
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn jump_to_current_item_is_a_no_op() {
    let mut c = abc();
    c.jump_to(0, 0).unwrap();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.desired(), None);
}

#[test]
fn scenario_single_item_always_reports_index_zero() {
    let mut c = Carousel::new(CarouselOptions::new(vec!['A']), 0).unwrap();
    let mut now = 0;
    for _ in 0..5 {
        step_next(&mut c, &mut now);
        assert_eq!(c.active_real_index(), Some(0));
        assert_eq!(c.current(), 1);
    }
    for _ in 0..3 {
        step_prev(&mut c, &mut now);
        assert_eq!(c.active_real_index(), Some(0));
    }
}

#[test]
fn wrap_invariant_n_moves_return_to_start() {
    for n in 1..=6usize {
        let items: Vec<char> = (0..n).map(|i| (b'a' + i as u8) as char).collect();
        let mut c = Carousel::new(CarouselOptions::new(items), 0).unwrap();
        let mut now = 0;
        let start = c.active_real_index();
        for _ in 0..n {
            step_next(&mut c, &mut now);
        }
        assert_eq!(c.active_real_index(), start, "n={n}");
        assert_eq!(c.current(), 1);
    }
}

#[test]
fn move_prev_undoes_move_next() {
    let mut c = Carousel::new(CarouselOptions::new(vec!['A', 'B', 'C', 'D']), 0).unwrap();
    let mut now = 0;
    for start in 0..4 {
        c.jump_to(start, now).unwrap();
        settle(&mut c, &mut now);
        let before = c.active_real_index();
        step_next(&mut c, &mut now);
        step_prev(&mut c, &mut now);
        assert_eq!(c.active_real_index(), before, "start={start}");
    }
}

#[test]
fn new_command_overwrites_pending_transition() {
    let mut c = abc();
    c.move_next(0);
    c.move_next(100);
    assert_eq!(c.desired(), Some(2));
    c.jump_to(2, 200).unwrap();
    assert_eq!(c.desired(), Some(3));

    // The overwriting command restarts the transition window.
    assert!(!c.tick(T_MS));
    assert!(c.tick(200 + T_MS));
    assert_eq!(c.active_real_index(), Some(2));
}

#[test]
fn command_during_remap_commits_remap_first() {
    let mut c = abc();
    c.jump_to(2, 0).unwrap();
    c.tick(T_MS);
    c.move_next(T_MS);
    c.tick(2 * T_MS);
    assert_eq!(c.phase(), Phase::Remapping);

    c.move_next(2 * T_MS);
    assert_eq!(c.phase(), Phase::Transitioning);
    assert_eq!(c.current(), 1);
    assert_eq!(c.desired(), Some(2));
    assert_eq!(c.transition_style(), TransitionStyle::Smooth);
}

#[test]
fn remap_is_visible_for_one_tick() {
    let mut c = abc();
    c.move_prev(0);
    c.tick(T_MS);
    let snap = c.snapshot();
    assert_eq!(snap.phase, Phase::Remapping);
    assert_eq!(snap.transition_style, TransitionStyle::Instant);
    assert_eq!(snap.offset_percent, -300);
    assert_eq!(snap.active_real_index, None);
    assert_eq!(c.next_deadline(), Some(T_MS));

    c.tick(T_MS);
    let snap = c.snapshot();
    assert_eq!(snap.phase, Phase::Idle);
    assert_eq!(snap.offset_percent, -300);
    assert_eq!(snap.target(), 3);
}

#[test]
fn auto_advance_moves_next_each_interval() {
    let mut c =
        Carousel::new(CarouselOptions::new(vec!['A', 'B', 'C']).with_interval_ms(Some(3000)), 0)
            .unwrap();
    assert_eq!(c.next_deadline(), Some(3000));

    assert!(!c.tick(2999));
    assert!(c.tick(3000));
    assert_eq!(c.phase(), Phase::Transitioning);
    assert_eq!(c.desired(), Some(2));

    c.tick(3000 + T_MS);
    assert_eq!(c.active_real_index(), Some(1));
    // The commit moved `current`, so the countdown restarted from it.
    assert_eq!(c.next_deadline(), Some(3000 + T_MS + 3000));
}

#[test]
fn manual_move_resets_auto_advance() {
    let s = 3000;
    let mut c =
        Carousel::new(CarouselOptions::new(vec!['A', 'B', 'C']).with_interval_ms(Some(s)), 0)
            .unwrap();

    let t = 2000;
    c.move_next(t);
    c.tick(t + T_MS);
    assert_eq!(c.active_real_index(), Some(1));

    let mut now = t + T_MS;
    while now < t + s {
        now += 10;
        c.tick(now);
        if now < t + s {
            assert_ne!(c.phase(), Phase::Transitioning, "auto-advance fired at {now}");
        }
    }
    assert!(c.next_deadline().unwrap() >= t + s);
}

#[test]
fn auto_advance_wraps_around() {
    let mut c = Carousel::new(
        CarouselOptions::new(vec!['A', 'B'])
            .with_interval_ms(Some(1000))
            .with_transition_ms(100),
        0,
    )
    .unwrap();
    let mut seen = Vec::new();
    for now in (0..=10_000).step_by(10) {
        if c.tick(now) && c.phase() == Phase::Idle {
            seen.push(c.active_real_index());
        }
    }
    assert!(seen.len() >= 4);
    assert!(seen.iter().all(|i| i.is_some()));
    for w in seen.windows(2) {
        assert_ne!(w[0], w[1]);
    }
}

#[test]
fn pause_and_resume_auto_advance() {
    let mut c =
        Carousel::new(CarouselOptions::new(vec![1, 2, 3]).with_interval_ms(Some(1000)), 0)
            .unwrap();
    c.pause();
    assert!(c.is_paused());
    assert_eq!(c.next_deadline(), None);
    assert!(!c.tick(5000));

    // Manual navigation while paused does not re-arm.
    c.move_next(5000);
    c.tick(5000 + T_MS);
    assert_eq!(c.next_deadline(), None);

    c.resume(6000);
    assert!(!c.is_paused());
    assert_eq!(c.next_deadline(), Some(7000));
}

#[test]
fn set_interval_rearms_or_disables() {
    let mut c = abc();
    assert_eq!(c.interval_ms(), None);
    c.set_interval(Some(200), 50).unwrap();
    assert_eq!(c.next_deadline(), Some(250));
    assert_eq!(c.set_interval(Some(0), 60), Err(CarouselError::ZeroInterval));
    assert_eq!(c.interval_ms(), Some(200));
    c.set_interval(None, 70).unwrap();
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn destroy_is_idempotent_and_cancels_timers() {
    let mut c = Carousel::new(CarouselOptions::new(vec![1, 2, 3]).with_interval_ms(Some(100)), 0)
        .unwrap();
    c.move_next(0);
    assert!(c.next_deadline().is_some());

    c.destroy();
    c.destroy();
    assert!(c.is_destroyed());
    assert_eq!(c.next_deadline(), None);
    assert_eq!(c.desired(), None);
    assert_eq!(c.phase(), Phase::Idle);

    assert!(!c.tick(10_000));
    c.move_next(10_000);
    assert_eq!(c.desired(), None);
    assert_eq!(c.jump_to(1, 10_000), Err(CarouselError::Destroyed));
    assert_eq!(c.set_items(vec![4], 10_000), Err(CarouselError::Destroyed));
}

#[test]
fn set_items_reinitializes() {
    let mut c = Carousel::new(CarouselOptions::new(vec![1, 2, 3]).with_interval_ms(Some(1000)), 0)
        .unwrap();
    c.jump_to(2, 10).unwrap();
    c.set_items(vec![7, 8], 20).unwrap();
    assert_eq!(c.items(), &[7, 8]);
    assert_eq!(c.current(), 1);
    assert_eq!(c.desired(), None);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.next_deadline(), Some(1020));

    assert_eq!(c.set_items(Vec::new(), 30), Err(CarouselError::EmptyItems));
    assert_eq!(c.items(), &[7, 8]);
}

#[test]
fn for_each_slot_walks_padded_strip() {
    let c = abc();
    let mut out = Vec::new();
    c.for_each_slot(|s| out.push((s.buffer_index, s.item_index, s.is_buffer, *s.item)));
    assert_eq!(
        out,
        vec![
            (0, 2, true, 'C'),
            (1, 0, false, 'A'),
            (2, 1, false, 'B'),
            (3, 2, false, 'C'),
            (4, 0, true, 'A'),
        ]
    );
}

#[test]
fn indicators_track_active_item_and_hide_during_remap() {
    let mut c = abc();
    let active: Vec<bool> = c.indicators().iter().map(|i| i.active).collect();
    assert_eq!(active, vec![true, false, false]);

    c.move_prev(0);
    c.tick(T_MS);
    assert!(c.indicators().iter().all(|i| !i.active));
    c.tick(T_MS);
    let active: Vec<bool> = c.indicators().iter().map(|i| i.active).collect();
    assert_eq!(active, vec![false, false, true]);
}

#[test]
fn on_change_is_coalesced_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c2 = Arc::clone(&calls);
    let mut c = Carousel::new(
        CarouselOptions::new(vec![1, 2, 3]).with_on_change(Some(move |_: &Carousel<i32>| {
            c2.fetch_add(1, Ordering::Relaxed);
        })),
        0,
    )
    .unwrap();

    c.move_next(0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    c.tick(100);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    c.tick(T_MS);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // Remap commit + new command in one call: a single notification.
    c.move_next(T_MS);
    c.tick(2 * T_MS);
    c.move_next(2 * T_MS);
    c.tick(3 * T_MS);
    assert_eq!(c.phase(), Phase::Remapping);
    let before = calls.load(Ordering::Relaxed);
    c.move_next(3 * T_MS);
    assert_eq!(calls.load(Ordering::Relaxed), before + 1);
}

#[test]
fn random_commands_preserve_bounds() {
    let mut rng = Lcg::new(0x5eed);
    for n in [1usize, 2, 3, 7] {
        let mut c = Carousel::new(
            CarouselOptions::new((0..n).collect::<Vec<_>>())
                .with_interval_ms(Some(700))
                .with_transition_ms(120),
            0,
        )
        .unwrap();
        let mut now = 0u64;
        for _ in 0..2_000 {
            now += rng.gen_range_u64(0, 200);
            match rng.gen_range_u64(0, 5) {
                0 => c.move_next(now),
                1 => c.move_prev(now),
                2 => {
                    let target = rng.gen_range_u64(0, n as u64) as usize;
                    c.jump_to(target, now).unwrap();
                }
                _ => {
                    c.tick(now);
                }
            }

            assert!(c.current() < n + 2);
            if let Some(d) = c.desired() {
                assert!(d < n + 2);
                assert_ne!(c.phase(), Phase::Idle);
            } else {
                assert_eq!(c.phase(), Phase::Idle);
            }
            if c.phase() == Phase::Idle {
                let i = c.active_real_index().expect("idle on a real slot");
                assert!(i < n);
            }
            assert_eq!(
                c.transition_style() == TransitionStyle::Instant,
                c.phase() == Phase::Remapping
            );
        }
    }
}
