//! Integration tests for StackAnimator
//!
//! These tests verify the full swipe workflow including:
//! - Commit vs. settle decisions against the viewport threshold
//! - Phase transitions over arbitrary gesture sequences
//! - Index monotonicity and the exhausted signal
//! - Easing endpoints and exact rest after settling

use card_stack::{
    transition::{ease_out_cubic, ease_out_quad, lerp, spring_settle},
    CardContent, Deck, GestureEvent, GestureOutcome, Phase, PointerSource, StackAnimator,
    StackConfig, StackSignal,
};

const FRAME_MS: f64 = 16.0;

fn create_stack(width: f32) -> StackAnimator {
    let mut stack = StackAnimator::with_defaults(Deck::rose_day());
    stack.resize(width, 600.0);
    stack
}

/// Tick until the stack returns to Idle, returning the final timestamp
fn run_until_idle(stack: &mut StackAnimator, mut now: f64) -> f64 {
    while stack.phase() != Phase::Idle {
        stack.tick(now);
        now += FRAME_MS;
        assert!(now < 60_000.0, "animation never finished");
    }
    now
}

fn swipe(stack: &mut StackAnimator, delta: f32) {
    stack.begin(400.0, 300.0);
    stack.move_to(400.0 + delta);
    stack.end();
}

// =============================================================================
// Threshold Scenario Tests
// =============================================================================

#[test]
fn test_short_swipe_settles_without_advancing() {
    let mut stack = create_stack(800.0);
    assert!((stack.commit_threshold() - 80.0).abs() < 0.001);

    swipe(&mut stack, 50.0);
    assert_eq!(stack.phase(), Phase::SettlingBack);

    run_until_idle(&mut stack, 0.0);
    assert_eq!(stack.current_index(), 0);
    assert_eq!(stack.state().drag_offset, 0.0);
    assert_eq!(stack.state().drag_rotation, 0.0);
}

#[test]
fn test_long_swipe_advances_by_one() {
    let mut stack = create_stack(800.0);

    swipe(&mut stack, 120.0);
    assert_eq!(stack.phase(), Phase::Advancing);

    run_until_idle(&mut stack, 0.0);
    assert_eq!(stack.current_index(), 1);
    assert_eq!(stack.take_signals(), vec![StackSignal::Advanced { index: 1 }]);
}

#[test]
fn test_narrow_viewport_lowers_threshold() {
    let mut stack = create_stack(300.0);
    assert!((stack.commit_threshold() - 60.0).abs() < 0.001);

    swipe(&mut stack, -70.0);
    assert_eq!(stack.phase(), Phase::Advancing);
}

#[test]
fn test_three_card_deck_exhausts_on_third_commit() {
    let mut stack = create_stack(800.0);
    let mut now = 0.0;

    for expected in 1..=2 {
        swipe(&mut stack, 150.0);
        now = run_until_idle(&mut stack, now);
        assert_eq!(stack.current_index(), expected);
    }
    assert!(stack.take_signals().iter().all(|s| *s != StackSignal::Exhausted));

    swipe(&mut stack, -150.0);
    run_until_idle(&mut stack, now);

    assert!(stack.is_exhausted());
    assert_eq!(stack.current_index(), 3);
    assert_eq!(stack.take_signals(), vec![StackSignal::Exhausted]);
    assert!(stack.top_card().is_none());
}

// =============================================================================
// State Machine Property Tests
// =============================================================================

/// Small deterministic generator so the sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn test_random_gesture_sequences_follow_phase_table() {
    let allowed = [
        (Phase::Idle, Phase::Dragging),
        (Phase::Dragging, Phase::Advancing),
        (Phase::Dragging, Phase::SettlingBack),
        (Phase::Advancing, Phase::Idle),
        (Phase::SettlingBack, Phase::Idle),
    ];

    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let entries = (0..4)
            .map(|i| CardContent::new(&format!("{}", i), "", ""))
            .collect();
        let deck = Deck::new(entries).unwrap();
        let mut stack = StackAnimator::with_defaults(deck);
        stack.resize(800.0, 600.0);
        let mut now = 0.0;
        let mut last_index = stack.current_index();

        for _ in 0..400 {
            let before = stack.phase();
            let x = (rng.next() % 800) as f32;
            match rng.next() % 5 {
                0 => {
                    stack.begin(x, 300.0);
                }
                1 | 2 => {
                    stack.move_to(x);
                }
                3 => {
                    stack.end();
                }
                _ => {
                    now += (rng.next() % 200) as f64;
                    stack.tick(now);
                }
            }
            let after = stack.phase();

            if before != after {
                assert!(
                    allowed.contains(&(before, after)),
                    "illegal transition {:?} -> {:?} (seed {})",
                    before,
                    after,
                    seed
                );
            }
            if after == Phase::Idle {
                assert_eq!(stack.state().drag_offset, 0.0);
            }
            assert!(stack.current_index() >= last_index);
            assert!(stack.current_index() <= stack.deck().len());
            last_index = stack.current_index();
        }
    }
}

#[test]
fn test_begin_twice_same_as_once() {
    let mut once = create_stack(800.0);
    once.begin(400.0, 300.0);
    once.move_to(430.0);

    let mut twice = create_stack(800.0);
    twice.begin(400.0, 300.0);
    assert_eq!(twice.begin(400.0, 300.0), GestureOutcome::Ignored);
    twice.move_to(430.0);

    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_advance_cannot_be_interrupted() {
    let config = StackConfig {
        allow_regrab_while_settling: true,
        ..Default::default()
    };
    let mut stack = StackAnimator::new(Deck::rose_day(), config).unwrap();
    stack.resize(800.0, 600.0);
    swipe(&mut stack, 200.0);
    stack.tick(0.0);
    stack.tick(100.0);

    assert_eq!(stack.begin(400.0, 300.0), GestureOutcome::Ignored);
    assert_eq!(stack.phase(), Phase::Advancing);
}

// =============================================================================
// Event Stream Tests
// =============================================================================

#[test]
fn test_dom_event_stream_commits() {
    let mut stack = create_stack(800.0);
    let events = [
        ("touchstart", 300.0),
        ("touchmove", 250.0),
        ("touchmove", 180.0),
        ("touchend", 0.0),
    ];
    for (name, x) in events {
        let event = GestureEvent::from_dom(name, x, 400.0).unwrap();
        assert!(stack.apply_gesture_event(event).is_handled(), "{}", name);
    }

    assert_eq!(stack.phase(), Phase::Advancing);
    let tween = stack.snapshot();
    assert_eq!(tween.phase, Phase::Advancing);

    // Direction follows the leftward drag
    stack.tick(0.0);
    stack.tick(250.0);
    assert!(stack.state().drag_offset < -10.0);
}

#[test]
fn test_mouse_leave_ends_drag_started_by_touch() {
    let mut stack = create_stack(800.0);
    stack.apply_gesture_event(GestureEvent::Press {
        x: 100.0,
        y: 100.0,
        source: PointerSource::Touch,
    });
    stack.apply_gesture_event(GestureEvent::Move {
        x: 130.0,
        y: 100.0,
        source: PointerSource::Touch,
    });

    let result = stack.apply_gesture_event(GestureEvent::Cancel { source: PointerSource::Mouse });

    assert!(result.is_handled());
    assert_eq!(stack.phase(), Phase::SettlingBack);
    assert!(!stack.is_grabbing());
}

#[test]
fn test_malformed_coordinates_rejected() {
    let mut stack = create_stack(800.0);
    let result = stack.apply_gesture_event(GestureEvent::Press {
        x: f32::NAN,
        y: 0.0,
        source: PointerSource::Mouse,
    });

    assert_eq!(result, GestureOutcome::Rejected);
    assert_eq!(stack.phase(), Phase::Idle);
}

// =============================================================================
// Rendering Output Tests
// =============================================================================

#[test]
fn test_snapshot_during_drag() {
    let mut stack = create_stack(800.0);
    stack.begin(400.0, 300.0);
    stack.move_to(472.0);
    stack.tick(0.0);

    let snapshot = stack.snapshot();
    assert_eq!(snapshot.cards.len(), 3);

    let top = snapshot.cards[0];
    assert_eq!(top.index, 0);
    assert!((top.horizontal_offset - 72.0 * 0.055).abs() < 0.001);

    let next = snapshot.cards[1];
    assert_eq!(next.index, 1);
    assert!(next.scale > 0.95);
    assert!(next.opacity > 0.7);

    let deep = snapshot.cards[2];
    assert_eq!(deep.index, 2);
    assert!((deep.scale - 0.9).abs() < 0.001);
}

#[test]
fn test_snapshot_json_for_renderer() {
    let stack = create_stack(800.0);
    let json = serde_json::to_value(stack.snapshot()).unwrap();

    assert_eq!(json["currentIndex"], 0);
    assert_eq!(json["cards"].as_array().unwrap().len(), 3);
    assert!(json["cards"][0].get("horizontalOffset").is_some());
}

// =============================================================================
// Easing Boundary Tests
// =============================================================================

#[test]
fn test_easing_boundaries_exact() {
    for curve in [ease_out_cubic as fn(f32) -> f32, ease_out_quad] {
        assert_eq!(curve(0.0), 0.0);
        assert_eq!(curve(1.0), 1.0);
    }
    assert_eq!(spring_settle(0.0, 0.1), 0.0);
    assert_eq!(spring_settle(1.0, 0.1), 1.0);

    let (start, target) = (7.25_f32, -20.0_f32);
    assert_eq!(lerp(start, target, ease_out_cubic(0.0)), start);
    assert_eq!(lerp(start, target, ease_out_cubic(1.0)), target);
}

#[test]
fn test_advance_ends_exactly_at_exit_target_before_commit() {
    let mut stack = create_stack(800.0);
    swipe(&mut stack, 200.0);
    stack.tick(0.0);
    stack.tick(499.0);

    let offset = stack.state().drag_offset;
    assert!((offset - 20.0).abs() < 0.1);

    stack.tick(500.0);
    assert_eq!(stack.phase(), Phase::Idle);
    assert_eq!(stack.state().drag_offset, 0.0);
}

#[test]
fn test_bad_frame_clock_never_strands_stack() {
    let mut stack = create_stack(800.0);
    swipe(&mut stack, 120.0);

    stack.tick(f64::NAN);
    assert!(stack.state().drag_offset.is_finite());

    run_until_idle(&mut stack, 0.0);
    assert_eq!(stack.current_index(), 1);
    assert!(stack.begin(400.0, 300.0).is_handled());
}
