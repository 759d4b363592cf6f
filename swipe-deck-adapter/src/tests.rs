use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use swipe_deck::{CardHandle, CardSlot, DeckOptions, SwipeDirection};

#[derive(Default)]
struct RecordingHandle {
    swipes: Mutex<Vec<SwipeDirection>>,
    back_count: AtomicUsize,
}

impl CardHandle for RecordingHandle {
    fn swipe(&self, direction: SwipeDirection) {
        self.swipes.lock().unwrap().push(direction);
    }

    fn swipe_back(&self) {
        self.back_count.fetch_add(1, Ordering::SeqCst);
    }
}

fn controller_with_handles(options: DeckOptions) -> (Controller<u64>, Vec<Arc<RecordingHandle>>) {
    let count = options.count;
    let mut controller = Controller::new(options);
    let mut handles = Vec::new();
    for i in 0..count {
        let handle = Arc::new(RecordingHandle::default());
        controller.deck_mut().register_handle(i, handle.clone());
        handles.push(handle);
    }
    (controller, handles)
}

#[test]
fn release_past_threshold_commits_a_swipe() {
    let (mut controller, handles) = controller_with_handles(DeckOptions::new(5));

    controller.drag(0.7);
    assert!((controller.deck().active_index() - 0.7).abs() < 1e-9);

    assert!(controller.release(SwipeDirection::Right, 0));
    assert_eq!(controller.deck().active_index(), 1.0);
    assert_eq!(
        handles[0].swipes.lock().unwrap().as_slice(),
        &[SwipeDirection::Right]
    );
    assert!(!controller.is_settling());
}

#[test]
fn release_below_threshold_settles_back_to_base() {
    let (controller, handles) = controller_with_handles(DeckOptions::new(5));
    let mut controller = controller.with_settle(100, Easing::Linear);

    controller.drag(0.3);
    assert!(!controller.release(SwipeDirection::Left, 0));
    assert!(controller.is_settling());
    assert!(handles[0].swipes.lock().unwrap().is_empty());

    let mut last = f64::MAX;
    for now_ms in [0u64, 25, 50, 75, 100] {
        let value = controller.tick(now_ms).unwrap();
        assert!(value <= last);
        last = value;
    }
    assert!(!controller.is_settling());
    assert_eq!(controller.deck().active_index(), 0.0);
    assert!(controller.tick(125).is_none());
}

#[test]
fn drag_on_an_empty_deck_is_inert() {
    let mut controller: Controller<u64> = Controller::new(DeckOptions::new(0));
    controller.drag(0.8);
    assert_eq!(controller.deck().active_index(), 0.0);
    assert!(!controller.release(SwipeDirection::Left, 0));
}

#[test]
fn programmatic_swipe_interrupts_a_drag() {
    let (mut controller, _handles) = controller_with_handles(DeckOptions::new(5));

    controller.drag(0.4);
    assert!(controller.swipe_left(0));
    assert_eq!(controller.deck().active_index(), 1.0);
    assert!(!controller.is_settling());
}

#[test]
fn tick_commits_loop_reset_after_delay() {
    let (mut controller, handles) =
        controller_with_handles(DeckOptions::new(3).with_looping(true));

    assert!(controller.swipe_right(0));
    assert!(controller.swipe_right(0));
    assert!(controller.swipe_right(0));
    assert!(controller.deck().is_loop_reset_pending());
    for handle in &handles {
        assert!(handle.back_count.load(Ordering::SeqCst) >= 1);
    }

    controller.tick(50);
    assert!(controller.deck().is_loop_reset_pending());

    controller.tick(120);
    assert!(!controller.deck().is_loop_reset_pending());
    assert_eq!(controller.deck().active_index(), 0.0);
    assert_eq!(controller.deck().history(), &[0]);
}

#[test]
fn diff_windows_reports_entered_and_exited() {
    let prev: Vec<CardSlot<u64>> = (2..9)
        .map(|i| CardSlot {
            key: i as u64,
            global_index: i,
            local_index: i - 2,
        })
        .collect();
    let next: Vec<CardSlot<u64>> = (3..10)
        .map(|i| CardSlot {
            key: i as u64,
            global_index: i,
            local_index: i - 3,
        })
        .collect();

    let diff = diff_windows(&prev, &next);
    assert_eq!(diff.entered.len(), 1);
    assert_eq!(diff.entered[0].key, 9);
    assert_eq!(diff.exited, std::vec![2]);
}

#[test]
fn tween_reaches_its_target_and_can_retarget() {
    let mut tween = Tween::new(3.0, 0.0, 0, 100, Easing::SmoothStep);
    assert_eq!(tween.sample(0), 3.0);
    assert_eq!(tween.sample(100), 0.0);
    assert!(tween.is_done(100));

    tween.retarget(50, 2.0, 100);
    assert_eq!(tween.sample(150), 2.0);
}
