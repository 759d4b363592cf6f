// Example: simulated drag sessions against the controller.
use std::sync::Arc;

use swipe_deck::{CardHandle, DeckOptions, SwipeDirection};
use swipe_deck_adapter::{Controller, Easing};

struct NoopCard;

impl CardHandle for NoopCard {
    fn swipe(&self, _direction: SwipeDirection) {}
    fn swipe_back(&self) {}
}

fn main() {
    let mut controller = Controller::new(DeckOptions::new(10)).with_settle(120, Easing::SmoothStep);
    for i in 0..controller.deck().count() {
        controller.deck_mut().register_handle(i, Arc::new(NoopCard));
    }

    // A timid drag: released below the threshold, the index settles back.
    controller.drag(0.3);
    controller.release(SwipeDirection::Right, 0);
    let mut now_ms = 0u64;
    while controller.is_settling() {
        now_ms += 16;
        if let Some(value) = controller.tick(now_ms) {
            println!("settling: {value:.3}");
        }
    }

    // A committed drag: the card flies out and the index advances.
    controller.drag(0.8);
    let swiped = controller.release(SwipeDirection::Right, now_ms);
    controller.tick(now_ms + 16);
    println!(
        "swiped={} active={}",
        swiped,
        controller.deck().active_index()
    );
}
