// Example: a looping deck snaps back to the first card after the last swipe's
// reversal animations settle.
use std::sync::Arc;

use swipe_deck::{CardHandle, Deck, DeckOptions, SwipeDirection};

struct NoopCard;

impl CardHandle for NoopCard {
    fn swipe(&self, _direction: SwipeDirection) {}
    fn swipe_back(&self) {}
}

fn main() {
    let mut deck = Deck::new(DeckOptions::new(4).with_looping(true));
    for i in 0..deck.count() {
        deck.register_handle(i, Arc::new(NoopCard));
    }

    let mut now_ms = 0u64;
    for _ in 0..4 {
        deck.swipe(SwipeDirection::Right, now_ms);
        now_ms += 16;
    }
    println!(
        "reset pending: {} (active={})",
        deck.is_loop_reset_pending(),
        deck.active_index()
    );

    while deck.is_loop_reset_pending() {
        now_ms += 16;
        deck.update_loop_reset(now_ms);
        deck.reconcile();
    }
    println!("after settle: active={}", deck.active_index());
}
