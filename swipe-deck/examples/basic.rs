// Example: swipe through a small deck and watch the window follow.
use std::sync::Arc;

use swipe_deck::{CardHandle, Deck, DeckOptions, SwipeDirection};

struct NoopCard;

impl CardHandle for NoopCard {
    fn swipe(&self, _direction: SwipeDirection) {}
    fn swipe_back(&self) {}
}

fn main() {
    let mut deck = Deck::new(DeckOptions::new(10));
    for i in 0..deck.count() {
        deck.register_handle(i, Arc::new(NoopCard));
    }

    for now_ms in 0..5u64 {
        deck.swipe(SwipeDirection::Right, now_ms);
        deck.reconcile();
        println!("active={} window={:?}", deck.active_index(), deck.window());
    }

    deck.swipe_back();
    println!(
        "after swipe_back: active={} window={:?}",
        deck.active_index(),
        deck.window()
    );
}
