// Example: chunked windowing over a large deck, with render-layer style
// materialization (register handles for the window, prune the rest).
use std::sync::Arc;

use swipe_deck::{CardHandle, Deck, DeckOptions, SwipeDirection, WindowPolicy};

struct NoopCard;

impl CardHandle for NoopCard {
    fn swipe(&self, _direction: SwipeDirection) {}
    fn swipe_back(&self) {}
}

fn main() {
    let options = DeckOptions::new(500)
        .with_policy(WindowPolicy::chunked())
        .with_on_chunk_change(Some(|chunk| println!("chunk change -> {chunk}")));
    let mut deck = Deck::new(options);

    let mut window_indexes = Vec::new();
    for now_ms in 0..70u64 {
        deck.collect_window_indexes(&mut window_indexes);
        for &i in &window_indexes {
            if !deck.has_handle(i) {
                deck.register_handle(i, Arc::new(NoopCard));
            }
        }

        deck.swipe(SwipeDirection::Left, now_ms);
        deck.reconcile();
        deck.retain_window_handles();
    }

    println!(
        "active={} window={:?} handles={}",
        deck.active_index(),
        deck.window(),
        deck.handle_count()
    );
}
