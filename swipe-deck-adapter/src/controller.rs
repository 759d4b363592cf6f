use alloc::sync::Arc;

use swipe_deck::{Deck, DeckOptions, SharedIndex, SwipeDirection};

use crate::{Easing, Tween};

/// Fraction of a card's travel that commits a swipe on release.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.5;
/// Settle animation duration for below-threshold releases.
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 150;

/// A framework-neutral controller that wraps a [`swipe_deck::Deck`] and provides
/// common adapter workflows (drag/release plumbing, settle animation, tick loop).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `drag`/`release` when gesture events occur
/// - the imperative `swipe_*` methods for programmatic swipes
/// - `tick(now_ms)` each frame/timer tick (settle tweens, the loop-reset delay, and
///   the reconcile observer)
///
/// On a platform where gesture tracking runs off the logical thread, the fast path
/// writes through [`Deck::shared_index`] directly instead of `drag`; `tick` on the
/// logical thread still observes every change in order.
#[derive(Debug)]
pub struct Controller<K> {
    deck: Deck<K>,
    shared: Arc<SharedIndex>,
    settle: Option<Tween>,
    drag_base: Option<usize>,
    swipe_threshold: f64,
    settle_duration_ms: u64,
    settle_easing: Easing,
}

impl<K> Controller<K> {
    pub fn new(options: DeckOptions<K>) -> Self {
        Self::from_deck(Deck::new(options))
    }

    pub fn from_deck(deck: Deck<K>) -> Self {
        let shared = deck.shared_index();
        Self {
            deck,
            shared,
            settle: None,
            drag_base: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
            settle_easing: Easing::SmoothStep,
        }
    }

    pub fn deck(&self) -> &Deck<K> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck<K> {
        &mut self.deck
    }

    pub fn into_deck(self) -> Deck<K> {
        self.deck
    }

    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_settle(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.settle_duration_ms = duration_ms;
        self.settle_easing = easing;
        self
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Feeds in-flight gesture progress (`0..=1` of a card's travel).
    ///
    /// Writes `base + progress` into the shared index cell so observers see the
    /// fractional position; the committed index is untouched until [`Self::release`].
    pub fn drag(&mut self, progress: f64) {
        let Some(base) = self.deck.current_index() else {
            return;
        };
        self.settle = None;
        self.drag_base = Some(base);
        self.shared.store(base as f64 + progress.clamp(0.0, 1.0));
    }

    /// Ends a drag.
    ///
    /// At or past the swipe threshold the card is swiped and the index advances;
    /// below it, the index settles back to the base card over the configured
    /// duration. Returns `true` when the release committed a swipe.
    pub fn release(&mut self, direction: SwipeDirection, now_ms: u64) -> bool {
        let Some(base) = self.drag_base.take() else {
            return false;
        };
        let position = self.shared.load();
        let progress = (position - base as f64).clamp(0.0, 1.0);
        if progress >= self.swipe_threshold {
            // Swiping starts from the resting position, not the in-flight one.
            self.shared.store(base as f64);
            return self.deck.swipe(direction, now_ms);
        }
        if progress > 0.0 {
            self.settle = Some(Tween::new(
                position,
                base as f64,
                now_ms,
                self.settle_duration_ms,
                self.settle_easing,
            ));
        }
        false
    }

    pub fn swipe_left(&mut self, now_ms: u64) -> bool {
        self.interrupt();
        self.deck.swipe(SwipeDirection::Left, now_ms)
    }

    pub fn swipe_right(&mut self, now_ms: u64) -> bool {
        self.interrupt();
        self.deck.swipe(SwipeDirection::Right, now_ms)
    }

    pub fn swipe_top(&mut self, now_ms: u64) -> bool {
        self.interrupt();
        self.deck.swipe(SwipeDirection::Top, now_ms)
    }

    pub fn swipe_bottom(&mut self, now_ms: u64) -> bool {
        self.interrupt();
        self.deck.swipe(SwipeDirection::Bottom, now_ms)
    }

    pub fn swipe_back(&mut self) -> bool {
        self.interrupt();
        self.deck.swipe_back()
    }

    // A programmatic swipe takes over from any in-flight drag or settle.
    fn interrupt(&mut self) {
        self.settle = None;
        if let Some(base) = self.drag_base.take() {
            self.shared.store(base as f64);
        }
    }

    /// Advances the controller.
    ///
    /// Samples any settle tween into the shared index, commits a pending loop reset
    /// once its delay elapses, then runs the reconcile observer so host callbacks
    /// fire in order on this thread. Returns the sampled index while settling.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let sampled = if let Some(tween) = self.settle {
            let value = tween.sample(now_ms);
            self.shared.store(value);
            if tween.is_done(now_ms) {
                self.settle = None;
            }
            Some(value)
        } else {
            None
        };

        self.deck.update_loop_reset(now_ms);
        self.deck.reconcile();
        sampled
    }
}
