use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::handle::{CardHandleRef, HandleMap};
use crate::history::History;
use crate::options::DeckOptions;
use crate::shared::SharedIndex;
use crate::state::DeckSnapshot;
use crate::types::{CardKey, CardSlot, SwipeDirection, Window};
use crate::window::WindowPolicy;

/// The headless swipe-deck engine.
///
/// This type is intentionally UI-agnostic:
/// - It holds no items and no UI objects. The render layer materializes a card for
///   each position in [`Deck::window`] and registers a [`crate::CardHandle`] per
///   card so the engine can trigger exit/return animations.
/// - All mutation happens on one logical thread. The gesture collaborator may write
///   in-flight fractional progress through [`Deck::shared_index`]; the logical
///   thread observes it with [`Deck::reconcile`], which is the only place
///   host-visible callbacks fire.
///
/// For drag/release plumbing and settle tweens, see the `swipe-deck-adapter` crate.
pub struct Deck<K = CardKey> {
    options: DeckOptions<K>,
    shared: Arc<SharedIndex>,
    history: History,
    handles: HandleMap,

    reset_requested_at_ms: Option<u64>,

    // Reconcile bookkeeping: last value/chunk the observer acted on.
    observed_index: f64,
    observed_chunk: Option<usize>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K> Deck<K> {
    pub fn new(options: DeckOptions<K>) -> Self {
        ddebug!(
            count = options.count,
            looping = options.looping,
            enabled = options.enabled,
            "Deck::new"
        );
        let observed_chunk = options.policy.chunk_of(0);
        Self {
            shared: Arc::new(SharedIndex::new(0.0)),
            history: History::new(options.max_back_steps),
            handles: HandleMap::new(),
            reset_requested_at_ms: None,
            observed_index: 0.0,
            observed_chunk,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
            options,
        }
    }

    pub fn options(&self) -> &DeckOptions<K> {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn looping(&self) -> bool {
        self.options.looping
    }

    pub fn policy(&self) -> WindowPolicy {
        self.options.policy
    }

    /// A handle to the continuous index cell, for the gesture/animation fast path.
    ///
    /// The fast path may store fractional progress here at frame rate; it must never
    /// fire host callbacks itself — those are raised by [`Deck::reconcile`] on the
    /// logical thread.
    pub fn shared_index(&self) -> Arc<SharedIndex> {
        Arc::clone(&self.shared)
    }

    /// The continuous active index.
    pub fn active_index(&self) -> f64 {
        self.shared.load()
    }

    /// Floor of the active index; `None` when the deck is empty, disabled, or every
    /// card has been swiped.
    pub fn current_index(&self) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 {
            return None;
        }
        let floor = floor_index(self.shared.load());
        (floor < self.options.count).then_some(floor)
    }

    /// Whether every card has been swiped away.
    pub fn is_finished(&self) -> bool {
        let count = self.options.count;
        self.options.enabled && count > 0 && self.shared.load() >= count as f64
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when an adapter applies several mutations per frame and
    /// `on_change` drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Commits a forward step after a swipe completes on the current card.
    ///
    /// In a looping deck that just consumed its last card, this instead asks every
    /// registered handle to reverse its exit animation and arms a delayed reset; the
    /// reset commits on a later [`Deck::update_loop_reset`] tick, so the reversals
    /// have room to settle visually.
    ///
    /// No host-visible events fire here; [`Deck::reconcile`] translates the new
    /// value into callbacks.
    pub fn advance(&mut self, now_ms: u64) {
        if !self.options.enabled || self.options.count == 0 {
            return;
        }
        let count = self.options.count;
        let index = self.shared.load();
        if self.options.looping && floor_index(index) >= count - 1 {
            dtrace!(now_ms, "advance: arming loop reset");
            for handle in self.handles.values() {
                handle.swipe_back();
            }
            self.reset_requested_at_ms = Some(now_ms);
        } else {
            let next = (index + 1.0).min(count as f64);
            self.shared.store(next);
            self.history.record(floor_index(next));
        }
        self.notify();
    }

    /// Commits a pending loop reset once the settle delay has elapsed.
    ///
    /// Call this from the logical-thread tick loop, alongside [`Deck::reconcile`].
    pub fn update_loop_reset(&mut self, now_ms: u64) {
        let Some(requested) = self.reset_requested_at_ms else {
            return;
        };
        if now_ms.saturating_sub(requested) >= self.options.loop_reset_delay_ms {
            ddebug!(now_ms, "loop reset: snapping back to the first card");
            self.reset_requested_at_ms = None;
            self.shared.store(0.0);
            self.history.reset();
            self.notify();
        }
    }

    pub fn is_loop_reset_pending(&self) -> bool {
        self.reset_requested_at_ms.is_some()
    }

    /// Programmatically swipes the current card in `direction`.
    ///
    /// Returns `false` (and does nothing) when no card is materialized at the
    /// current index: an empty deck, an index already past the end, or a handle the
    /// render layer has not registered. Handles may be legitimately absent during
    /// window transitions, so this is not an error.
    pub fn swipe(&mut self, direction: SwipeDirection, now_ms: u64) -> bool {
        let Some(current) = self.current_index() else {
            return false;
        };
        let Some(handle) = self.handles.get(&current).cloned() else {
            dtrace!(current, "swipe: no handle materialized");
            return false;
        };
        handle.swipe(direction);
        let callback = match direction {
            SwipeDirection::Left => &self.options.on_swipe_left,
            SwipeDirection::Right => &self.options.on_swipe_right,
            SwipeDirection::Top => &self.options.on_swipe_top,
            SwipeDirection::Bottom => &self.options.on_swipe_bottom,
        };
        if let Some(cb) = callback {
            cb(current);
        }
        self.advance(now_ms);
        true
    }

    pub fn swipe_left(&mut self, now_ms: u64) -> bool {
        self.swipe(SwipeDirection::Left, now_ms)
    }

    pub fn swipe_right(&mut self, now_ms: u64) -> bool {
        self.swipe(SwipeDirection::Right, now_ms)
    }

    pub fn swipe_top(&mut self, now_ms: u64) -> bool {
        self.swipe(SwipeDirection::Top, now_ms)
    }

    pub fn swipe_bottom(&mut self, now_ms: u64) -> bool {
        self.swipe(SwipeDirection::Bottom, now_ms)
    }

    /// Undoes the most recent swipe, if the retained history allows it.
    ///
    /// Back-navigation is bounded by `max_back_steps`; going further is a no-op.
    /// Returns `false` when there is nothing to return to, the previous index is no
    /// longer inside the deck, or its card is not materialized.
    pub fn swipe_back(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        let Some(previous) = self.history.previous() else {
            return false;
        };
        if previous >= self.options.count {
            return false;
        }
        let Some(handle) = self.handles.get(&previous).cloned() else {
            dtrace!(previous, "swipe_back: no handle materialized");
            return false;
        };
        handle.swipe_back();
        self.shared.store(previous as f64);
        self.history.pop();
        self.notify();
        true
    }

    /// The logical-thread observer: translates index changes into host callbacks.
    ///
    /// Reads the shared index (which the gesture fast path may have moved), fires
    /// `on_index_change`, edge-triggers `on_swiped_all` and `on_chunk_change`, and
    /// coalesces everything into a single `on_change`. Call this from the same
    /// thread that mutates the deck — never from the fast path.
    pub fn reconcile(&mut self) {
        if !self.options.enabled {
            return;
        }
        let count = self.options.count;
        let index = self.shared.load();
        let previous = self.observed_index;
        if index == previous {
            return;
        }
        self.observed_index = index;
        dtrace!(index, previous, "reconcile");

        if let Some(cb) = &self.options.on_index_change {
            cb(index);
        }

        // Edge-triggered: fires on the crossing only, never again while already past
        // the end, and never for an empty deck.
        if count > 0 && previous < count as f64 && index >= count as f64 {
            if let Some(cb) = &self.options.on_swiped_all {
                cb();
            }
        }

        let chunk = self
            .options
            .policy
            .chunk_of(floor_index(index).min(count.saturating_sub(1)));
        if chunk != self.observed_chunk {
            self.observed_chunk = chunk;
            if let Some((chunk, cb)) = chunk.zip(self.options.on_chunk_change.as_ref()) {
                cb(chunk);
            }
        }

        self.notify();
    }

    /// Updates the deck length.
    ///
    /// If the dataset no longer covers the active index, progress resets to the
    /// first card rather than leaving a dangling index.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.reconcile_count();
        self.notify();
    }

    fn reconcile_count(&mut self) {
        if self.shared.load() >= self.options.count as f64 {
            self.shared.store(0.0);
            self.history.reset();
            self.reset_requested_at_ms = None;
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.reset_requested_at_ms = None;
        }
        self.notify();
    }

    pub fn set_looping(&mut self, looping: bool) {
        if self.options.looping == looping {
            return;
        }
        self.options.looping = looping;
        self.notify();
    }

    /// Changes the retained back-navigation depth, re-truncating the history.
    pub fn set_max_back_steps(&mut self, max_back_steps: usize) {
        self.options.max_back_steps = max_back_steps;
        self.history.set_max_back_steps(max_back_steps);
        self.notify();
    }

    pub fn set_options(&mut self, options: DeckOptions<K>) {
        let prev_count = self.options.count;
        let prev_policy = self.options.policy;
        self.options = options;
        dtrace!(
            count = self.options.count,
            looping = self.options.looping,
            enabled = self.options.enabled,
            "Deck::set_options"
        );

        self.history.set_max_back_steps(self.options.max_back_steps);
        if self.options.count != prev_count {
            self.reconcile_count();
        }
        if self.options.policy != prev_policy {
            // The policy is meant to be fixed per deck; if an adapter swaps it
            // anyway, re-seat the chunk baseline instead of firing a spurious
            // chunk-change.
            self.observed_chunk = self.clamped_chunk();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut DeckOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Deck<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// The current set of deck positions to materialize.
    pub fn window(&self) -> Window {
        if !self.options.enabled {
            return Window::EMPTY;
        }
        self.window_for(self.shared.load())
    }

    /// The window for an arbitrary index value (e.g. a forecasted position).
    pub fn window_for(&self, active_index: f64) -> Window {
        if !self.options.enabled {
            return Window::EMPTY;
        }
        self.options
            .policy
            .window(floor_index(active_index), self.options.count)
    }

    /// The chunk containing the active card, under the chunked policy.
    pub fn current_chunk(&self) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 {
            return None;
        }
        self.clamped_chunk()
    }

    fn clamped_chunk(&self) -> Option<usize> {
        let count = self.options.count;
        self.options
            .policy
            .chunk_of(floor_index(self.shared.load()).min(count.saturating_sub(1)))
    }

    pub fn local_to_global(&self, local_index: usize) -> Option<usize> {
        self.window().local_to_global(local_index)
    }

    pub fn global_to_local(&self, global_index: usize) -> Option<usize> {
        self.window().global_to_local(global_index)
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_item_key)(index)
    }

    /// Visits every global index in the current window, in ascending order.
    pub fn for_each_window_index(&self, mut f: impl FnMut(usize)) {
        let window = self.window();
        for i in window.start_index..window.end_index {
            f(i);
        }
    }

    /// Visits every materializable card slot (stable key + global/local index).
    pub fn for_each_card(&self, mut f: impl FnMut(CardSlot<K>)) {
        let window = self.window();
        for (local_index, global_index) in (window.start_index..window.end_index).enumerate() {
            f(CardSlot {
                key: self.key_for(global_index),
                global_index,
                local_index,
            });
        }
    }

    /// Collects window indexes into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_window_index`]; reuse a scratch
    /// buffer in your adapter for best performance.
    pub fn collect_window_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_window_index(|i| out.push(i));
    }

    /// Collects card slots into `out` (clears `out` first).
    pub fn collect_cards(&self, out: &mut Vec<CardSlot<K>>) {
        out.clear();
        self.for_each_card(|slot| out.push(slot));
    }

    /// Registers the animatable handle for a materialized card.
    ///
    /// Out-of-range indexes are ignored.
    pub fn register_handle(&mut self, global_index: usize, handle: CardHandleRef) {
        if global_index >= self.options.count {
            dwarn!(
                global_index,
                count = self.options.count,
                "register_handle: out-of-range index"
            );
            return;
        }
        self.handles.insert(global_index, handle);
    }

    pub fn unregister_handle(&mut self, global_index: usize) -> bool {
        self.handles.remove(&global_index).is_some()
    }

    pub fn has_handle(&self, global_index: usize) -> bool {
        self.handles.contains_key(&global_index)
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Drops handles for cards that have left the current window.
    ///
    /// The render layer calls this after re-materializing, so stale capabilities
    /// cannot animate cards that no longer exist.
    pub fn retain_window_handles(&mut self) {
        let window = self.window();
        self.handles.retain(|&index, _| window.contains(index));
    }

    /// Number of back-steps currently available.
    pub fn back_steps_available(&self) -> usize {
        self.history.entries().len().saturating_sub(1)
    }

    /// The retained index history, oldest first. The last entry is the floor of the
    /// most recently committed index.
    pub fn history(&self) -> &[usize] {
        self.history.entries()
    }

    /// Captures deck progress for persistence.
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            active_index: self.shared.load(),
            history: self.history.entries().to_vec(),
        }
    }

    /// Restores previously captured progress.
    ///
    /// Out-of-range values reset to the first card; the history is re-seeded when
    /// empty and re-truncated to the configured depth. Restoring re-seats the
    /// observer baseline, so no callbacks fire for the restored position itself.
    pub fn restore(&mut self, snapshot: DeckSnapshot) {
        let count = self.options.count;
        if count == 0 || !(0.0..=count as f64).contains(&snapshot.active_index) {
            self.shared.store(0.0);
            self.history.reset();
        } else {
            self.shared.store(snapshot.active_index);
            self.history.restore(snapshot.history);
        }
        self.reset_requested_at_ms = None;
        self.observed_index = self.shared.load();
        self.observed_chunk = self.clamped_chunk();
        self.notify();
    }
}

impl<K> core::fmt::Debug for Deck<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deck")
            .field("count", &self.options.count)
            .field("active_index", &self.shared.load())
            .field("history", &self.history.entries())
            .field("handles", &self.handles.len())
            .field("loop_reset_pending", &self.reset_requested_at_ms.is_some())
            .finish_non_exhaustive()
    }
}

// `f64::floor` is unavailable in `core`; for non-negative values the integer cast
// truncates toward zero, which is the same thing. Negative or NaN in-flight values
// clamp to 0.
fn floor_index(value: f64) -> usize {
    if value <= 0.0 { 0 } else { value as usize }
}
