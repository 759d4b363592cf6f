use alloc::sync::Arc;

use crate::deck::Deck;
use crate::types::CardKey;
use crate::window::WindowPolicy;

/// A callback fired when any deck state update occurs.
pub type ChangeCallback<K> = Arc<dyn Fn(&Deck<K>) + Send + Sync>;

/// A callback fired with the continuous active index when it changes.
pub type IndexCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A callback fired once when every card has been swiped away.
pub type SwipedAllCallback = Arc<dyn Fn() + Send + Sync>;

/// A callback fired with the swiped card's global index after a directional swipe.
pub type SwipeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired with the new chunk number when the active index crosses a chunk
/// boundary (chunked policy only).
pub type ChunkCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Deck`].
///
/// This type is designed to be cheap to clone: closures and callbacks are stored in
/// `Arc`s so adapters can tweak a few fields and call `Deck::set_options` without
/// reallocating.
pub struct DeckOptions<K = CardKey> {
    pub count: usize,

    /// Restart from the first card after the last one is swiped, instead of
    /// reporting completion.
    pub looping: bool,

    /// Windowing policy. Fixed for the deck's lifetime.
    pub policy: WindowPolicy,

    /// How many back-navigation steps are retained. Going back further than this is
    /// a no-op, not an error — the bound is a deliberate memory cap, not an attempt
    /// at full undo.
    pub max_back_steps: usize,

    /// How long a loop reset waits before snapping the index back to 0, leaving the
    /// reversal animations room to settle. Tune freely; only animation feel depends
    /// on it.
    pub loop_reset_delay_ms: u64,

    /// Enables/disables the deck. When disabled, query methods return empty results
    /// and operations are no-ops.
    pub enabled: bool,

    /// Stable identity for the card at a global index.
    ///
    /// Keys let the render layer keep card state attached to items while the window
    /// slides. The default keys by index; hosts whose data reorders should derive
    /// keys from item content instead.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Optional callback fired when the deck's internal state changes.
    pub on_change: Option<ChangeCallback<K>>,

    pub on_index_change: Option<IndexCallback>,
    pub on_swiped_all: Option<SwipedAllCallback>,
    pub on_swipe_left: Option<SwipeCallback>,
    pub on_swipe_right: Option<SwipeCallback>,
    pub on_swipe_top: Option<SwipeCallback>,
    pub on_swipe_bottom: Option<SwipeCallback>,
    pub on_chunk_change: Option<ChunkCallback>,
}

impl<K> Clone for DeckOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            looping: self.looping,
            policy: self.policy,
            max_back_steps: self.max_back_steps,
            loop_reset_delay_ms: self.loop_reset_delay_ms,
            enabled: self.enabled,
            get_item_key: Arc::clone(&self.get_item_key),
            on_change: self.on_change.clone(),
            on_index_change: self.on_index_change.clone(),
            on_swiped_all: self.on_swiped_all.clone(),
            on_swipe_left: self.on_swipe_left.clone(),
            on_swipe_right: self.on_swipe_right.clone(),
            on_swipe_top: self.on_swipe_top.clone(),
            on_swipe_bottom: self.on_swipe_bottom.clone(),
            on_chunk_change: self.on_chunk_change.clone(),
        }
    }
}

impl DeckOptions<CardKey> {
    /// Creates options for a deck keyed by index (`CardKey = u64`).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            looping: false,
            policy: WindowPolicy::default(),
            max_back_steps: 3,
            loop_reset_delay_ms: 100,
            enabled: true,
            get_item_key: Arc::new(|i| i as u64),
            on_change: None,
            on_index_change: None,
            on_swiped_all: None,
            on_swipe_left: None,
            on_swipe_right: None,
            on_swipe_top: None,
            on_swipe_bottom: None,
            on_chunk_change: None,
        }
    }
}

impl<K> DeckOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// Use this when card identity should follow items across reordering or
    /// replacement: `get_item_key(i)` should return a stable identity for the item
    /// at global index `i`.
    pub fn new_with_key(
        count: usize,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            looping: false,
            policy: WindowPolicy::default(),
            max_back_steps: 3,
            loop_reset_delay_ms: 100,
            enabled: true,
            get_item_key: Arc::new(get_item_key),
            on_change: None,
            on_index_change: None,
            on_swiped_all: None,
            on_swipe_left: None,
            on_swipe_right: None,
            on_swipe_top: None,
            on_swipe_bottom: None,
            on_chunk_change: None,
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_back_steps(mut self, max_back_steps: usize) -> Self {
        self.max_back_steps = max_back_steps;
        self
    }

    pub fn with_loop_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.loop_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Deck<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swiped_all(
        mut self,
        on_swiped_all: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_swiped_all = on_swiped_all.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe_left(
        mut self,
        on_swipe_left: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_swipe_left = on_swipe_left.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe_right(
        mut self,
        on_swipe_right: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_swipe_right = on_swipe_right.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe_top(
        mut self,
        on_swipe_top: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_swipe_top = on_swipe_top.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe_bottom(
        mut self,
        on_swipe_bottom: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_swipe_bottom = on_swipe_bottom.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_chunk_change(
        mut self,
        on_chunk_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_chunk_change = on_chunk_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for DeckOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckOptions")
            .field("count", &self.count)
            .field("looping", &self.looping)
            .field("policy", &self.policy)
            .field("max_back_steps", &self.max_back_steps)
            .field("loop_reset_delay_ms", &self.loop_reset_delay_ms)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
