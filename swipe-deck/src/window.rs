use crate::types::Window;

/// Windowing policy, chosen once at deck construction and fixed for the deck's
/// lifetime.
///
/// `Symmetric` materializes a fixed look-around window and recomputes it on every
/// swipe. `Chunked` partitions the deck into fixed-size chunks and only changes the
/// materialized set when the active index crosses a chunk boundary, a coarser
/// cadence that pays off for very large decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowPolicy {
    /// Materialize `[active - radius, active + radius]`, clamped to the deck.
    Symmetric { radius: usize },
    /// Materialize chunks `[current - preload, current + preload]`, clamped to the
    /// valid chunk range.
    Chunked { chunk_size: usize, preload: usize },
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self::Symmetric { radius: 3 }
    }
}

impl WindowPolicy {
    /// The default chunked policy: 20-card chunks, one chunk preloaded per side.
    pub fn chunked() -> Self {
        Self::Chunked {
            chunk_size: 20,
            preload: 1,
        }
    }

    /// Computes the window of global indices to materialize.
    ///
    /// `active_floor` past the end clamps to the last card, so a fully swiped deck
    /// keeps its trailing window materialized.
    pub fn window(&self, active_floor: usize, count: usize) -> Window {
        if count == 0 {
            return Window::EMPTY;
        }
        let active = active_floor.min(count - 1);
        match *self {
            Self::Symmetric { radius } => Window {
                start_index: active.saturating_sub(radius),
                end_index: count.min(active.saturating_add(radius).saturating_add(1)),
            },
            Self::Chunked {
                chunk_size,
                preload,
            } => {
                let chunk_size = chunk_size.max(1);
                let current = active / chunk_size;
                let last = (count - 1) / chunk_size;
                let start_chunk = current.saturating_sub(preload);
                let end_chunk = last.min(current.saturating_add(preload));
                Window {
                    start_index: start_chunk * chunk_size,
                    end_index: count.min((end_chunk + 1) * chunk_size),
                }
            }
        }
    }

    /// The chunk containing `global_index`, or `None` under the symmetric policy.
    pub fn chunk_of(&self, global_index: usize) -> Option<usize> {
        match *self {
            Self::Symmetric { .. } => None,
            Self::Chunked { chunk_size, .. } => Some(global_index / chunk_size.max(1)),
        }
    }

    pub fn chunk_count(&self, count: usize) -> usize {
        match *self {
            Self::Symmetric { .. } => 0,
            Self::Chunked { chunk_size, .. } => count.div_ceil(chunk_size.max(1)),
        }
    }
}
