use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use swipe_deck::CardSlot;

use crate::DeckKey;

#[cfg(feature = "std")]
type KeySet<'a, K> = HashSet<&'a K>;
#[cfg(not(feature = "std"))]
type KeySet<'a, K> = BTreeSet<&'a K>;

/// The card churn between two materialized windows.
#[derive(Clone, Debug)]
pub struct WindowDiff<K> {
    /// Slots present now that were absent before (mount these).
    pub entered: Vec<CardSlot<K>>,
    /// Keys present before that are gone now (unmount these).
    pub exited: Vec<K>,
}

/// Computes which cards entered or left between two materialized windows.
///
/// Keys are compared, not indices, so the diff stays correct when the dataset is
/// reordered under a stable `get_item_key`.
pub fn diff_windows<K: DeckKey + Clone>(
    prev: &[CardSlot<K>],
    next: &[CardSlot<K>],
) -> WindowDiff<K> {
    let prev_keys: KeySet<'_, K> = prev.iter().map(|slot| &slot.key).collect();
    let next_keys: KeySet<'_, K> = next.iter().map(|slot| &slot.key).collect();

    WindowDiff {
        entered: next
            .iter()
            .filter(|slot| !prev_keys.contains(&slot.key))
            .cloned()
            .collect(),
        exited: prev
            .iter()
            .filter(|slot| !next_keys.contains(&slot.key))
            .map(|slot| slot.key.clone())
            .collect(),
    }
}
