/// Direction of a card exit gesture or animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    Left,
    Right,
    Top,
    Bottom,
}

pub type CardKey = u64;

/// The contiguous run of global deck positions to materialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl Window {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, global_index: usize) -> bool {
        global_index >= self.start_index && global_index < self.end_index
    }

    /// Maps a window-local position to its global deck index.
    ///
    /// Both policies produce contiguous runs, so this is an offset by the window
    /// start in either case.
    pub fn local_to_global(&self, local_index: usize) -> Option<usize> {
        let global = self.start_index.checked_add(local_index)?;
        (global < self.end_index).then_some(global)
    }

    pub fn global_to_local(&self, global_index: usize) -> Option<usize> {
        self.contains(global_index)
            .then(|| global_index - self.start_index)
    }
}

/// A materializable card position: stable key plus global/local indices.
///
/// `global_index` addresses the full dataset (and is what every host-visible
/// callback reports); `local_index` is the card's position within the current
/// window, which is what render layers typically iterate over.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSlot<K> {
    pub key: K,
    pub global_index: usize,
    pub local_index: usize,
}
