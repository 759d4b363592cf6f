use alloc::vec::Vec;

/// A lightweight, serializable snapshot of deck progress.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Useful
/// for restoring a user's position across sessions without coupling the deck to any
/// specific storage layer; see [`crate::Deck::snapshot`] and
/// [`crate::Deck::restore`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckSnapshot {
    pub active_index: f64,
    pub history: Vec<usize>,
}
