#[cfg(feature = "std")]
pub trait DeckKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> DeckKey for T {}

#[cfg(not(feature = "std"))]
pub trait DeckKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> DeckKey for T {}
