use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::types::SwipeDirection;

/// A capability object for a materialized card.
///
/// Implementations are provided by the rendering layer. Animations are assumed to
/// run their course independently of deck state (fire-and-forget from the engine's
/// perspective), so neither method reports completion.
pub trait CardHandle {
    /// Triggers the directional exit animation.
    fn swipe(&self, direction: SwipeDirection);
    /// Reverses the exit animation, bringing the card back on screen.
    fn swipe_back(&self);
}

pub type CardHandleRef = Arc<dyn CardHandle + Send + Sync>;

#[cfg(feature = "std")]
pub(crate) type HandleMap = HashMap<usize, CardHandleRef>;
#[cfg(not(feature = "std"))]
pub(crate) type HandleMap = BTreeMap<usize, CardHandleRef>;
