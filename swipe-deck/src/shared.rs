use core::sync::atomic::{AtomicU64, Ordering};

/// The continuous active index, shareable with a high-frequency gesture or
/// animation context.
///
/// The value is an `f64` stored as raw bits in an atomic, so the fast path can
/// write per-frame progress without taking a lock while the logical thread observes
/// it through [`crate::Deck::reconcile`]. Committed (integral) values are written by
/// the deck; fractional in-flight values may be written by the gesture collaborator.
#[derive(Debug)]
pub struct SharedIndex {
    bits: AtomicU64,
}

impl SharedIndex {
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::new(0.0)
    }
}
