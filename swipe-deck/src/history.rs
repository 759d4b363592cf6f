use alloc::vec;
use alloc::vec::Vec;

/// Bounded record of committed indices enabling back-navigation.
///
/// Invariants: never empty (seeded with index 0); the last entry equals the floor of
/// the most recently committed active index; at most `max_back_steps + 1` entries
/// are retained, oldest dropped first.
#[derive(Clone, Debug)]
pub(crate) struct History {
    entries: Vec<usize>,
    max_back_steps: usize,
}

impl History {
    pub(crate) fn new(max_back_steps: usize) -> Self {
        Self {
            entries: vec![0],
            max_back_steps,
        }
    }

    pub(crate) fn record(&mut self, index: usize) {
        self.entries.push(index);
        self.truncate_front();
    }

    /// The entry to return to, if any back-steps remain.
    pub(crate) fn previous(&self) -> Option<usize> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.get(self.entries.len() - 2).copied()
    }

    pub(crate) fn pop(&mut self) {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
    }

    pub(crate) fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(0);
    }

    pub(crate) fn set_max_back_steps(&mut self, max_back_steps: usize) {
        self.max_back_steps = max_back_steps;
        self.truncate_front();
    }

    /// Replaces the entries wholesale (snapshot restore): re-seeds when empty and
    /// re-truncates to the configured depth.
    pub(crate) fn restore(&mut self, entries: Vec<usize>) {
        self.entries = entries;
        if self.entries.is_empty() {
            self.entries.push(0);
        }
        self.truncate_front();
    }

    pub(crate) fn entries(&self) -> &[usize] {
        &self.entries
    }

    fn truncate_front(&mut self) {
        let cap = self.max_back_steps.saturating_add(1);
        if self.entries.len() > cap {
            let excess = self.entries.len() - cap;
            self.entries.drain(..excess);
        }
    }
}
