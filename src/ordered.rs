//! Ascending-order sequence for pending tree nodes.
//!
//! The tree builder needs three things from its holding structure: insert
//! while keeping ascending order, remove-at-position, and a size query.
//! A sorted `Vec` with binary-search insertion covers that contract with
//! better constants than a linked structure and keeps iteration order
//! obvious in tests.

/// An ascending-order sequence with positional removal.
///
/// Ordering comes from the element's `Ord` implementation. Elements that
/// compare equal keep insertion order (new elements land after existing
/// equals), though the tree builder's `(weight, symbol)` key is a strict
/// total order and never produces equals in practice.
#[derive(Debug, Clone)]
pub struct OrderedSeq<T> {
    items: Vec<T>,
}

impl<T: Ord> OrderedSeq<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert `value`, maintaining ascending order.
    pub fn insert(&mut self, value: T) {
        let at = self.items.partition_point(|existing| *existing <= value);
        self.items.insert(at, value);
    }

    /// Remove and return the value at the 0-based `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len())`. An out-of-range pop is a
    /// programming error, not a runtime condition, so it fails fast.
    pub fn pop(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "pop index {index} out of range for sequence of length {}",
            self.items.len()
        );
        self.items.remove(index)
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord> Default for OrderedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut seq = OrderedSeq::new();
        for v in [5, 1, 4, 2, 3] {
            seq.insert(v);
        }

        assert_eq!(seq.len(), 5);
        let drained: Vec<i32> = (0..5).map(|_| seq.pop(0)).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_pop_at_position() {
        let mut seq = OrderedSeq::new();
        for v in [10, 30, 20] {
            seq.insert(v);
        }

        assert_eq!(seq.pop(1), 20);
        assert_eq!(seq.pop(1), 30);
        assert_eq!(seq.pop(0), 10);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut seq = OrderedSeq::new();
        seq.insert((1, 'a'));
        seq.insert((1, 'a'));
        seq.insert((0, 'z'));

        assert_eq!(seq.pop(0), (0, 'z'));
        assert_eq!(seq.pop(0), (1, 'a'));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_pop_out_of_range_panics() {
        let mut seq = OrderedSeq::new();
        seq.insert(1);
        seq.pop(1);
    }
}
