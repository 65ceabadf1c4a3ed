//! Short-term memory: a FIFO-bounded record of recently applied moves.

use std::collections::VecDeque;

use crate::moves::Move;

/// Bounded FIFO list of forbidden moves.
///
/// [`record`](Self::record) appends; once the list exceeds its tenure, the
/// oldest entry is evicted — exactly one per excess insertion, so the size
/// never exceeds the tenure. There is no per-entry aging beyond that.
///
/// Membership is a linear scan over at most `tenure` entries. The same
/// move may appear more than once (the engine re-applies a tabu move when
/// every move is tabu); each occurrence ages out independently.
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: VecDeque<Move>,
    tenure: usize,
}

impl TabuList {
    /// Creates an empty list bounded by `tenure` entries.
    pub fn new(tenure: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(tenure + 1),
            tenure,
        }
    }

    /// True when `mv` is currently forbidden.
    pub fn contains(&self, mv: Move) -> bool {
        self.entries.contains(&mv)
    }

    /// Appends `mv`, evicting the oldest entry if the list now exceeds its
    /// tenure.
    pub fn record(&mut self, mv: Move) {
        self.entries.push_back(mv);
        if self.entries.len() > self.tenure {
            self.entries.pop_front();
        }
    }

    /// Number of moves currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no move is forbidden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current content, oldest first.
    pub fn snapshot(&self) -> Vec<Move> {
        self.entries.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_membership() {
        let mut list = TabuList::new(3);
        assert!(!list.contains(Move::new(0, 1)));
        list.record(Move::new(0, 1));
        assert!(list.contains(Move::new(0, 1)));
        assert!(!list.contains(Move::new(0, 2)));
    }

    #[test]
    fn test_fifo_eviction_removes_oldest() {
        let mut list = TabuList::new(2);
        list.record(Move::new(0, 1));
        list.record(Move::new(0, 2));
        list.record(Move::new(1, 2));
        assert_eq!(list.len(), 2);
        assert!(!list.contains(Move::new(0, 1)));
        assert!(list.contains(Move::new(0, 2)));
        assert!(list.contains(Move::new(1, 2)));
        assert_eq!(list.snapshot(), vec![Move::new(0, 2), Move::new(1, 2)]);
    }

    #[test]
    fn test_duplicate_entries_age_independently() {
        let mut list = TabuList::new(2);
        list.record(Move::new(0, 1));
        list.record(Move::new(0, 1));
        list.record(Move::new(2, 3));
        // The older (0,1) was evicted; the newer one is still present.
        assert!(list.contains(Move::new(0, 1)));
        assert_eq!(list.snapshot(), vec![Move::new(0, 1), Move::new(2, 3)]);
    }

    proptest! {
        #[test]
        fn prop_size_never_exceeds_tenure(
            tenure in 1usize..12,
            pairs in prop::collection::vec((0usize..8, 1usize..8), 0..64),
        ) {
            let mut list = TabuList::new(tenure);
            // Reference model: unbounded history, last `tenure` entries live.
            let mut model: Vec<Move> = Vec::new();
            for (a, off) in pairs {
                let mv = Move::new(a, a + off);
                list.record(mv);
                model.push(mv);
                prop_assert!(list.len() <= tenure);
                let live = &model[model.len().saturating_sub(tenure)..];
                prop_assert_eq!(list.snapshot(), live.to_vec());
            }
        }
    }
}
