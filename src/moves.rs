//! Swap moves over sequence positions.

use std::fmt;

/// A candidate swap of two sequence positions.
///
/// Moves are ordered pairs with `i < j` by construction. Tabu identity is
/// the exact pair: forbidding `(i, j)` forbids re-swapping those two
/// positions, not other moves that happen to produce the same resulting
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// First position.
    pub i: usize,
    /// Second position. Always greater than `i`.
    pub j: usize,
}

impl Move {
    /// Creates a swap move. Callers must pass `i < j`.
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j, "swap move requires i < j, got ({i}, {j})");
        Self { i, j }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exact_pair_equality() {
        assert_eq!(Move::new(1, 3), Move::new(1, 3));
        assert_ne!(Move::new(1, 3), Move::new(1, 4));
        assert_ne!(Move::new(1, 3), Move::new(2, 3));
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Move::new(0, 5));
        assert!(set.contains(&Move::new(0, 5)));
        assert!(!set.contains(&Move::new(0, 4)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(2, 7).to_string(), "(2, 7)");
    }
}
