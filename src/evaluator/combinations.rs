use crate::cards::Card;
use crate::evaluator::EvalError;
use crate::pool::{PoolError, POOL_SIZE};
use std::iter::FusedIterator;

/// Cards in a made hand.
pub const HAND_SIZE: usize = 5;

/// C(7,5).
pub const SUBSET_COUNT: usize = 21;

/// Iterator over all C(7,5) = 21 ways of choosing 5 indices from 7,
/// in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations7Choose5 {
    indices: [usize; HAND_SIZE],
    remaining: usize,
}

impl Combinations7Choose5 {
    pub fn new() -> Self {
        Self { indices: [0, 1, 2, 3, 4], remaining: SUBSET_COUNT }
    }

    /// Rewind to the first combination.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn advance(&mut self) {
        // Rightmost slot that still has room to move; slot i tops out at 7 - 5 + i.
        let Some(i) = (0..HAND_SIZE).rev().find(|&i| self.indices[i] < POOL_SIZE - HAND_SIZE + i)
        else {
            return;
        };
        self.indices[i] += 1;
        for j in (i + 1)..HAND_SIZE {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Default for Combinations7Choose5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Combinations7Choose5 {
    type Item = [usize; HAND_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.indices;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations7Choose5 {}
impl FusedIterator for Combinations7Choose5 {}

/// Lazily yields every five-card subset of a seven-card pool.
///
/// The sequence is finite (21 items), never repeats a subset, and can be
/// replayed with [`FiveCardSubsets::reset`] or by cloning before iterating.
#[derive(Debug, Clone)]
pub struct FiveCardSubsets<'a> {
    cards: &'a [Card; POOL_SIZE],
    indices: Combinations7Choose5,
}

impl<'a> FiveCardSubsets<'a> {
    pub fn new(cards: &'a [Card; POOL_SIZE]) -> Self {
        Self { cards, indices: Combinations7Choose5::new() }
    }

    pub fn reset(&mut self) {
        self.indices.reset();
    }
}

impl Iterator for FiveCardSubsets<'_> {
    type Item = [Card; HAND_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|idx| idx.map(|i| self.cards[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for FiveCardSubsets<'_> {}
impl FusedIterator for FiveCardSubsets<'_> {}

/// Five-card subsets of an arbitrary card slice, which must hold exactly seven cards.
///
/// Only the size is checked here; rejecting duplicate cards is the job of
/// [`Pool`](crate::pool::Pool).
///
/// ```
/// use holdem_eval::cards::parse_cards;
/// use holdem_eval::evaluator::combinations::five_card_subsets;
///
/// let seven = parse_cards("As Ks Qs Js Ts 9s 8s").unwrap();
/// assert_eq!(five_card_subsets(&seven).unwrap().len(), 21);
/// assert!(five_card_subsets(&seven[..6]).is_err());
/// ```
pub fn five_card_subsets(cards: &[Card]) -> Result<FiveCardSubsets<'_>, EvalError> {
    let cards: &[Card; POOL_SIZE] =
        cards.try_into().map_err(|_| EvalError::InvalidPool(PoolError::Size(cards.len())))?;
    Ok(FiveCardSubsets::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn test_generates_21_combinations() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert_eq!(combos.len(), SUBSET_COUNT);
    }

    #[test]
    fn test_all_combinations_valid() {
        for combo in Combinations7Choose5::new() {
            assert!(combo.iter().all(|&i| i < POOL_SIZE));
            assert!(combo.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn test_first_and_last_combination() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_no_duplicates() {
        let mut seen = HashSet::new();
        for combo in Combinations7Choose5::new() {
            assert!(seen.insert(combo), "Duplicate combination found: {combo:?}");
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exact_size_and_exhaustion() {
        let mut iter = Combinations7Choose5::new();
        assert_eq!(iter.len(), 21);
        for expected in (0..21).rev() {
            assert!(iter.next().is_some());
            assert_eq!(iter.len(), expected);
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_reset_replays_sequence() {
        let cards = parse_cards("As Kd Qc Jh Ts 4s 2d").unwrap();
        let mut subsets = five_card_subsets(&cards).unwrap();
        let first: Vec<_> = subsets.by_ref().collect();
        assert_eq!(subsets.next(), None);
        subsets.reset();
        let second: Vec<_> = subsets.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_card_subsets_are_distinct_sets() {
        let cards = parse_cards("As Kd Qc Jh Ts 4s 2d").unwrap();
        let sets: HashSet<BTreeSet<Card>> =
            five_card_subsets(&cards).unwrap().map(|five| five.into_iter().collect()).collect();
        assert_eq!(sets.len(), SUBSET_COUNT);
        assert!(sets.iter().all(|s| s.len() == HAND_SIZE));
    }

    #[test]
    fn test_wrong_pool_size_is_rejected() {
        let cards = parse_cards("As Kd Qc Jh Ts 4s 2d 3c").unwrap();
        let err = five_card_subsets(&cards).unwrap_err();
        assert_eq!(err, EvalError::InvalidPool(PoolError::Size(8)));
    }
}
