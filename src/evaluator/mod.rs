pub mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{first_duplicate, Board, HoleCards};
use crate::pool::{Pool, PoolError};
use combinations::HAND_SIZE;
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Every category, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category-specific tie-break key: up to five rank values (Ace = 14, except
/// the wheel whose key is `[5]`), compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TieBreak {
    values: [u8; HAND_SIZE],
    len: u8,
}

impl TieBreak {
    pub(crate) fn from_ranks(ranks: &[Rank]) -> Self {
        let mut values = [0u8; HAND_SIZE];
        for (slot, rank) in values.iter_mut().zip(ranks) {
            *slot = rank.value();
        }
        TieBreak { values, len: ranks.len().min(HAND_SIZE) as u8 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub tie_break: TieBreak,
    /// The five cards that make the hand, highest rank first.
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equal means equal rank (same category and key), even if the cards differ.
impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    pub fn rank_key(&self) -> (Category, TieBreak) {
        (self.category, self.tie_break)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.tie_break)
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and its tie-break key into a comparable value.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts(category: Category, tie_break: &TieBreak) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | k0 (6) | k1 (6) | k2 (6) | k3 (6) | k4 (6) | 10 zero bits ]
        // Unused key slots stay zero; within one category every key has the same length.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category.ordinal() as u64) << CAT_SHIFT;
        for (i, k) in tie_break.as_slice().iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*k as u64) << offset;
        }
        HandValue(v)
    }
}

/// A five-card input that cannot be classified.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComboError {
    #[error("expected 5 cards, got {0}")]
    Size(usize),
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid pool: {0}")]
    InvalidPool(#[from] PoolError),
    #[error("invalid combination: {0}")]
    InvalidCombo(#[from] ComboError),
    #[error("no players to rank")]
    EmptyField,
}

/// Classify exactly five distinct cards into a category and tie-break key.
///
/// ```
/// use holdem_eval::cards::parse_cards;
/// use holdem_eval::evaluator::{classify, Category};
///
/// let wheel = parse_cards("As 2d 3h 4c 5s").unwrap();
/// let (category, key) = classify(&wheel).unwrap();
/// assert_eq!(category, Category::Straight);
/// assert_eq!(key.as_slice(), &[5]);
///
/// assert!(classify(&wheel[..4]).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<(Category, TieBreak), EvalError> {
    let five: &[Card; HAND_SIZE] =
        cards.try_into().map_err(|_| ComboError::Size(cards.len()))?;
    Ok(evaluate_five(five)?.rank_key())
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Result<Evaluation, EvalError> {
    use detector::{CategoryDetector, HighCardDetector, DETECTORS};
    use hand_analysis::HandAnalysis;

    if let Some(dup) = first_duplicate(cards) {
        return Err(ComboError::Duplicate(dup).into());
    }

    let analysis = HandAnalysis::new(cards);
    let hit = DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis).map(|key| (detector.category(), key)));
    let (category, tie_break) = hit.unwrap_or_else(|| {
        (HighCardDetector.category(), TieBreak::from_ranks(&analysis.ranks))
    });
    Ok(analysis.build_evaluation(category, tie_break))
}

/// Best five-card hand out of a seven-card pool.
///
/// Every one of the 21 subsets is classified and the maximum under
/// `(category, tie-break key)` is kept. When several subsets tie, the first
/// one seen is returned; the category and key are the same either way.
///
/// ```
/// use holdem_eval::evaluator::{select_best, Category};
/// use holdem_eval::pool::Pool;
///
/// let pool: Pool = "2s 2h 2d 9c 9s 5h Kd".parse().unwrap();
/// let best = select_best(&pool).unwrap();
/// assert_eq!(best.category, Category::FullHouse);
/// assert_eq!(best.tie_break.as_slice(), &[2, 9]);
/// ```
pub fn select_best(pool: &Pool) -> Result<Evaluation, EvalError> {
    let mut best: Option<Evaluation> = None;
    for five in pool.combinations() {
        let eval = evaluate_five(&five)?;
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    let best = best.ok_or(ComboError::Size(0))?;
    log::trace!("best hand for [{pool}]: {best}");
    Ok(best)
}

/// [`select_best`] over an unchecked card slice; the slice is validated as a pool first.
pub fn select_best_from(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let pool = Pool::try_new(cards)?;
    select_best(&pool)
}

/// Evaluate a Hold'em hand given hole cards and a complete board.
///
/// ```
/// use holdem_eval::evaluator::{evaluate_holdem, Category};
/// use holdem_eval::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::OnePair);
/// assert_eq!(eval.tie_break.as_slice(), &[14, 12, 11, 9]);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    let pool = Pool::from_holdem(hole, board)?;
    select_best(&pool)
}

/// Compare two Hold'em hands on a shared board.
///
/// ```
/// use holdem_eval::evaluator::compare_holdem;
/// use holdem_eval::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let aces: HoleCards = "As Ah".parse().unwrap();
/// let kings: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&aces, &kings, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};
    use crate::hand::HandError;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn key_of(s: &str) -> (Category, Vec<u8>) {
        let e = evaluate_five(&five(s)).unwrap();
        (e.category, e.tie_break.as_slice().to_vec())
    }

    #[test]
    fn short_board_is_an_invalid_pool() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let board: Board = "2c".parse().unwrap();
        let err = evaluate_holdem(&hole, &board).unwrap_err();
        assert_eq!(err, EvalError::InvalidPool(PoolError::Size(3)));
    }

    #[test]
    fn compare_propagates_overlap() {
        let a: HoleCards = "As Ks".parse().unwrap();
        let b: HoleCards = "2c 3c".parse().unwrap();
        let board: Board = "2c 9d Th Js 4h".parse().unwrap();
        let err = compare_holdem(&a, &b, &board).unwrap_err();
        assert!(matches!(err, EvalError::InvalidPool(PoolError::Hand(HandError::Overlap(_)))));
    }

    #[test]
    fn classify_rejects_bad_combos() {
        let cards = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(classify(&cards), Err(EvalError::InvalidCombo(ComboError::Size(4))));

        let dup = parse_cards("As Ks Qs Js As").unwrap();
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(classify(&dup), Err(EvalError::InvalidCombo(ComboError::Duplicate(ace))));
    }

    #[test]
    fn evaluate_five_categories_and_keys() {
        assert_eq!(key_of("As Ks Qs Js Ts"), (Category::RoyalFlush, vec![14]));
        assert_eq!(key_of("9h 8h 7h 6h 5h"), (Category::StraightFlush, vec![9]));
        assert_eq!(key_of("5d 4d 3d 2d Ad"), (Category::StraightFlush, vec![5]));
        assert_eq!(key_of("Kc Kd Kh Ks 2s"), (Category::FourOfAKind, vec![13, 2]));
        assert_eq!(key_of("Tc Td Th 2s 2h"), (Category::FullHouse, vec![10, 2]));
        assert_eq!(key_of("Ah 9h 7h 3h 2h"), (Category::Flush, vec![14, 9, 7, 3, 2]));
        assert_eq!(key_of("Ac 2d 3h 4s 5c"), (Category::Straight, vec![5]));
        assert_eq!(key_of("Qc Qd Qh 9s 2c"), (Category::ThreeOfAKind, vec![12, 9, 2]));
        assert_eq!(key_of("Jc Jd 9c 9h 2s"), (Category::TwoPair, vec![11, 9, 2]));
        assert_eq!(key_of("Ah Ad Ts 9c 2d"), (Category::OnePair, vec![14, 10, 9, 2]));
        assert_eq!(key_of("Ah Kd 7s 5c 2d"), (Category::HighCard, vec![14, 13, 7, 5, 2]));
    }

    #[test]
    fn hand_value_orders_category_before_key() {
        let top_pair = evaluate_five(&five("Ah Ad Ks Qc Jd")).unwrap();
        let low_two_pair = evaluate_five(&five("3h 3d 2s 2c 4d")).unwrap();
        assert!(low_two_pair > top_pair);
        assert!(low_two_pair.value().raw() > top_pair.value().raw());
    }

    #[test]
    fn equal_rank_with_different_suits_is_equal() {
        let a = evaluate_five(&five("Ah Kh 7s 5c 2d")).unwrap();
        let b = evaluate_five(&five("Ac Kc 7d 5h 2s")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rank_key(), b.rank_key());
        assert_ne!(a.best_five, b.best_five);
    }

    #[test]
    fn select_best_finds_full_house_from_trips_and_pair() {
        let cards = parse_cards("2s 2h 2d 9c 9s 5h Kd").unwrap();
        let best = select_best_from(&cards).unwrap();
        assert_eq!(best.category, Category::FullHouse);
        assert_eq!(best.tie_break.as_slice(), &[2, 9]);
    }

    #[test]
    fn select_best_prefers_the_higher_straight() {
        // A-2-3-4-5-6 holds both the wheel and the six-high straight.
        let best = select_best_from(&parse_cards("Ac 2d 3h 4s 5c 6d Kh").unwrap()).unwrap();
        assert_eq!(best.rank_key().0, Category::Straight);
        assert_eq!(best.tie_break.as_slice(), &[6]);
    }

    #[test]
    fn select_best_from_validates_pool() {
        let six = parse_cards("Ac 2d 3h 4s 5c 6d").unwrap();
        assert_eq!(select_best_from(&six), Err(EvalError::InvalidPool(PoolError::Size(6))));
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(Category::RoyalFlush.ordinal(), 9);
        let e = evaluate_five(&five("Jc Jd 9c 9h 2s")).unwrap();
        assert_eq!(e.to_string(), "Two Pair [11, 9, 2]");
    }
}
