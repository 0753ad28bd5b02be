//! The seven cards a Hold'em player makes a hand from.

use crate::cards::{parse_cards, Card};
use crate::evaluator::combinations::FiveCardSubsets;
use crate::hand::{first_duplicate, validate_holdem, Board, HandError, HoleCards};
use std::fmt;
use std::str::FromStr;

/// Two hole cards plus five community cards.
pub const POOL_SIZE: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("expected 7 cards, got {0}")]
    Size(usize),
    #[error("duplicate card in pool: {0}")]
    Duplicate(Card),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly seven distinct cards. Order carries no meaning.
///
/// ```
/// use holdem_eval::pool::Pool;
///
/// let pool: Pool = "As Ah Kc Qd Jh 3s 2c".parse().unwrap();
/// assert_eq!(pool.combinations().count(), 21);
/// assert!("As Ah Kc".parse::<Pool>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pool {
    cards: [Card; POOL_SIZE],
}

impl Pool {
    pub fn try_new(cards: &[Card]) -> Result<Self, PoolError> {
        let cards: [Card; POOL_SIZE] =
            cards.try_into().map_err(|_| PoolError::Size(cards.len()))?;
        if let Some(dup) = first_duplicate(&cards) {
            return Err(PoolError::Duplicate(dup));
        }
        Ok(Self { cards })
    }

    /// Combine a player's hole cards with a complete board.
    pub fn from_holdem(hole: &HoleCards, board: &Board) -> Result<Self, PoolError> {
        validate_holdem(hole, board)?;
        if !board.is_complete() {
            return Err(PoolError::Size(hole.as_array().len() + board.len()));
        }
        let mut cards = Vec::with_capacity(POOL_SIZE);
        cards.extend(hole.as_array());
        cards.extend_from_slice(board.as_slice());
        Self::try_new(&cards)
    }

    pub fn cards(&self) -> &[Card; POOL_SIZE] {
        &self.cards
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// All 21 five-card subsets, in lexicographic index order.
    pub fn combinations(&self) -> FiveCardSubsets<'_> {
        FiveCardSubsets::new(&self.cards)
    }
}

impl TryFrom<&[Card]> for Pool {
    type Error = PoolError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Pool::try_new(cards)
    }
}

impl FromStr for Pool {
    type Err = PoolError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| PoolError::CardParse(e.to_string()))?;
        Pool::try_new(&cards)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
