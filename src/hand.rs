use crate::cards::{parse_cards, Card};
use std::str::FromStr;

/// Number of community cards on a complete Hold'em board.
pub const BOARD_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate card on board: {0}")]
    DuplicateBoardCards(Card),
    #[error("hole card {0} is also on the board")]
    Overlap(Card),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Returns the first card that appears more than once, comparing by rank and suit.
pub(crate) fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards.iter().enumerate().find(|(i, c)| cards[..*i].contains(c)).map(|(_, c)| *c)
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_eval::cards::{Card, Rank, Suit};
/// use holdem_eval::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards (flop, turn, river). Holds up to five distinct cards.
///
/// ```
/// use holdem_eval::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert!(!board.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > BOARD_SIZE {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        if let Some(dup) = first_duplicate(&cards) {
            return Err(HandError::DuplicateBoardCards(dup));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once the river is out.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == BOARD_SIZE
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check that hole cards and a (possibly partial) board can coexist in one deal.
///
/// ```
/// use holdem_eval::hand::{validate_holdem, Board, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// validate_holdem(&hole, &board).unwrap();
///
/// let clash: Board = "As 3c 4c".parse().unwrap();
/// assert!(validate_holdem(&hole, &clash).is_err());
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    match hole.as_array().into_iter().find(|c| board.as_slice().contains(c)) {
        Some(card) => Err(HandError::Overlap(card)),
        None => Ok(()),
    }
}
