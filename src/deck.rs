use crate::cards::{Card, Suit};
use crate::hand::{first_duplicate, Board, HoleCards, BOARD_SIZE};
use crate::pool::{Pool, PoolError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: needed {needed} cards, {remaining} remaining")]
    Exhausted { needed: usize, remaining: usize },
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// A stack of cards; draws come off the top.
#[derive(Debug, Clone)]
pub struct Deck {
    // Top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 52 cards, unshuffled.
    ///
    /// Built suit by suit (spades, hearts, diamonds, clubs), Ace through King,
    /// so the King of Clubs is on top.
    ///
    /// ```
    /// use holdem_eval::cards::{Card, Rank, Suit};
    /// use holdem_eval::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.draw(), Some(Card::new(Rank::King, Suit::Clubs)));
    /// assert_eq!(deck.draw(), Some(Card::new(Rank::Queen, Suit::Clubs)));
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
            for number in 1..=13 {
                if let Ok(card) = Card::from_number(number, suit) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// A custom deck; the first listed card is the first one drawn.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Next card off the top, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Up to `n` cards off the top, in draw order.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    /// Deal two hole cards to each player, then a five-card board, and return
    /// each player's seven-card pool in seat order.
    ///
    /// The deck is left untouched when dealing fails.
    ///
    /// ```
    /// use holdem_eval::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(7);
    /// let pools = deck.deal_holdem(3).unwrap();
    /// assert_eq!(pools.len(), 3);
    /// assert_eq!(deck.len(), 52 - 3 * 2 - 5);
    /// ```
    pub fn deal_holdem(&mut self, players: usize) -> Result<Vec<Pool>, DeckError> {
        let remaining = self.len();
        let needed = players
            .checked_mul(2)
            .and_then(|n| n.checked_add(BOARD_SIZE))
            .unwrap_or(usize::MAX);
        if needed > remaining {
            return Err(DeckError::Exhausted { needed, remaining });
        }

        // Peek in draw order; only pop once every pool is valid.
        let keep = remaining - needed;
        let dealt: Vec<Card> = self.cards[keep..].iter().rev().copied().collect();
        if let Some(dup) = first_duplicate(&dealt) {
            return Err(PoolError::Duplicate(dup).into());
        }
        let (holes, board) = dealt.split_at(players * 2);
        let board = Board::try_new(board.to_vec()).map_err(PoolError::from)?;
        let pools = holes
            .chunks_exact(2)
            .map(|pair| {
                let hole = HoleCards::from_slice(pair)?;
                Pool::from_holdem(&hole, &board)
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.cards.truncate(keep);
        Ok(pools)
    }
}
