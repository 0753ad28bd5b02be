use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The discriminant is the high-ace ordinal used for every tie-break
/// comparison (Two = 2 .. Ace = 14). The conventional 1..=13 numbering, where
/// 1 is the Ace, is available through [`Rank::from_number`] and [`Rank::number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// High-ace ordinal, 2..=14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Face number, 1..=13 with the Ace as 1.
    pub const fn number(self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => r as u8,
        }
    }

    /// Ordinal used when the Ace plays low in the wheel.
    pub const fn low_value(self) -> u8 {
        self.number()
    }

    /// Build a rank from its face number, 1..=13 with 1 as the Ace.
    ///
    /// ```
    /// use holdem_eval::cards::Rank;
    ///
    /// assert_eq!(Rank::from_number(1).unwrap(), Rank::Ace);
    /// assert_eq!(Rank::from_number(13).unwrap(), Rank::King);
    /// assert!(Rank::from_number(14).is_err());
    /// ```
    pub fn from_number(n: u8) -> Result<Self, RankParseError> {
        match n {
            1 => Ok(Rank::Ace),
            2..=13 => Self::from_value(n),
            _ => Err(RankParseError::OutOfRange(n)),
        }
    }

    /// Build a rank from its high-ace ordinal, 2..=14.
    pub fn from_value(v: u8) -> Result<Self, RankParseError> {
        Rank::ALL.iter().copied().find(|r| r.value() == v).ok_or(RankParseError::OutOfRange(v))
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Long form used by [`Card::name`]: face cards by name, pips by number.
    pub fn name(self) -> String {
        match self {
            Rank::Jack => "Jack".to_string(),
            Rank::Queen => "Queen".to_string(),
            Rank::King => "King".to_string(),
            Rank::Ace => "Ace".to_string(),
            r => r.value().to_string(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
    #[error("rank out of range: {0}")]
    OutOfRange(u8),
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;

    /// Face-number conversion (1 = Ace .. 13 = King).
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Rank::from_number(n)
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let r = match lower.as_str() {
            "t" => Rank::Ten,
            "j" | "jack" => Rank::Jack,
            "q" | "queen" => Rank::Queen,
            "k" | "king" => Rank::King,
            "a" | "ace" => Rank::Ace,
            digits => {
                let n: u8 = digits.parse().map_err(|_| RankParseError::Invalid(s.to_string()))?;
                return Rank::from_number(n).map_err(|_| RankParseError::Invalid(s.to_string()));
            }
        };
        Ok(r)
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '1' | 'A' => Ok(Rank::Ace),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            d @ '2'..='9' => Rank::from_number(d as u8 - b'0'),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Dense index, used by the suit-count table.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "spd" | "spade" | "spades" | "♠" => Ok(Suit::Spades),
            "h" | "hrt" | "heart" | "hearts" | "♥" => Ok(Suit::Hearts),
            "d" | "dia" | "diamond" | "diamonds" | "♦" => Ok(Suit::Diamonds),
            "c" | "clb" | "club" | "clubs" | "♣" => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::Clubs),
            'd' | '♦' => Ok(Suit::Diamonds),
            'h' | '♥' => Ok(Suit::Hearts),
            's' | '♠' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit. Immutable once built.
///
/// ```
/// use holdem_eval::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.name(), "Ace of Spades");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from a face number (1 = Ace .. 13 = King).
    pub fn from_number(number: u8, suit: Suit) -> Result<Self, RankParseError> {
        Ok(Self::new(Rank::from_number(number)?, suit))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Long name, e.g. `"Queen of Hearts"` or `"7 of Diamonds"`.
    pub fn name(self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Rank text followed by a single suit character: `As`, `10d`, `1h`, `Q♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit_ch = chars.next_back().ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use holdem_eval::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
