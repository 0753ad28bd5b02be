use crate::cards::{Card, Suit};

/// Suit-to-count table for one five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; 4],
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            counts[card.suit().index()] += 1;
        }
        let flush_suit =
            Suit::ALL.iter().copied().find(|s| counts[s.index()] as usize == cards.len());
        SuitInfo { counts, flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_flush() {
        let info = SuitInfo::detect(&five("As Ks Qs Js 9s"));
        assert!(info.is_flush());
        assert_eq!(info.flush_suit, Some(Suit::Spades));
        assert_eq!(info.counts[Suit::Spades.index()], 5);
    }

    #[test]
    fn test_not_flush() {
        let info = SuitInfo::detect(&five("As Kh Qs Js 9s"));
        assert!(!info.is_flush());
        assert_eq!(info.counts, [0, 0, 1, 4]);
    }
}
