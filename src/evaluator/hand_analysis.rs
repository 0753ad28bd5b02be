use super::rank_groups::{RankCounts, RankGroups};
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandValue, TieBreak};

/// Pre-computed analysis of a 5-card hand.
/// Built once per combination and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks in descending order, Ace high.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts: RankCounts = [0; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn build_evaluation(&self, category: Category, tie_break: TieBreak) -> Evaluation {
        let value = HandValue::from_parts(category, &tie_break);
        Evaluation { category, tie_break, best_five: self.sorted_cards, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let five: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        HandAnalysis::new(&five)
    }

    #[test]
    fn test_royal_flush_analysis() {
        let analysis = analyze("Ts Js Qs Ks As");
        assert!(analysis.suit_info.is_flush());
        assert!(analysis.straight_info.is_broadway());
        assert_eq!(analysis.rank_groups.kickers().len(), 5);
    }

    #[test]
    fn test_full_house_analysis() {
        let analysis = analyze("2s 9c 2h 9s 2d");
        assert_eq!(analysis.rank_groups.full_house(), Some((Rank::Two, Rank::Nine)));
        assert!(!analysis.suit_info.is_flush());
    }

    #[test]
    fn test_wheel_straight_analysis() {
        let analysis = analyze("As 2h 3d 4c 5s");
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Five));
        // Ace still sorts high outside of straight detection.
        assert_eq!(analysis.ranks[0], Rank::Ace);
    }

    #[test]
    fn test_cards_sorted_descending() {
        let analysis = analyze("3s Ah 5d Kc 9s");
        assert_eq!(
            analysis.ranks,
            [Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]
        );
        assert_eq!(analysis.sorted_cards[0], Card::new(Rank::Ace, crate::cards::Suit::Hearts));
    }
}
