use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, TieBreak};

/// Strategy pattern: each detector recognises one category and extracts its tie-break key.
pub trait CategoryDetector {
    fn category(&self) -> Category;

    /// `Some(key)` when the hand belongs to this category.
    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: T-J-Q-K-A, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let royal = analysis.suit_info.is_flush() && analysis.straight_info.is_broadway();
        royal.then(|| TieBreak::from_ranks(&[Rank::Ace]))
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let top = analysis.straight_info.top_rank.filter(|_| analysis.suit_info.is_flush())?;
        Some(TieBreak::from_ranks(&[top]))
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = *analysis.rank_groups.kickers().first()?;
        Some(TieBreak::from_ranks(&[quad, kicker]))
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let (trips, pair) = analysis.rank_groups.full_house()?;
        Some(TieBreak::from_ranks(&[trips, pair]))
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        analysis.suit_info.is_flush().then(|| TieBreak::from_ranks(&analysis.ranks))
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let top = analysis.straight_info.top_rank?;
        Some(TieBreak::from_ranks(&[top]))
    }
}

/// Three of a Kind: Three cards of the same rank, two unmatched kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let trips = analysis.rank_groups.trips()?;
        match analysis.rank_groups.kickers()[..] {
            [k1, k2] => Some(TieBreak::from_ranks(&[trips, k1, k2])),
            _ => None,
        }
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        match (&analysis.rank_groups.pairs()[..], &analysis.rank_groups.kickers()[..]) {
            (&[high, low], &[kicker]) => Some(TieBreak::from_ranks(&[high, low, kicker])),
            _ => None,
        }
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        match (&analysis.rank_groups.pairs()[..], &analysis.rank_groups.kickers()[..]) {
            (&[pair], &[k1, k2, k3]) => Some(TieBreak::from_ranks(&[pair, k1, k2, k3])),
            _ => None,
        }
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        Some(TieBreak::from_ranks(&analysis.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
