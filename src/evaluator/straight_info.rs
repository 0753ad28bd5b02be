use crate::cards::Rank;

/// Whether five ranks form a straight, and the rank at its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// The ranks are read twice: once with the Ace as 14 and once with it as 1.
    /// A run in the first reading wins, so A-K-Q-J-T tops out at the Ace and
    /// A-2-3-4-5 (the wheel) tops out at the Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let top = run_top(ranks.map(Rank::value)).or_else(|| run_top(ranks.map(Rank::low_value)));
        StraightInfo { top_rank: top.and_then(|v| Rank::from_value(v).ok()) }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }

    pub fn is_broadway(&self) -> bool {
        self.top_rank == Some(Rank::Ace)
    }
}

/// Highest value of five consecutive distinct values, if they are consecutive.
fn run_top(mut values: [u8; 5]) -> Option<u8> {
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1).then_some(values[4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank::*;

    #[test]
    fn test_regular_straight() {
        let info = StraightInfo::detect(&[King, Queen, Jack, Ten, Nine]);
        assert_eq!(info.top_rank, Some(King));
        assert!(!info.is_broadway());
    }

    #[test]
    fn test_ace_high_straight() {
        let info = StraightInfo::detect(&[Ace, King, Queen, Jack, Ten]);
        assert!(info.is_straight());
        assert!(info.is_broadway());
    }

    #[test]
    fn test_wheel() {
        let info = StraightInfo::detect(&[Ace, Two, Three, Four, Five]);
        assert_eq!(info.top_rank, Some(Five));
    }

    #[test]
    fn test_ace_does_not_wrap_around() {
        let info = StraightInfo::detect(&[Queen, King, Ace, Two, Three]);
        assert!(!info.is_straight());
    }

    #[test]
    fn test_not_straight_pair() {
        let info = StraightInfo::detect(&[Ace, Ace, King, Queen, Jack]);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn test_unsorted_input() {
        let info = StraightInfo::detect(&[Nine, King, Ten, Jack, Queen]);
        assert_eq!(info.top_rank, Some(King));
    }
}
