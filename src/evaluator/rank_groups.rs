use crate::cards::Rank;

/// Rank-to-count table indexed by the high-ace ordinal (slots 2..=14 used).
pub type RankCounts = [u8; 15];

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_counts(rank_counts: &RankCounts) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Highest rank held exactly three times.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// `(triple, pair)` when one rank appears at least three times and a
    /// different rank at least twice. With two triples the higher one leads.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let (trips, _) = *self.groups.iter().find(|(_, count)| *count >= 3)?;
        let (pair, _) = *self.groups.iter().find(|&&(rank, count)| rank != trips && count >= 2)?;
        Some((trips, pair))
    }

    /// Pair ranks, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Singleton ranks, descending.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
