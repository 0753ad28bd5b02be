//! Ranking several players' pools against each other.
//!
//! Each player's best hand is found with [`select_best`], players are sorted
//! strongest first, and players whose hands are exactly equal in rank share a
//! [`RankGroup`]. A top group with more than one member is a split pot.

use crate::evaluator::{select_best, Category, EvalError, Evaluation, TieBreak};
use crate::pool::Pool;

/// Players holding hands of identical rank (same category and tie-break key).
#[derive(Debug, Clone)]
pub struct RankGroup<I> {
    members: Vec<(I, Evaluation)>,
}

impl<I> RankGroup<I> {
    fn leader(&self) -> &Evaluation {
        // Groups are only built with at least one member.
        &self.members[0].1
    }

    pub fn category(&self) -> Category {
        self.leader().category
    }

    pub fn tie_break(&self) -> TieBreak {
        self.leader().tie_break
    }

    /// Player ids, in the order the caller supplied them.
    pub fn players(&self) -> impl Iterator<Item = &I> + '_ {
        self.members.iter().map(|(id, _)| id)
    }

    /// Each member with their own best hand; the chosen cards may differ
    /// between members even though the rank is identical.
    pub fn members(&self) -> &[(I, Evaluation)] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered partition of players into rank groups, best group first.
#[derive(Debug, Clone)]
pub struct Standings<I> {
    groups: Vec<RankGroup<I>>,
}

impl<I> Standings<I> {
    pub fn groups(&self) -> &[RankGroup<I>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<RankGroup<I>> {
        self.groups
    }

    /// The top group. Standings are never empty.
    pub fn winners(&self) -> &RankGroup<I> {
        &self.groups[0]
    }

    pub fn is_split_pot(&self) -> bool {
        self.winners().len() > 1
    }

    /// Zero-based index of the group holding `id`.
    pub fn placement_of(&self, id: &I) -> Option<usize>
    where
        I: PartialEq,
    {
        self.groups.iter().position(|g| g.players().any(|p| p == id))
    }
}

/// Rank every player's pool, strongest first, grouping exact ties.
///
/// Player ids must be unique, as the keys of a map are; debug builds assert it.
/// Fails with [`EvalError::EmptyField`] when no players are given.
///
/// ```
/// use std::collections::BTreeMap;
/// use holdem_eval::evaluator::Category;
/// use holdem_eval::pool::Pool;
/// use holdem_eval::showdown::rank_players;
///
/// let mut pools = BTreeMap::new();
/// pools.insert("alice", "2s 3s Ah Kh 9h 7h 4h".parse::<Pool>().unwrap());
/// pools.insert("bob", "5d 6d Ah Kh 9h 7h 4h".parse::<Pool>().unwrap());
/// pools.insert("carol", "As Ad Ah Kh 9h 7c 4c".parse::<Pool>().unwrap());
///
/// let standings = rank_players(&pools).unwrap();
/// assert_eq!(standings.winners().category(), Category::Flush);
/// assert!(standings.is_split_pot());
/// assert_eq!(standings.placement_of(&&"carol"), Some(1));
/// ```
pub fn rank_players<'a, I, P>(pools: P) -> Result<Standings<I>, EvalError>
where
    P: IntoIterator<Item = (I, &'a Pool)>,
    I: PartialEq + Send,
{
    let entries: Vec<(I, &Pool)> = pools.into_iter().collect();
    if entries.is_empty() {
        return Err(EvalError::EmptyField);
    }
    debug_assert!(
        entries
            .iter()
            .enumerate()
            .all(|(i, (id, _))| entries[..i].iter().all(|(seen, _)| seen != id)),
        "duplicate player id passed to rank_players"
    );
    let players = entries.len();

    let mut evaluated = evaluate_all(entries)?;
    // Stable: tied players keep the caller's order.
    evaluated.sort_by(|a, b| b.1.cmp(&a.1));

    let mut groups: Vec<RankGroup<I>> = Vec::new();
    for (id, eval) in evaluated {
        if let Some(group) = groups.last_mut().filter(|g| *g.leader() == eval) {
            group.members.push((id, eval));
        } else {
            groups.push(RankGroup { members: vec![(id, eval)] });
        }
    }

    let standings = Standings { groups };
    log::debug!(
        "ranked {} players into {} groups; top {} x{}{}",
        players,
        standings.groups.len(),
        standings.winners().leader(),
        standings.winners().len(),
        if standings.is_split_pot() { " (split pot)" } else { "" }
    );
    Ok(standings)
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<I>(entries: Vec<(I, &Pool)>) -> Result<Vec<(I, Evaluation)>, EvalError> {
    entries.into_iter().map(|(id, pool)| select_best(pool).map(|eval| (id, eval))).collect()
}

#[cfg(feature = "parallel")]
fn evaluate_all<I: Send>(entries: Vec<(I, &Pool)>) -> Result<Vec<(I, Evaluation)>, EvalError> {
    use rayon::prelude::*;
    entries.into_par_iter().map(|(id, pool)| select_best(pool).map(|eval| (id, eval))).collect()
}
