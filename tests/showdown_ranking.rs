use holdem_eval::deck::Deck;
use holdem_eval::evaluator::{select_best, Category, EvalError};
use holdem_eval::pool::Pool;
use holdem_eval::showdown::rank_players;
use std::collections::BTreeMap;

fn pool(s: &str) -> Pool {
    s.parse().expect("valid pool")
}

#[test]
fn identical_flushes_split_the_pot() {
    let board = "Ah Kh 9h 7h 4h";
    let a = pool(&format!("2s 3s {board}"));
    let b = pool(&format!("5d 6d {board}"));
    let c = pool(&format!("Qc Qd {board}"));
    let standings = rank_players([("a", &a), ("b", &b), ("c", &c)]).unwrap();

    assert_eq!(standings.groups().len(), 1);
    assert!(standings.is_split_pot());
    let winners = standings.winners();
    assert_eq!(winners.category(), Category::Flush);
    assert_eq!(winners.tie_break().as_slice(), &[14, 13, 9, 7, 4]);
    assert_eq!(winners.players().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn higher_flush_card_from_hand_wins_outright() {
    let board = "Ah Kh 9h 7h 4c";
    let queen = pool(&format!("Qh 2s {board}"));
    let jack = pool(&format!("Jh 2d {board}"));
    let standings = rank_players([("jack", &jack), ("queen", &queen)]).unwrap();
    assert!(!standings.is_split_pot());
    assert_eq!(standings.placement_of(&"queen"), Some(0));
    assert_eq!(standings.placement_of(&"jack"), Some(1));
}

#[test]
fn no_players_is_an_error() {
    let empty: Vec<(u32, &Pool)> = Vec::new();
    assert_eq!(rank_players(empty).unwrap_err(), EvalError::EmptyField);
}

#[test]
fn every_player_is_placed_once_and_groups_descend() {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(2024);
    let pools = deck.deal_holdem(9).unwrap();
    let standings = rank_players(pools.iter().enumerate()).unwrap();

    let mut seen: Vec<usize> =
        standings.groups().iter().flat_map(|g| g.players().copied()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..9).collect::<Vec<_>>());

    let leaders: Vec<_> = standings.groups().iter().map(|g| g.members()[0].1).collect();
    assert!(leaders.windows(2).all(|w| w[0] > w[1]));

    for group in standings.groups() {
        for (id, eval) in group.members() {
            assert_eq!(*eval, select_best(&pools[*id]).unwrap());
            assert_eq!(eval.category, group.category());
        }
    }
}

#[test]
fn map_of_named_players_ranks_by_hand() {
    let mut pools = BTreeMap::new();
    pools.insert("quads", pool("9s 9h 9d 9c 2s 3h 5d"));
    pools.insert("boat", pool("Ks Kh Kd 2c 2h 7s 8d"));
    pools.insert("air", pool("As Qh 9d 7c 4h 3s 2d"));
    let groups = rank_players(&pools).unwrap().into_groups();
    let cats: Vec<Category> = groups.iter().map(|g| g.category()).collect();
    assert_eq!(cats, vec![Category::FourOfAKind, Category::FullHouse, Category::HighCard]);
    assert_eq!(groups[0].players().next(), Some(&&"quads"));
}
