//! holdem-eval: Texas Hold'em hand evaluation library
//!
//! Goals:
//! - Deterministic best-five selection from a seven-card pool
//! - Total ordering of hands by category, then tie-break key
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_eval::cards::{Card, Rank, Suit};
//! use holdem_eval::evaluator::{evaluate_holdem, Category};
//! use holdem_eval::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ).unwrap();
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::OnePair);
//! assert_eq!(eval.tie_break.as_slice(), &[14, 13, 12, 11]);
//! ```
//!
//! ## Showdown
//! ```
//! use holdem_eval::pool::Pool;
//! use holdem_eval::showdown::rank_players;
//!
//! let a: Pool = "2s 3h Ac Kd Qh Js Tc".parse().unwrap();
//! let b: Pool = "4d 5c Ac Kd Qh Js Tc".parse().unwrap();
//! let standings = rank_players([("a", &a), ("b", &b)]).unwrap();
//! assert!(standings.is_split_pot());
//! ```
//!
//! ## Features
//! - `parallel`: evaluate players' pools on the rayon thread pool
//! - `bench`: criterion benchmarks (`cargo bench --features bench`)

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod pool;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
