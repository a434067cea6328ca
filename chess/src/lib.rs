//! # duelchess
//!
//! A library for simulating complete games of chess between pluggable
//! move-selection strategies and tallying the outcomes.
//!
//! The core is deliberately small: a map-based [`Board`], a pure per-piece
//! destination generator ([`movegen`]), and a clone-and-check legality filter.
//! Castling, en passant, promotion and repetition draws are not modeled.
//!
//! # Example
//!
//! ```
//! use duelchess::game::{self, Game};
//! use duelchess::strategy::{Greedy, Random, Strategy};
//!
//! // One game, random versus greedy.
//! let mut game = Game::new(Box::new(Random::new()), Box::new(Greedy::new()));
//! let outcome = game.play().unwrap();
//! println!("{}", outcome);
//!
//! // A short series with alternating colors.
//! let tally = game::play_series(
//!     4,
//!     || Box::new(Random::new()) as Box<dyn Strategy>,
//!     || Box::new(Greedy::new()) as Box<dyn Strategy>,
//! )
//! .unwrap();
//! assert_eq!(tally.games(), 4);
//! ```

pub use duelchess_base::geometry;
pub use duelchess_base::types;

pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod strategy;

pub use board::{Board, PrettyStyle};
pub use game::{Game, GameError, Tally};
pub use moves::{Move, MoveError};
pub use strategy::Strategy;
pub use types::{Color, Outcome, Piece, PieceKind, Position};
