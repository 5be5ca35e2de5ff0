#![deny(missing_debug_implementations)]
//! The rules of Battlesnake, as a pure function from one board to the next.
//!
//! A [Ruleset] takes a [BoardState] and one [SnakeMove] per snake and returns the next board. It
//! never changes the board it is given and keeps no state between calls, so any number of games
//! can be stepped in parallel and a game can be replayed exactly from its seed.
//!
//! ```rust
//! use battlesnake_rules::{BoardState, Move, Point, Ruleset, Snake, SnakeMove, StandardRuleset};
//!
//! let mut board = BoardState::new(11, 11);
//! board.snakes.push(Snake::new("one", [Point::new(5, 5), Point::new(5, 4)], 100));
//!
//! let rules = StandardRuleset::default();
//! let next = rules
//!     .create_next_board_state(&board, &[SnakeMove::new("one", Move::Left)])
//!     .unwrap();
//!
//! assert_eq!(next.snakes[0].head(), Point::new(4, 5));
//! assert_eq!(next.snakes[0].health, 99);
//! ```

mod board;
mod error;
mod moves;
mod point;
pub mod rng;
mod royale;
mod ruleset;
mod settings;
mod standard;

pub use board::{BoardState, Elimination, EliminationCause, Snake};
pub use error::RulesetError;
pub use moves::SnakeMove;
pub use point::{Move, ParseMoveError, Point};
pub use royale::RoyaleRuleset;
pub use ruleset::{BoxedRuleset, Ruleset};
pub use settings::{RoyaleSettings, RulesetConfig, RulesetSettings};
pub use standard::{StandardRuleset, DEFAULT_MAX_HEALTH};
