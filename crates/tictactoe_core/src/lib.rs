//! Tic-tac-toe game state.
//!
//! This crate owns the rules of the game and nothing else: the 3x3 board,
//! whose turn it is, the running score, and win/draw detection. Rendering,
//! sound and timers live in the `tictactoe` front end, which drives a
//! [`GameState`] through [`GameState::apply_move`] and [`GameState::reset`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(game.apply_move(index), Ok(Outcome::Continue));
//! }
//! assert_eq!(game.apply_move(2), Ok(Outcome::Win(Player::X)));
//! assert_eq!(game.scores().get(Player::X), 1);
//!
//! game.reset();
//! assert_eq!(game.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
mod outcome;
mod position;
mod score;
mod types;

pub mod rules;

pub use ai::pick_uniform;
pub use game::GameState;
pub use outcome::{MoveError, Outcome};
pub use position::Position;
pub use score::Scores;
pub use types::{Board, Player, Square};
