//! Move outcomes and move errors.

use crate::{Player, Position};
use derive_more::{Display, Error};

/// What happened after a mark was placed.
///
/// Derived fresh from the board after every move; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    /// The game goes on with the other player to move.
    #[display("Continue")]
    Continue,
    /// The mover completed a line.
    #[display("Player {} wins", _0)]
    Win(Player),
    /// The board filled up without a line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`: the caller should reset the board.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square is already taken. Expected input noise; ignore the click.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The index is outside 0-8. The caller broke the contract.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The AI was asked to move with nothing to choose from.
    #[display("No available cells to choose from")]
    NoAvailableCells,
}
